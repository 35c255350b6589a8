//! The contract between the round engine and its console driver.
//!
//! The engine never touches stdin/stdout. It pulls inputs through
//! [`BetSource`] and [`ActionSource`] and pushes render events through
//! [`TableView`]; everything interactive — prompt loops, input validation,
//! pacing, greeting text — lives on the driver side.

use crate::card::Card;
use crate::chips::Money;
use crate::outcome::RoundOutcome;
use crate::round::PlayerAction;

/// Everything visible at the table while the dealer's hole card is hidden.
#[derive(Debug, Clone, Copy)]
pub struct PartialTable<'a> {
    /// The player's cards, in dealt order.
    pub player_cards: &'a [Card],
    /// The player's current value.
    pub player_value: u16,
    /// The dealer's face-up card.
    pub dealer_upcard: Card,
}

/// The whole table, once the dealer's hole card is revealed.
#[derive(Debug, Clone, Copy)]
pub struct FullTable<'a> {
    /// The player's cards, in dealt order.
    pub player_cards: &'a [Card],
    /// The player's current value.
    pub player_value: u16,
    /// The dealer's cards, in dealt order.
    pub dealer_cards: &'a [Card],
    /// The dealer's current value.
    pub dealer_value: u16,
}

/// Supplies a validated bet amount.
///
/// Implementations must only return values in `0..=max_allowed`; the engine
/// still rejects anything outside that range with a typed error.
pub trait BetSource {
    /// Obtains the wager for the round.
    fn bet(&mut self, max_allowed: Money) -> Money;
}

/// Supplies the player's hit-or-stand decisions.
pub trait ActionSource {
    /// Obtains the next player action.
    fn action(&mut self) -> PlayerAction;
}

/// Receives render events as the round progresses.
pub trait TableView {
    /// Called after the initial deal and after every player hit.
    fn show_partial(&mut self, table: &PartialTable<'_>);

    /// Called after the hole card is revealed and after every dealer draw.
    fn show_full(&mut self, table: &FullTable<'_>);

    /// Called once with the terminal outcome.
    fn outcome(&mut self, outcome: RoundOutcome);

    /// Called before each dealer draw. Purely presentational pacing.
    fn dealer_pause(&mut self) {}
}

/// A full driver: bet input, action input, and table rendering.
pub trait Driver: BetSource + ActionSource + TableView {}

impl<T: BetSource + ActionSource + TableView> Driver for T {}
