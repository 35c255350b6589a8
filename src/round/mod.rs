//! Round engine and state machine.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::chips::Chips;
use crate::deck::Deck;
use crate::driver::{Driver, FullTable, PartialTable};
use crate::error::PlayError;
use crate::hand::Hand;
use crate::outcome::RoundOutcome;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{PlayerAction, RoundState, TurnFlow};

/// One round of blackjack against the automated dealer.
///
/// The round exclusively owns its deck, both hands, and the chip ledger, and
/// advances through `Betting → InitialDeal → PlayerTurn → DealerReveal →
/// DealerTurn → Resolved`. Operations called out of order fail with a typed
/// `InvalidState` error rather than corrupting the ledger.
///
/// Drive it step by step, or hand the whole sequence to [`Round::play`]:
///
/// ```no_run
/// use twentyone::Round;
///
/// let round = Round::new(42);
/// assert_eq!(round.chips().total(), 500);
/// ```
#[derive(Debug)]
pub struct Round {
    /// Cards to deal from.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand. The second card is the hole card, hidden from
    /// display until the reveal.
    dealer: Hand,
    /// The chip ledger.
    chips: Chips,
    /// Current round state.
    state: RoundState,
    /// Terminal outcome, set exactly once on entering `Resolved`.
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Creates a round with a freshly shuffled deck and a fresh ledger.
    ///
    /// The shuffle is driven by a ChaCha8 generator seeded from `seed`, so a
    /// round is reproducible from its seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        Self::with_deck(deck)
    }

    /// Creates a round over an explicit deck.
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            chips: Chips::new(),
            state: RoundState::Betting,
            outcome: None,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the terminal outcome, once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    ///
    /// Hiding the hole card is a display concern; the hand itself always
    /// scores both cards.
    #[must_use]
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the chip ledger.
    #[must_use]
    pub const fn chips(&self) -> &Chips {
        &self.chips
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Marks the round resolved with the given outcome.
    const fn resolve_with(&mut self, outcome: RoundOutcome) {
        self.outcome = Some(outcome);
        self.state = RoundState::Resolved;
    }

    /// Returns the table as seen while the hole card is hidden.
    ///
    /// The dealer's upcard is their first dealt card. Returns `None` before
    /// the initial deal.
    #[must_use]
    pub fn partial_table(&self) -> Option<PartialTable<'_>> {
        let dealer_upcard = self.dealer.cards().first().copied()?;
        Some(PartialTable {
            player_cards: self.player.cards(),
            player_value: self.player.value(),
            dealer_upcard,
        })
    }

    /// Returns the table with both hands fully visible.
    #[must_use]
    pub fn full_table(&self) -> FullTable<'_> {
        FullTable {
            player_cards: self.player.cards(),
            player_value: self.player.value(),
            dealer_cards: self.dealer.cards(),
            dealer_value: self.dealer.value(),
        }
    }

    /// Plays the round from betting to resolution against a driver.
    ///
    /// The driver supplies the wager and the hit/stand decisions, and
    /// receives a partial table after the initial deal and after every hit,
    /// full tables from the hole reveal onward, a pacing callback before
    /// each dealer draw, and finally the outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not freshly created, if the driver
    /// supplies a bet outside the bankroll, or if the deck runs dry.
    pub fn play<D: Driver>(&mut self, driver: &mut D) -> Result<RoundOutcome, PlayError> {
        let amount = driver.bet(self.chips.total());
        self.place_bet(amount)?;
        self.deal_initial()?;
        if let Some(table) = self.partial_table() {
            driver.show_partial(&table);
        }

        loop {
            let action = driver.action();
            let flow = self.apply_action(action)?;
            if action == PlayerAction::Hit {
                if let Some(table) = self.partial_table() {
                    driver.show_partial(&table);
                }
            }
            if flow == TurnFlow::Stop {
                break;
            }
        }

        // A terminal hit resolves the round before the dealer ever plays.
        if let Some(outcome) = self.outcome {
            driver.outcome(outcome);
            return Ok(outcome);
        }

        self.reveal_hole()?;
        driver.show_full(&self.full_table());

        let outcome = loop {
            if let Some(outcome) = self.outcome {
                break outcome;
            }
            if self.dealer_must_draw() {
                driver.dealer_pause();
                self.dealer_draw()?;
                driver.show_full(&self.full_table());
            } else {
                break self.resolve()?;
            }
        };

        driver.outcome(outcome);
        Ok(outcome)
    }
}
