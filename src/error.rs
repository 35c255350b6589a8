//! Error types for round operations.

use thiserror::Error;

/// The deck has no cards left to deal.
///
/// Unreachable in a realistic round (52 cards cover any legal sequence of
/// draws), but dealing from an exhausted deck is a defined failure, not an
/// index panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur while placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid round state for betting.
    #[error("invalid round state for betting")]
    InvalidState,
    /// Bet amount is negative.
    #[error("bet amount is negative")]
    Negative,
    /// Bet amount exceeds the available bankroll.
    #[error("bet amount exceeds the bankroll")]
    ExceedsBankroll,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// The deck ran out of cards.
    #[error(transparent)]
    Empty(#[from] EmptyDeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The deck ran out of cards.
    #[error(transparent)]
    Empty(#[from] EmptyDeckError),
}

/// Errors that can occur during the dealer's turn and resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid round state for dealer play.
    #[error("invalid round state for dealer play")]
    InvalidState,
    /// The deck ran out of cards.
    #[error(transparent)]
    Empty(#[from] EmptyDeckError),
}

/// Errors that can surface from a driver-orchestrated round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Betting failed.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// The initial deal failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Dealer play or resolution failed.
    #[error(transparent)]
    Dealer(#[from] DealerError),
}
