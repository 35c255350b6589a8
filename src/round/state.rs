//! Round state types.

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the wager.
    Betting,
    /// Wager recorded; initial cards not yet dealt.
    InitialDeal,
    /// Waiting for player hit/stand decisions.
    PlayerTurn,
    /// Player stood; the dealer's hole card is about to be revealed.
    DealerReveal,
    /// Dealer draws out their hand.
    DealerTurn,
    /// Round has ended; the outcome is available.
    Resolved,
}

/// A player's decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

/// Whether the player's turn continues after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnFlow {
    /// The player may act again.
    Continue,
    /// The player's turn is over.
    Stop,
}
