//! Terminal round outcomes.

use core::fmt;

/// How a round ended.
///
/// Settlement is asymmetric on purpose: only [`RoundOutcome::PlayerTwentyOne`]
/// credits the bet, and only [`RoundOutcome::PlayerBust`] and
/// [`RoundOutcome::DealerTwentyOne`] debit it. A dealer bust and all three
/// point-comparison outcomes leave the ledger untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Player's final value beats the dealer's.
    PlayerWin,
    /// Dealer's final value beats the player's.
    DealerWin,
    /// Equal final values.
    Push,
    /// Player went over 21; the bet is lost.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player hit to exactly 21; the bet is won.
    PlayerTwentyOne,
    /// Dealer drew to exactly 21; the bet is lost.
    DealerTwentyOne,
}

impl fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PlayerWin => "player wins on points",
            Self::DealerWin => "dealer wins on points",
            Self::Push => "push",
            Self::PlayerBust => "player busts",
            Self::DealerBust => "dealer busts",
            Self::PlayerTwentyOne => "player hits 21",
            Self::DealerTwentyOne => "dealer hits 21",
        };
        f.write_str(text)
    }
}
