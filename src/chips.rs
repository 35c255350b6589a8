//! Bankroll ledger.

/// Currency amount, in whole chips.
pub type Money = i64;

/// Bankroll a fresh ledger starts with.
pub const STARTING_BANKROLL: Money = 500;

/// A bankroll ledger: the current total and the current bet.
///
/// The ledger itself performs no validation — the round engine vets bet
/// amounts at its boundary, and guarantees at most one of
/// [`Chips::win_bet`] / [`Chips::lose_bet`] fires per round. The total is
/// allowed to be any value the settlements produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chips {
    /// Available bankroll.
    total: Money,
    /// Wager for the current round.
    bet: Money,
}

impl Chips {
    /// Creates a ledger seeded with [`STARTING_BANKROLL`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: STARTING_BANKROLL,
            bet: 0,
        }
    }

    /// Creates a ledger with an explicit starting total.
    #[must_use]
    pub const fn with_total(total: Money) -> Self {
        Self { total, bet: 0 }
    }

    /// Records the wager for the round. No validation performed here.
    pub const fn take_bet(&mut self, amount: Money) {
        self.bet = amount;
    }

    /// Credits the bet to the total.
    pub const fn win_bet(&mut self) {
        self.total += self.bet;
    }

    /// Debits the bet from the total.
    pub const fn lose_bet(&mut self) {
        self.total -= self.bet;
    }

    /// Returns the available bankroll.
    #[must_use]
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Returns the wager for the current round.
    #[must_use]
    pub const fn bet(&self) -> Money {
        self.bet
    }
}

impl Default for Chips {
    fn default() -> Self {
        Self::new()
    }
}
