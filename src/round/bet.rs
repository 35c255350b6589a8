use log::debug;

use crate::chips::Money;
use crate::error::{BetError, DealError};

use super::{Round, RoundState};

impl Round {
    /// Places the wager for the round.
    ///
    /// The driver is expected to hand over an already-validated amount; a
    /// bet that is negative or exceeds the bankroll is rejected here rather
    /// than let an inconsistent ledger through.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is past betting, the amount is
    /// negative, or the amount exceeds the bankroll.
    pub fn place_bet(&mut self, amount: Money) -> Result<(), BetError> {
        if self.state != RoundState::Betting {
            return Err(BetError::InvalidState);
        }
        if amount < 0 {
            return Err(BetError::Negative);
        }
        if amount > self.chips.total() {
            return Err(BetError::ExceedsBankroll);
        }

        self.chips.take_bet(amount);
        self.state = RoundState::InitialDeal;
        debug!("bet placed: {amount}");

        Ok(())
    }

    /// Deals the opening cards: two to the player, then two to the dealer.
    ///
    /// The dealer's second card is the hole card. No ace adjustment and no
    /// natural-21 check happen on the opening hands; scoring starts with the
    /// first hit.
    ///
    /// # Errors
    ///
    /// Returns an error if the wager has not been placed yet or the deck
    /// runs out of cards.
    pub fn deal_initial(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::InitialDeal {
            return Err(DealError::InvalidState);
        }

        self.player.add_card(self.deck.deal()?);
        self.player.add_card(self.deck.deal()?);
        self.dealer.add_card(self.deck.deal()?);
        self.dealer.add_card(self.deck.deal()?);

        self.state = RoundState::PlayerTurn;
        debug!(
            "initial deal: player {} vs dealer upcard {}",
            self.player.value(),
            self.dealer.cards()[0]
        );

        Ok(())
    }
}
