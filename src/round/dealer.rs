use log::debug;

use crate::card::Card;
use crate::error::DealerError;
use crate::outcome::RoundOutcome;

use super::{Round, RoundState};

impl Round {
    /// Reveals the dealer's hole card and opens the dealer's turn.
    ///
    /// Display-only transition: the hole card has counted toward the
    /// dealer's value since the initial deal.
    ///
    /// # Errors
    ///
    /// Returns an error if the player has not stood yet.
    pub fn reveal_hole(&mut self) -> Result<Card, DealerError> {
        if self.state != RoundState::DealerReveal {
            return Err(DealerError::InvalidState);
        }

        let hole = self
            .dealer
            .cards()
            .get(1)
            .copied()
            .ok_or(DealerError::InvalidState)?;
        self.state = RoundState::DealerTurn;
        debug!("hole card revealed: {hole}, dealer at {}", self.dealer.value());

        Ok(hole)
    }

    /// Returns whether the dealer must draw another card.
    ///
    /// The dealer keeps drawing until their value exceeds the player's —
    /// a tie is not enough to stand on.
    #[must_use]
    pub fn dealer_must_draw(&self) -> bool {
        self.state == RoundState::DealerTurn && self.dealer.value() <= self.player.value()
    }

    /// Deals one card to the dealer and re-scores.
    ///
    /// After the ace adjustment, a busted dealer ends the round with the
    /// ledger untouched, and a dealer at exactly 21 ends it taking the bet.
    /// Any other value leaves the dealer's turn open.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// of cards.
    pub fn dealer_draw(&mut self) -> Result<Card, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let card = self.deck.deal()?;
        self.dealer.add_card(card);
        self.dealer.adjust_for_aces();
        debug!("dealer draws {card}, value {}", self.dealer.value());

        if self.dealer.is_busted() {
            self.resolve_with(RoundOutcome::DealerBust);
        } else if self.dealer.is_twenty_one() {
            self.chips.lose_bet();
            self.resolve_with(RoundOutcome::DealerTwentyOne);
        }

        Ok(card)
    }

    /// Resolves a round where the dealer stood, by point comparison.
    ///
    /// No chips move in any comparison branch; only a mid-turn 21 or a bust
    /// settles the ledger.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn.
    pub fn resolve(&mut self) -> Result<RoundOutcome, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        let player = self.player.value();
        let dealer = self.dealer.value();
        let outcome = if player > dealer {
            RoundOutcome::PlayerWin
        } else if dealer > player {
            RoundOutcome::DealerWin
        } else {
            RoundOutcome::Push
        };

        self.resolve_with(outcome);
        debug!("resolved on points: {outcome} ({player} vs {dealer})");

        Ok(outcome)
    }
}
