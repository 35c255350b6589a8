use log::debug;

use crate::error::ActionError;
use crate::outcome::RoundOutcome;

use super::{PlayerAction, Round, RoundState, TurnFlow};

impl Round {
    /// Applies a player decision.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out
    /// of cards.
    pub fn apply_action(&mut self, action: PlayerAction) -> Result<TurnFlow, ActionError> {
        match action {
            PlayerAction::Hit => self.player_hit(),
            PlayerAction::Stand => {
                self.player_stand()?;
                Ok(TurnFlow::Stop)
            }
        }
    }

    /// Player action: hit. Deals one card to the player and re-scores.
    ///
    /// After the ace adjustment, a hand at exactly 21 wins the bet and a
    /// busted hand loses it; both end the round. Any other value keeps the
    /// turn open.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck runs out
    /// of cards.
    pub fn player_hit(&mut self) -> Result<TurnFlow, ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.deck.deal()?;
        self.player.add_card(card);
        self.player.adjust_for_aces();
        debug!("player hits {card}, value {}", self.player.value());

        if self.player.is_twenty_one() {
            self.chips.win_bet();
            self.resolve_with(RoundOutcome::PlayerTwentyOne);
            return Ok(TurnFlow::Stop);
        }
        if self.player.is_busted() {
            self.chips.lose_bet();
            self.resolve_with(RoundOutcome::PlayerBust);
            return Ok(TurnFlow::Stop);
        }

        Ok(TurnFlow::Continue)
    }

    /// Player action: stand. Ends the player's turn with no settlement and
    /// hands the round to the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn player_stand(&mut self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.state = RoundState::DealerReveal;
        debug!("player stands at {}", self.player.value());

        Ok(())
    }
}
