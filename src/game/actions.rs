use crate::card::Card;
use crate::error::PlayError;
use crate::pegging::PlayOutcome;
use crate::player::Player;

use super::{Game, GameState};

impl Game {
    /// Lays a card during pegging and pegs the points it scores.
    ///
    /// Points are added to the match score event by event, so the match can
    /// end in the middle of a play. When both hands are played out the game
    /// moves on to counting.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the pegging state, it is not
    /// the player's turn, the card is not in their hand, or the card would
    /// take the count past 31. Nothing changes on error.
    pub fn play(&mut self, player: Player, card: Card) -> Result<PlayOutcome, PlayError> {
        if self.state != GameState::Pegging {
            return Err(PlayError::InvalidState);
        }

        let pegging = self.pegging.as_mut().ok_or(PlayError::InvalidState)?;
        let outcome = pegging.play(player, card)?;
        let pegging_over = pegging.is_over();

        for event in &outcome.events {
            if event.points > 0 {
                self.credit(event.player, u16::from(event.points));
            }
        }

        if pegging_over && self.state == GameState::Pegging {
            self.state = GameState::Counting;
        }

        Ok(outcome)
    }

    /// Returns the player expected to lay the next card.
    ///
    /// Returns `None` outside the pegging state.
    #[must_use]
    pub fn current_player(&self) -> Option<Player> {
        if self.state != GameState::Pegging {
            return None;
        }
        self.pegging.as_ref().and_then(|p| p.active_player())
    }
}
