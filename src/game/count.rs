use crate::error::CountError;
use crate::player::Player;
use crate::result::{CountedHand, RoundResult};
use crate::score::{HandScore, score_crib, score_hand};

use super::{Game, GameState};

impl Game {
    /// Counts both hands and the crib against the cut.
    ///
    /// The non-dealer counts first, then the dealer, then the dealer's crib.
    /// Each count is added to the match score in that order; once a player
    /// reaches the target score the remaining counts are reported but not
    /// credited.
    ///
    /// # Errors
    ///
    /// Returns an error if pegging has not finished.
    pub fn count(&mut self) -> Result<RoundResult, CountError> {
        if self.state != GameState::Counting {
            return Err(CountError::InvalidState);
        }
        let cut = self.cut.ok_or(CountError::InvalidState)?;

        let pone = self.pone();
        let dealer = self.dealer;
        let pone_score = score_hand(self.hand(pone).cards(), cut)?;
        let dealer_score = score_hand(self.hand(dealer).cards(), cut)?;
        let crib_score = score_crib(&self.crib, cut)?;

        let pone_hand = self.counted(pone, pone_score);
        let dealer_hand = self.counted(dealer, dealer_score);
        let crib = self.counted(dealer, crib_score);

        if self.state == GameState::Counting {
            self.state = GameState::RoundOver;
        }

        tracing::debug!(
            pone = pone_hand.score.total(),
            dealer = dealer_hand.score.total(),
            crib = crib.score.total(),
            "round counted"
        );

        Ok(RoundResult {
            pone_hand,
            dealer_hand,
            crib,
            scores: self.scores,
            winner: self.winner,
        })
    }

    fn counted(&mut self, player: Player, score: HandScore) -> CountedHand {
        let credited = self.credit(player, u16::from(score.total()));
        CountedHand {
            player,
            score,
            credited,
        }
    }
}
