//! Round count result types.

use crate::player::Player;
use crate::score::HandScore;

/// The count of one hand or crib, and who it was credited to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountedHand {
    /// The player the points belong to.
    pub player: Player,
    /// The score and its breakdown.
    pub score: HandScore,
    /// Whether the points were added to the match score. Counting stops
    /// once the match is won.
    pub credited: bool,
}

/// Result of counting a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The non-dealer's hand, counted first.
    pub pone_hand: CountedHand,
    /// The dealer's hand.
    pub dealer_hand: CountedHand,
    /// The dealer's crib, counted last.
    pub crib: CountedHand,
    /// Match scores after counting, by seat.
    pub scores: [u16; 2],
    /// The winner, if the match ended this round.
    pub winner: Option<Player>,
}
