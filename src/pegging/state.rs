//! Pegging state and event types.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::player::Player;

/// Pegging state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeggingState {
    /// Waiting for the given player to lay a card.
    AwaitingPlay(Player),
    /// Both hands are played out and every point is settled.
    RoundOver,
}

/// Kind of pegging score or turn event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeggingEventKind {
    /// The count reached exactly 15.
    Fifteen,
    /// The count reached exactly 31.
    ThirtyOne,
    /// The card matched the rank of the preceding cards; holds how many
    /// consecutive cards share the rank (2, 3 or 4).
    Pair(u8),
    /// The last cards laid form a run of the given length.
    Run(u8),
    /// The player could not lay a card and passed the turn.
    Go,
    /// The player laid the last card before the count was reset.
    LastCard,
}

/// A pegging event credited to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeggingEvent {
    /// The player the event belongs to.
    pub player: Player,
    /// What happened.
    pub kind: PeggingEventKind,
    /// Points awarded (0 for a go).
    pub points: u8,
}

/// Result of laying a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The card laid.
    pub card: Card,
    /// The count after the card, before any reset.
    pub count: u8,
    /// Scores and turn events caused by the play, in order.
    pub events: Vec<PeggingEvent>,
    /// State after the play.
    pub state: PeggingState,
}

impl PlayOutcome {
    /// Returns the points the play earned for `player`.
    #[must_use]
    pub fn points_for(&self, player: Player) -> u16 {
        self.events
            .iter()
            .filter(|event| event.player == player)
            .map(|event| u16::from(event.points))
            .sum()
    }
}
