//! Hand scoring.
//!
//! A hand is counted together with the cut as a group of five cards. The
//! count is the sum of fifteens, flush, pairs, runs and his nobs; see
//! [`score_hand`].

use core::fmt;

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::error::ScoreError;
use crate::hand::{Crib, HAND_SIZE};

/// Number of cards counted together: the hand plus the cut.
const GROUP_SIZE: usize = HAND_SIZE + 1;

/// Shortest sequence that scores as a run.
const MIN_RUN: u32 = 3;

/// Kind of scoring combination found in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandEventKind {
    /// Cards whose values sum to 15.
    Fifteen,
    /// Four hand cards of one suit, plus the cut if it matches.
    Flush,
    /// Two cards of equal rank.
    Pair,
    /// Three or more cards of consecutive rank.
    Run,
    /// A hand Jack of the cut's suit.
    Nobs,
}

impl fmt::Display for HandEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fifteen => "fifteen",
            Self::Flush => "flush",
            Self::Pair => "pair",
            Self::Run => "run",
            Self::Nobs => "his nobs",
        })
    }
}

/// A single scoring combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandEvent {
    /// What was scored.
    pub kind: HandEventKind,
    /// Points awarded.
    pub points: u8,
    /// The cards forming the combination.
    pub cards: Vec<Card>,
}

/// The count of a hand or crib.
///
/// [`HandScore::total`] is the score; the events only explain it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandScore {
    total: u8,
    events: Vec<HandEvent>,
}

impl HandScore {
    /// Returns the total points.
    #[must_use]
    pub const fn total(&self) -> u8 {
        self.total
    }

    /// Returns the scoring combinations in the order they were found.
    #[must_use]
    pub fn events(&self) -> &[HandEvent] {
        &self.events
    }

    /// Returns the points scored by combinations of one kind.
    #[must_use]
    pub fn points_for(&self, kind: HandEventKind) -> u8 {
        self.events
            .iter()
            .filter(|event| event.kind == kind)
            .map(|event| event.points)
            .sum()
    }

    fn push(&mut self, kind: HandEventKind, points: u8, cards: Vec<Card>) {
        tracing::trace!(%kind, points, "hand combination");
        self.total += points;
        self.events.push(HandEvent {
            kind,
            points,
            cards,
        });
    }
}

/// Scores a four-card hand against the cut.
///
/// The hand and cut form a group of five cards, scored as:
///
/// - 2 for every combination of two or more cards summing to 15,
/// - 4 if all hand cards share a suit, 5 if the cut matches too,
/// - 2 for every pair of equal rank,
/// - the length of every longest run, counted again for each way the run
///   can be formed from paired ranks,
/// - 1 for a hand Jack of the cut's suit.
///
/// The result does not depend on the order of `hand`.
///
/// # Errors
///
/// Returns [`ScoreError::InvalidHandSize`] if `hand` does not hold exactly
/// four cards.
///
/// # Example
///
/// ```
/// use cribrs::{Card, Rank, Suit, score_hand};
///
/// let hand = [
///     Card::new(Rank::Five, Suit::Clubs),
///     Card::new(Rank::Five, Suit::Hearts),
///     Card::new(Rank::Five, Suit::Diamonds),
///     Card::new(Rank::Jack, Suit::Spades),
/// ];
/// let cut = Card::new(Rank::Five, Suit::Spades);
///
/// assert_eq!(score_hand(&hand, cut).unwrap().total(), 29);
/// ```
pub fn score_hand(hand: &[Card], cut: Card) -> Result<HandScore, ScoreError> {
    if hand.len() != HAND_SIZE {
        return Err(ScoreError::InvalidHandSize(hand.len()));
    }

    let mut group = [cut; GROUP_SIZE];
    group[..HAND_SIZE].copy_from_slice(hand);

    let mut score = HandScore::default();
    score_fifteens(&group, &mut score);
    score_flush(hand, cut, &mut score);
    score_pairs(&group, &mut score);
    score_runs(&group, &mut score);
    score_nobs(hand, cut, &mut score);

    tracing::debug!(
        total = score.total,
        combinations = score.events.len(),
        "hand scored"
    );
    Ok(score)
}

/// Scores the crib against the cut, exactly like a hand.
///
/// # Errors
///
/// Returns [`ScoreError::InvalidHandSize`] if the crib is not complete.
pub fn score_crib(crib: &Crib, cut: Card) -> Result<HandScore, ScoreError> {
    score_hand(crib.cards(), cut)
}

/// Returns the cards of `group` selected by the bits of `mask`.
fn subset(group: &[Card], mask: u32) -> Vec<Card> {
    group
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, &card)| card)
        .collect()
}

/// Bit masks of every subset of `len` items holding exactly `size` items.
fn masks_of_size(len: usize, size: u32) -> impl Iterator<Item = u32> {
    (0..1u32 << len).filter(move |mask| mask.count_ones() == size)
}

fn score_fifteens(group: &[Card], score: &mut HandScore) {
    for size in 2..=GROUP_SIZE as u32 {
        for mask in masks_of_size(group.len(), size) {
            let cards = subset(group, mask);
            let sum: u8 = cards.iter().map(|c| c.value()).sum();
            if sum == 15 {
                score.push(HandEventKind::Fifteen, 2, cards);
            }
        }
    }
}

fn score_flush(hand: &[Card], cut: Card, score: &mut HandScore) {
    let Some(first) = hand.first() else {
        return;
    };
    if hand.iter().any(|c| c.suit != first.suit) {
        return;
    }

    let mut cards = hand.to_vec();
    if cut.suit == first.suit {
        cards.push(cut);
    }
    score.push(HandEventKind::Flush, cards.len() as u8, cards);
}

fn score_pairs(group: &[Card], score: &mut HandScore) {
    for (i, a) in group.iter().enumerate() {
        for b in &group[i + 1..] {
            if a.rank == b.rank {
                score.push(HandEventKind::Pair, 2, alloc::vec![*a, *b]);
            }
        }
    }
}

/// A candidate run: its distinct ordinals as a bit set, and its cards.
struct RunCandidate {
    ranks: u16,
    cards: Vec<Card>,
}

impl RunCandidate {
    const fn len(&self) -> u32 {
        self.ranks.count_ones()
    }
}

fn score_runs(group: &[Card], score: &mut HandScore) {
    let mut sorted = group.to_vec();
    sorted.sort_by_key(|c| c.ordinal());

    // A subset of the sorted group is a run when its ordinals step up by
    // exactly one. Subsets holding two cards of one rank never qualify;
    // paired ranks instead yield several candidates with the same ranks.
    let mut candidates = Vec::new();
    for size in MIN_RUN..=GROUP_SIZE as u32 {
        for mask in masks_of_size(sorted.len(), size) {
            let cards = subset(&sorted, mask);
            let consecutive = cards
                .windows(2)
                .all(|pair| pair[1].ordinal() == pair[0].ordinal() + 1);
            if consecutive {
                let ranks = cards.iter().fold(0u16, |bits, c| bits | (1 << c.ordinal()));
                candidates.push(RunCandidate { ranks, cards });
            }
        }
    }

    let Some(longest) = candidates.iter().map(RunCandidate::len).max() else {
        return;
    };
    let longest_ranks: Vec<u16> = candidates
        .iter()
        .filter(|run| run.len() == longest)
        .map(|run| run.ranks)
        .collect();

    for run in candidates {
        let contained = run.len() < longest
            && longest_ranks
                .iter()
                .any(|&ranks| run.ranks & ranks == run.ranks);
        if !contained {
            score.push(HandEventKind::Run, run.len() as u8, run.cards);
        }
    }
}

fn score_nobs(hand: &[Card], cut: Card, score: &mut HandScore) {
    if let Some(&jack) = hand
        .iter()
        .find(|c| c.rank == Rank::Jack && c.suit == cut.suit)
    {
        score.push(HandEventKind::Nobs, 1, alloc::vec![jack]);
    }
}
