//! Player hand and crib representations.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DiscardError;

/// Number of cards each player keeps after discarding to the crib.
pub const HAND_SIZE: usize = 4;

/// Number of cards each player discards to the crib.
pub const DISCARD_SIZE: usize = 2;

/// Number of cards in a complete crib.
pub const CRIB_SIZE: usize = 4;

/// A player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand, in the order they were received.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Removes `card` from the hand, returning it if it was present.
    pub fn remove(&mut self, card: Card) -> Option<Card> {
        let index = self.cards.iter().position(|&c| c == card)?;
        Some(self.cards.remove(index))
    }

    /// Removes every card in `cards` from the hand.
    ///
    /// Either all cards are removed or, on error, none are.
    ///
    /// # Errors
    ///
    /// Returns an error if a card is named twice or is not in the hand.
    pub fn take(&mut self, cards: &[Card]) -> Result<Vec<Card>, DiscardError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(DiscardError::DuplicateCard);
            }
            if !self.contains(*card) {
                return Err(DiscardError::CardNotInHand);
            }
        }

        Ok(cards.iter().filter_map(|&card| self.remove(card)).collect())
    }

    /// Returns whether any card in the hand fits under 31 with `count`.
    #[must_use]
    pub fn can_play(&self, count: u8) -> bool {
        self.cards.iter().any(|c| count + c.value() <= 31)
    }
}

/// The crib: a second hand built from both players' discards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Crib {
    /// Discarded cards in the order they were added.
    cards: Vec<Card>,
}

impl Crib {
    /// Creates an empty crib.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds discarded cards to the crib.
    pub fn add(&mut self, cards: &[Card]) {
        self.cards.extend_from_slice(cards);
    }

    /// Returns the cards in the crib.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the crib.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the crib is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns whether both players have discarded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == CRIB_SIZE
    }

    /// Clears the crib for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
