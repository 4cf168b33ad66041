//! The 52-card deck.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::hand::Hand;

/// A standard deck split into undrawn and drawn piles.
///
/// Every card of the 52-card universe is always in exactly one of the two
/// piles. Drawn cards are laid face up, so the most recently drawn card is
/// the last element of [`Deck::drawn`].
///
/// # Example
///
/// ```
/// use cribrs::Deck;
///
/// let mut deck = Deck::new(7);
/// deck.shuffle();
/// let hands = deck.deal_hands(2, 6).unwrap();
/// assert_eq!(hands[0].len(), 6);
/// assert_eq!(deck.len(), 40);
///
/// deck.collect();
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards still in the deck, top first.
    undrawn: Vec<Card>,
    /// Cards drawn since the last collect, in draw order.
    drawn: Vec<Card>,
    /// Random number generator for shuffles and random draws.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates an unshuffled deck in canonical order.
    ///
    /// Cards are ordered suit by suit (clubs, hearts, spades, diamonds), each
    /// suit from Ace to King. The seed drives [`Deck::shuffle`] and
    /// [`Deck::draw_random`].
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut undrawn = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                undrawn.push(Card::new(rank, suit));
            }
        }

        Self {
            undrawn,
            drawn: Vec::with_capacity(DECK_SIZE),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the undrawn cards, top first.
    #[must_use]
    pub fn undrawn(&self) -> &[Card] {
        &self.undrawn
    }

    /// Returns the drawn cards in the order they were drawn.
    #[must_use]
    pub fn drawn(&self) -> &[Card] {
        &self.drawn
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.undrawn.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undrawn.is_empty()
    }

    /// Draws the undrawn card at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if `index` is not a valid
    /// position, which includes every position of an empty deck.
    pub fn draw(&mut self, index: usize) -> Result<Card, DeckError> {
        if index >= self.undrawn.len() {
            return Err(DeckError::IndexOutOfRange);
        }

        let card = self.undrawn.remove(index);
        self.drawn.push(card);
        Ok(card)
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if the deck is empty.
    pub fn draw_top(&mut self) -> Result<Card, DeckError> {
        self.draw(0)
    }

    /// Draws a card from a uniformly random position.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if the deck is empty.
    pub fn draw_random(&mut self) -> Result<Card, DeckError> {
        if self.undrawn.is_empty() {
            return Err(DeckError::IndexOutOfRange);
        }

        let index = self.rng.random_range(0..self.undrawn.len());
        self.draw(index)
    }

    /// Shuffles the undrawn cards. Drawn cards are left in place.
    pub fn shuffle(&mut self) {
        self.undrawn.shuffle(&mut self.rng);
        tracing::trace!(cards = self.undrawn.len(), "deck shuffled");
    }

    /// Puts every drawn card back on top of the deck, keeping their order.
    pub fn collect(&mut self) {
        let returned = self.drawn.len();
        self.drawn.append(&mut self.undrawn);
        core::mem::swap(&mut self.drawn, &mut self.undrawn);
        tracing::trace!(returned, "drawn cards collected");
    }

    /// Deals `n_cards` to each of `n_hands` hands, one card at a time.
    ///
    /// The first hand receives its first card before the second hand
    /// receives its first card, and so on for every round of the deal.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if fewer than
    /// `n_hands * n_cards` cards are undrawn. Nothing is drawn in that case.
    pub fn deal_hands(&mut self, n_hands: usize, n_cards: usize) -> Result<Vec<Hand>, DeckError> {
        let needed = n_hands
            .checked_mul(n_cards)
            .ok_or(DeckError::NotEnoughCards)?;
        if self.undrawn.len() < needed {
            return Err(DeckError::NotEnoughCards);
        }

        let mut hands: Vec<Vec<Card>> = (0..n_hands)
            .map(|_| Vec::with_capacity(n_cards))
            .collect();

        for _ in 0..n_cards {
            for hand in &mut hands {
                hand.push(self.draw_top()?);
            }
        }

        tracing::debug!(n_hands, n_cards, "hands dealt");
        Ok(hands.into_iter().map(Hand::new).collect())
    }
}
