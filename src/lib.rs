//! A cribbage rules engine with optional `no_std` support.
//!
//! The crate provides the pieces of two-player cribbage: a [`Deck`] of
//! [`Card`]s, the hand counter [`score_hand`], the [`Pegging`] state machine
//! for the play, and a [`Game`] type that walks a match through dealing,
//! discarding, the cut, pegging and counting.
//!
//! # Example
//!
//! ```
//! use cribrs::{Card, Rank, Suit, score_hand};
//!
//! let hand = [
//!     Card::new(Rank::Six, Suit::Clubs),
//!     Card::new(Rank::Six, Suit::Hearts),
//!     Card::new(Rank::Six, Suit::Diamonds),
//!     Card::new(Rank::Six, Suit::Spades),
//! ];
//! let score = score_hand(&hand, Card::new(Rank::Nine, Suit::Hearts)).unwrap();
//! assert_eq!(score.total(), 20);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod pegging;
pub mod player;
pub mod result;
pub mod score;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, parse_cards};
pub use deck::Deck;
pub use error::{
    ClearError, CountError, CutError, DealError, DeckError, DiscardError, ParseCardError,
    PlayError, ScoreError,
};
pub use game::{Game, GameState};
pub use hand::{Crib, Hand};
pub use options::GameOptions;
pub use pegging::{Pegging, PeggingEvent, PeggingEventKind, PeggingState, PlayOutcome};
pub use player::Player;
pub use result::{CountedHand, RoundResult};
pub use score::{HandEvent, HandEventKind, HandScore, score_crib, score_hand};
