//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when parsing card tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Token is not a rank followed by a suit letter.
    #[error("card token must be a rank followed by a suit")]
    Malformed,
    /// Rank part is not one of `A`, `2`-`10`, `J`, `Q`, `K`.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit part is not one of `C`, `H`, `S`, `D`.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur when drawing or dealing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Draw position is past the end of the undrawn cards.
    #[error("draw position out of range")]
    IndexOutOfRange,
    /// Not enough undrawn cards for the deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during hand scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Hand does not hold exactly four cards.
    #[error("hand must hold exactly 4 cards, got {0}")]
    InvalidHandSize(usize),
}

/// Errors that can occur when laying a card during pegging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing")]
    InvalidState,
    /// Pegging has already finished.
    #[error("pegging is over")]
    RoundOver,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
    /// Card would take the count past 31.
    #[error("card would take the count past 31")]
    ExceedsThirtyOne,
}

/// Errors that can occur when discarding to the crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiscardError {
    /// Invalid game state for discarding.
    #[error("invalid game state for discarding")]
    InvalidState,
    /// Player has already discarded this round.
    #[error("player already discarded")]
    AlreadyDiscarded,
    /// Wrong number of cards discarded.
    #[error("wrong number of cards discarded")]
    WrongCount,
    /// The same card was named twice.
    #[error("duplicate card in discard")]
    DuplicateCard,
    /// Card is not in the player's hand.
    #[error("card is not in the player's hand")]
    CardNotInHand,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// The deck could not supply the cards.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when cutting the starter card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CutError {
    /// Invalid game state for cutting.
    #[error("invalid game state for cutting")]
    InvalidState,
    /// The deck could not supply the cut.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur when counting hands and crib.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    /// Invalid game state for counting.
    #[error("invalid game state for counting")]
    InvalidState,
    /// A hand could not be scored.
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// Errors that can occur when clearing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClearError {
    /// Invalid game state for clearing.
    #[error("invalid game state for clearing the round")]
    InvalidState,
}
