//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for the cards to be dealt.
    Dealing,
    /// Waiting for both players to discard to the crib.
    Discarding,
    /// Waiting for the starter card to be cut.
    Cutting,
    /// Players are laying cards.
    Pegging,
    /// Hands and crib are ready to be counted.
    Counting,
    /// Round has been counted and the cards can be collected.
    RoundOver,
    /// A player reached the target score.
    GameOver,
}
