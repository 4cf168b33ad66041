//! Match engine and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ClearError;
use crate::hand::{Crib, Hand};
use crate::options::GameOptions;
use crate::pegging::Pegging;
use crate::player::Player;

mod actions;
mod count;
mod deal;
pub mod state;

pub use state::GameState;

/// A two-player cribbage match.
///
/// The game owns the deck, both hands, the crib, the cut and the match
/// scores, and walks each round through dealing, discarding, the cut,
/// pegging and counting. Use [`GameOptions`] to configure the target score
/// and optional scoring rules.
///
/// # Example
///
/// ```
/// use cribrs::{Game, GameOptions, GameState, Player};
///
/// let mut game = Game::new(GameOptions::default(), 42);
/// game.deal().unwrap();
///
/// for player in Player::BOTH {
///     let discard = game.hand(player).cards()[..2].to_vec();
///     game.discard(player, &discard).unwrap();
/// }
/// game.cut().unwrap();
/// assert_eq!(game.state(), GameState::Pegging);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// The deck.
    deck: Deck,
    /// Current game state.
    state: GameState,
    /// Match scores, by seat.
    scores: [u16; 2],
    /// The player who owns the crib this round.
    dealer: Player,
    /// Hands as dealt, then as kept after discarding; counted at the end.
    hands: [Hand; 2],
    /// Whether each player has discarded this round.
    discarded: [bool; 2],
    /// The crib.
    crib: Crib,
    /// The starter card.
    cut: Option<Card>,
    /// The play phase, once the cut is made.
    pegging: Option<Pegging>,
    /// The player who reached the target score.
    winner: Option<Player>,
    /// Number of rounds started.
    round: u32,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The seed picks the first dealer and drives every shuffle and cut,
    /// so equal seeds replay equal matches.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dealer = if rng.random_bool(0.5) {
            Player::One
        } else {
            Player::Two
        };
        let mut deck = Deck::new(rng.random());
        deck.shuffle();

        Self {
            options,
            deck,
            state: GameState::Dealing,
            scores: [0; 2],
            dealer,
            hands: [Hand::default(), Hand::default()],
            discarded: [false; 2],
            crib: Crib::new(),
            cut: None,
            pegging: None,
            winner: None,
            round: 0,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the match scores, by seat.
    #[must_use]
    pub const fn scores(&self) -> [u16; 2] {
        self.scores
    }

    /// Returns the match score of `player`.
    #[must_use]
    pub const fn score(&self, player: Player) -> u16 {
        self.scores[player.index()]
    }

    /// Returns the player who owns the crib this round.
    #[must_use]
    pub const fn dealer(&self) -> Player {
        self.dealer
    }

    /// Returns the non-dealer, who leads pegging and counts first.
    #[must_use]
    pub const fn pone(&self) -> Player {
        self.dealer.other()
    }

    /// Returns the hand `player` holds for counting.
    ///
    /// Before discarding this is the full deal; afterwards it is the four
    /// kept cards. Pegging works on its own copy, so this hand is not
    /// emptied by play.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Returns the crib.
    #[must_use]
    pub const fn crib(&self) -> &Crib {
        &self.crib
    }

    /// Returns the starter card, once cut.
    #[must_use]
    pub const fn cut_card(&self) -> Option<Card> {
        self.cut
    }

    /// Returns the play phase, once started.
    #[must_use]
    pub const fn pegging(&self) -> Option<&Pegging> {
        self.pegging.as_ref()
    }

    /// Returns the winner, once the match is over.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of rounds dealt so far.
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// Adds points to `player`'s match score.
    ///
    /// Returns `false` without scoring once the match has been won. Reaching
    /// the target score ends the match.
    fn credit(&mut self, player: Player, points: u16) -> bool {
        if self.winner.is_some() {
            return false;
        }

        let score = &mut self.scores[player.index()];
        *score = score.saturating_add(points);

        if *score >= self.options.target_score {
            tracing::info!(?player, score = *score, "match won");
            self.winner = Some(player);
            self.state = GameState::GameOver;
        }
        true
    }

    /// Collects the cards and prepares the next round.
    ///
    /// The crib passes to the other player and the deck is reshuffled. After
    /// the match is over the cards are still collected, but no further round
    /// starts.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been counted and the match is
    /// not over.
    pub fn clear_round(&mut self) -> Result<(), ClearError> {
        if self.state != GameState::RoundOver && self.state != GameState::GameOver {
            return Err(ClearError::InvalidState);
        }

        self.deck.collect();
        self.deck.shuffle();
        self.hands = [Hand::default(), Hand::default()];
        self.discarded = [false; 2];
        self.crib.clear();
        self.cut = None;
        self.pegging = None;

        if self.state == GameState::RoundOver {
            self.dealer = self.dealer.other();
            self.state = GameState::Dealing;
        }

        Ok(())
    }
}
