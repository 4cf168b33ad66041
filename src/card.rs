//! Card types and token parsing.

use core::fmt;
use core::str::FromStr;

use alloc::vec::Vec;

use crate::error::ParseCardError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Hearts, Self::Spades, Self::Diamonds];

    /// Returns the single-letter token for the suit (`C`, `H`, `S`, `D`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Hearts => 'H',
            Self::Spades => 'S',
            Self::Diamonds => 'D',
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of the rank in sequence order (Ace = 1, King = 13).
    ///
    /// Runs are formed from consecutive ordinals.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Counting value of the rank (Ace = 1, face cards = 10).
    ///
    /// Fifteens and the pegging count use this value.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            _ => self.ordinal(),
        }
    }

    /// Returns the rank token (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub rank: Rank,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Counting value of the card.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank.value()
    }

    /// Sequence ordinal of the card.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self.rank.ordinal()
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::InvalidRank)
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ParseCardError::InvalidSuit);
        };

        Self::ALL
            .into_iter()
            .find(|suit| suit.symbol().eq_ignore_ascii_case(&c))
            .ok_or(ParseCardError::InvalidSuit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses a token such as `AS`, `10h` or `qd`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(2..=3).contains(&s.len()) {
            return Err(ParseCardError::Malformed);
        }

        let (rank, suit) = s.split_at(s.len() - 1);
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}

/// Parses whitespace-separated card tokens.
///
/// # Errors
///
/// Returns the error of the first token that is not a valid card.
///
/// # Example
///
/// ```
/// use cribrs::{Card, Rank, Suit, parse_cards};
///
/// let cards = parse_cards("AS 10h").unwrap();
/// assert_eq!(
///     cards,
///     vec![Card::new(Rank::Ace, Suit::Spades), Card::new(Rank::Ten, Suit::Hearts)]
/// );
/// ```
pub fn parse_cards(text: &str) -> Result<Vec<Card>, ParseCardError> {
    text.split_whitespace().map(str::parse::<Card>).collect()
}
