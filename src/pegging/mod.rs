//! The play phase: laying cards one at a time toward 31.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayError;
use crate::hand::Hand;
use crate::player::Player;

pub mod state;

pub use state::{PeggingEvent, PeggingEventKind, PeggingState, PlayOutcome};

/// Highest count a card may bring the play to.
pub const MAX_COUNT: u8 = 31;

/// Pegging state machine for one round.
///
/// Players alternate laying cards from their hands. A card may not take the
/// count past 31. Points are awarded for pairs, fifteens, thirty-ones, and
/// the last card laid before the count resets. When a player cannot lay a
/// card the turn passes back (a "go"); when neither player can, the count
/// resets and the other player leads.
///
/// # Example
///
/// ```
/// use cribrs::{Card, Hand, Pegging, PeggingState, Player, Rank, Suit};
///
/// let one = Hand::new(vec![Card::new(Rank::Seven, Suit::Clubs)]);
/// let two = Hand::new(vec![Card::new(Rank::Seven, Suit::Hearts)]);
/// let mut pegging = Pegging::new([one, two], Player::One);
///
/// pegging.play(Player::One, Card::new(Rank::Seven, Suit::Clubs)).unwrap();
/// let outcome = pegging.play(Player::Two, Card::new(Rank::Seven, Suit::Hearts)).unwrap();
///
/// // Pair for two, then one more for the last card.
/// assert_eq!(outcome.points_for(Player::Two), 3);
/// assert_eq!(pegging.state(), PeggingState::RoundOver);
/// ```
#[derive(Debug, Clone)]
pub struct Pegging {
    /// Cards each player has not yet laid.
    hands: [Hand; 2],
    /// Running count since the last reset.
    count: u8,
    /// Cards laid since the last reset.
    sequence: Vec<Card>,
    /// Every card laid this round, in order.
    played: Vec<(Player, Card)>,
    /// The player who laid the most recent card.
    last_player: Option<Player>,
    /// Whether a go has been announced since the last reset.
    go_announced: bool,
    /// Current state.
    state: PeggingState,
    /// Points pegged this round, by seat.
    points: [u16; 2],
    /// Whether pair royals and runs score.
    extended: bool,
}

impl Pegging {
    /// Starts pegging with the given hands, indexed by seat.
    ///
    /// `leader` lays the first card; if their hand is empty the other
    /// player leads.
    #[must_use]
    pub fn new(hands: [Hand; 2], leader: Player) -> Self {
        let mut pegging = Self {
            hands,
            count: 0,
            sequence: Vec::new(),
            played: Vec::new(),
            last_player: None,
            go_announced: false,
            state: PeggingState::RoundOver,
            points: [0; 2],
            extended: false,
        };

        pegging.state = if !pegging.hand(leader).is_empty() {
            PeggingState::AwaitingPlay(leader)
        } else if !pegging.hand(leader.other()).is_empty() {
            PeggingState::AwaitingPlay(leader.other())
        } else {
            PeggingState::RoundOver
        };
        pegging
    }

    /// Enables scoring of pair royals (6), double pair royals (12) and runs
    /// laid in any order.
    #[must_use]
    pub fn with_extended_scoring(mut self, enabled: bool) -> Self {
        self.extended = enabled;
        self
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> PeggingState {
        self.state
    }

    /// Returns whether pegging has finished.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.state, PeggingState::RoundOver)
    }

    /// Returns the player expected to lay the next card.
    #[must_use]
    pub const fn active_player(&self) -> Option<Player> {
        match self.state {
            PeggingState::AwaitingPlay(player) => Some(player),
            PeggingState::RoundOver => None,
        }
    }

    /// Returns the player who laid the most recent card.
    #[must_use]
    pub const fn last_player(&self) -> Option<Player> {
        self.last_player
    }

    /// Returns the running count.
    #[must_use]
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Returns the cards laid since the count last reset.
    #[must_use]
    pub fn sequence(&self) -> &[Card] {
        &self.sequence
    }

    /// Returns every card laid this round, in order.
    #[must_use]
    pub fn played(&self) -> &[(Player, Card)] {
        &self.played
    }

    /// Returns the cards `player` has not yet laid.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Returns the points `player` has pegged this round.
    #[must_use]
    pub const fn points(&self, player: Player) -> u16 {
        self.points[player.index()]
    }

    /// Returns whether `player` holds a card that fits under 31.
    #[must_use]
    pub fn can_play(&self, player: Player) -> bool {
        self.hand(player).can_play(self.count)
    }

    /// Returns the cards `player` could lay at the current count.
    #[must_use]
    pub fn playable_cards(&self, player: Player) -> Vec<Card> {
        self.hand(player)
            .cards()
            .iter()
            .copied()
            .filter(|card| self.count + card.value() <= MAX_COUNT)
            .collect()
    }

    /// Lays `card` from `player`'s hand.
    ///
    /// Scores the play, then passes the turn: to the other player if they
    /// can lay a card, otherwise back to `player` (the other player goes).
    /// When neither can lay a card, the last card is scored, the count
    /// resets, and the other player leads.
    ///
    /// # Errors
    ///
    /// Returns an error if pegging is over, it is not `player`'s turn, the
    /// card is not in their hand, or the card would take the count past 31.
    /// The state is unchanged on error.
    pub fn play(&mut self, player: Player, card: Card) -> Result<PlayOutcome, PlayError> {
        let PeggingState::AwaitingPlay(active) = self.state else {
            return Err(PlayError::RoundOver);
        };
        if player != active {
            return Err(PlayError::NotYourTurn);
        }
        if !self.hand(player).contains(card) {
            return Err(PlayError::CardNotInHand);
        }
        let count = self.count + card.value();
        if count > MAX_COUNT {
            return Err(PlayError::ExceedsThirtyOne);
        }

        self.hands[player.index()].remove(card);
        self.count = count;
        self.sequence.push(card);
        self.played.push((player, card));
        self.last_player = Some(player);
        tracing::debug!(?player, %card, count, "card laid");

        let mut events = Vec::new();
        self.score_pair(player, &mut events);
        if self.extended {
            self.score_run(player, &mut events);
        }
        if count == 15 {
            events.push(PeggingEvent {
                player,
                kind: PeggingEventKind::Fifteen,
                points: 2,
            });
        }
        if count == MAX_COUNT {
            events.push(PeggingEvent {
                player,
                kind: PeggingEventKind::ThirtyOne,
                points: 2,
            });
            self.reset();
        }

        self.pass_turn(player, &mut events);

        for event in &events {
            tracing::debug!(
                player = ?event.player,
                kind = ?event.kind,
                points = event.points,
                "pegging event"
            );
            self.points[event.player.index()] += u16::from(event.points);
        }
        if self.is_over() {
            tracing::debug!(
                one = self.points[0],
                two = self.points[1],
                "pegging finished"
            );
        }

        Ok(PlayOutcome {
            card,
            count,
            events,
            state: self.state,
        })
    }

    fn score_pair(&self, player: Player, events: &mut Vec<PeggingEvent>) {
        let Some((card, earlier)) = self.sequence.split_last() else {
            return;
        };
        let matching = earlier
            .iter()
            .rev()
            .take_while(|c| c.rank == card.rank)
            .count();

        let (cards, points) = match matching {
            0 => return,
            1 => (2, 2),
            _ if !self.extended => (2, 2),
            2 => (3, 6),
            _ => (4, 12),
        };
        events.push(PeggingEvent {
            player,
            kind: PeggingEventKind::Pair(cards),
            points,
        });
    }

    fn score_run(&self, player: Player, events: &mut Vec<PeggingEvent>) {
        for len in (3..=self.sequence.len()).rev() {
            let tail = &self.sequence[self.sequence.len() - len..];
            let ranks = tail.iter().fold(0u16, |bits, c| bits | (1 << c.ordinal()));
            let low = ranks.trailing_zeros();
            let high = 15 - ranks.leading_zeros();

            if ranks.count_ones() as usize == len && (high - low + 1) as usize == len {
                events.push(PeggingEvent {
                    player,
                    kind: PeggingEventKind::Run(len as u8),
                    points: len as u8,
                });
                return;
            }
        }
    }

    /// Decides who lays the next card after `last` has laid one.
    fn pass_turn(&mut self, last: Player, events: &mut Vec<PeggingEvent>) {
        loop {
            let next = last.other();
            if self.can_play(next) {
                self.state = PeggingState::AwaitingPlay(next);
                return;
            }

            if self.can_play(last) {
                if !self.go_announced && !self.hand(next).is_empty() {
                    self.go_announced = true;
                    events.push(PeggingEvent {
                        player: next,
                        kind: PeggingEventKind::Go,
                        points: 0,
                    });
                }
                self.state = PeggingState::AwaitingPlay(last);
                return;
            }

            if !self.sequence.is_empty() {
                events.push(PeggingEvent {
                    player: last,
                    kind: PeggingEventKind::LastCard,
                    points: 1,
                });
            }
            self.reset();

            if self.hands.iter().all(Hand::is_empty) {
                self.state = PeggingState::RoundOver;
                return;
            }
        }
    }

    fn reset(&mut self) {
        tracing::trace!(count = self.count, "count reset");
        self.count = 0;
        self.sequence.clear();
        self.go_announced = false;
    }
}
