use crate::card::{Card, Rank};
use crate::error::{CutError, DealError, DeckError, DiscardError};
use crate::hand::{DISCARD_SIZE, HAND_SIZE, Hand};
use crate::pegging::Pegging;
use crate::player::Player;

use super::{Game, GameState};

/// Cards dealt to each player before discarding.
const DEAL_SIZE: usize = HAND_SIZE + DISCARD_SIZE;

/// Points the dealer scores when the cut is a Jack.
const HIS_HEELS: u16 = 2;

impl Game {
    /// Deals six cards to each player, the non-dealer first.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a deal or the deck
    /// cannot supply the cards.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        let hands: [Hand; 2] = self
            .deck
            .deal_hands(2, DEAL_SIZE)?
            .try_into()
            .map_err(|_| DeckError::NotEnoughCards)?;
        let [first, second] = hands;

        let pone = self.pone();
        self.hands[pone.index()] = first;
        self.hands[self.dealer.index()] = second;
        self.round += 1;
        self.state = GameState::Discarding;

        tracing::debug!(round = self.round, dealer = ?self.dealer, "round dealt");
        Ok(())
    }

    /// Moves two cards from `player`'s hand into the crib.
    ///
    /// Once both players have discarded the game waits for the cut.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the discarding state, the
    /// player has already discarded, `cards` does not name exactly two
    /// distinct cards, or a card is not in the player's hand.
    pub fn discard(&mut self, player: Player, cards: &[Card]) -> Result<(), DiscardError> {
        if self.state != GameState::Discarding {
            return Err(DiscardError::InvalidState);
        }
        if self.discarded[player.index()] {
            return Err(DiscardError::AlreadyDiscarded);
        }
        if cards.len() != DISCARD_SIZE {
            return Err(DiscardError::WrongCount);
        }

        let discards = self.hands[player.index()].take(cards)?;
        self.crib.add(&discards);
        self.discarded[player.index()] = true;

        if self.crib.is_complete() {
            self.state = GameState::Cutting;
        }

        Ok(())
    }

    /// Cuts the starter card and starts pegging.
    ///
    /// With [`GameOptions::his_heels`](crate::GameOptions::his_heels) set, a
    /// Jack scores 2 for the dealer, which may end the match. Otherwise the
    /// non-dealer leads the play.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for the cut or the deck
    /// is empty.
    pub fn cut(&mut self) -> Result<Card, CutError> {
        if self.state != GameState::Cutting {
            return Err(CutError::InvalidState);
        }

        let card = self.deck.draw_random()?;
        self.cut = Some(card);
        tracing::debug!(%card, "starter cut");

        if self.options.his_heels && card.rank == Rank::Jack {
            self.credit(self.dealer, HIS_HEELS);
        }
        if self.state == GameState::GameOver {
            return Ok(card);
        }

        self.pegging = Some(
            Pegging::new(self.hands.clone(), self.pone())
                .with_extended_scoring(self.options.extended_pegging),
        );
        self.state = GameState::Pegging;

        Ok(card)
    }
}
