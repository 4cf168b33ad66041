//! Deck and card integration tests.

use std::collections::HashSet;

use cribrs::{Card, DECK_SIZE, Deck, DeckError, ParseCardError, Rank, Suit, parse_cards};
use proptest::prelude::*;

fn assert_full_universe(deck: &Deck) {
    assert_eq!(deck.undrawn().len() + deck.drawn().len(), DECK_SIZE);

    let cards: HashSet<Card> = deck
        .undrawn()
        .iter()
        .chain(deck.drawn())
        .copied()
        .collect();
    assert_eq!(cards.len(), DECK_SIZE);
}

#[test]
fn new_deck_is_canonical_and_undrawn() {
    let deck = Deck::new(1);

    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.drawn().is_empty());
    assert_eq!(deck.undrawn()[0], Card::new(Rank::Ace, Suit::Clubs));
    assert_eq!(deck.undrawn()[12], Card::new(Rank::King, Suit::Clubs));
    assert_eq!(deck.undrawn()[13], Card::new(Rank::Ace, Suit::Hearts));
    assert_eq!(deck.undrawn()[51], Card::new(Rank::King, Suit::Diamonds));
    assert_full_universe(&deck);
}

#[test]
fn draw_moves_card_to_the_drawn_pile() {
    let mut deck = Deck::new(1);

    let card = deck.draw(3).unwrap();
    assert_eq!(card, Card::new(Rank::Four, Suit::Clubs));
    let top = deck.draw_top().unwrap();
    assert_eq!(top, Card::new(Rank::Ace, Suit::Clubs));

    assert_eq!(deck.drawn(), &[card, top]);
    assert_eq!(deck.len(), DECK_SIZE - 2);
    assert_full_universe(&deck);
}

#[test]
fn draw_out_of_range_fails_without_changes() {
    let mut deck = Deck::new(1);

    assert_eq!(deck.draw(DECK_SIZE).unwrap_err(), DeckError::IndexOutOfRange);
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(deck.drawn().is_empty());

    for _ in 0..DECK_SIZE {
        deck.draw_random().unwrap();
    }
    assert!(deck.is_empty());
    assert_eq!(deck.draw_top().unwrap_err(), DeckError::IndexOutOfRange);
    assert_eq!(deck.draw_random().unwrap_err(), DeckError::IndexOutOfRange);
    assert_full_universe(&deck);
}

#[test]
fn collect_puts_drawn_cards_back_on_top_in_order() {
    let mut deck = Deck::new(1);
    let first = deck.draw(10).unwrap();
    let second = deck.draw(20).unwrap();

    deck.collect();

    assert!(deck.drawn().is_empty());
    assert_eq!(deck.len(), DECK_SIZE);
    assert_eq!(&deck.undrawn()[..2], &[first, second]);
    assert_full_universe(&deck);
}

#[test]
fn shuffle_only_touches_undrawn_cards() {
    let mut deck = Deck::new(9);
    let drawn = deck.draw_top().unwrap();

    deck.shuffle();

    assert_eq!(deck.drawn(), &[drawn]);
    assert!(!deck.undrawn().contains(&drawn));
    assert_full_universe(&deck);
}

#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let mut a = Deck::new(42);
    let mut b = Deck::new(42);
    a.shuffle();
    b.shuffle();
    assert_eq!(a.undrawn(), b.undrawn());
}

#[test]
fn deal_is_round_robin() {
    let mut deck = Deck::new(1);
    let hands = deck.deal_hands(2, 3).unwrap();

    let top: Vec<Card> = Deck::new(1).undrawn()[..6].to_vec();
    assert_eq!(hands[0].cards(), &[top[0], top[2], top[4]]);
    assert_eq!(hands[1].cards(), &[top[1], top[3], top[5]]);
    assert_eq!(deck.len(), DECK_SIZE - 6);
}

#[test]
fn deal_without_enough_cards_draws_nothing() {
    let mut deck = Deck::new(1);
    for _ in 0..45 {
        deck.draw_top().unwrap();
    }

    assert_eq!(
        deck.deal_hands(2, 4).unwrap_err(),
        DeckError::NotEnoughCards
    );
    assert_eq!(deck.len(), 7);
    assert_full_universe(&deck);
}

#[test]
fn card_tokens_parse_case_insensitively() {
    assert_eq!("AS".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
    assert_eq!("10h".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Hearts)));
    assert_eq!("qd".parse::<Card>(), Ok(Card::new(Rank::Queen, Suit::Diamonds)));

    assert_eq!("1H".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("11C".parse::<Card>(), Err(ParseCardError::InvalidRank));
    assert_eq!("KX".parse::<Card>(), Err(ParseCardError::InvalidSuit));
    assert_eq!("K".parse::<Card>(), Err(ParseCardError::Malformed));
    assert_eq!("10HS".parse::<Card>(), Err(ParseCardError::Malformed));

    assert_eq!(parse_cards("7c  JD").unwrap().len(), 2);
    assert_eq!(parse_cards("7c ZZ"), Err(ParseCardError::InvalidRank));
}

#[test]
fn card_display_round_trips_through_parse() {
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = Card::new(rank, suit);
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }
    }
}

#[test]
fn rank_values_and_ordinals() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::King.value(), 10);
    assert_eq!(Rank::Ace.ordinal(), 1);
    assert_eq!(Rank::Jack.ordinal(), 11);
    assert_eq!(Rank::King.ordinal(), 13);
}

#[derive(Debug, Clone)]
enum Op {
    Draw(usize),
    DrawTop,
    DrawRandom,
    Shuffle,
    Collect,
    Deal(usize, usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..60).prop_map(Op::Draw),
        Just(Op::DrawTop),
        Just(Op::DrawRandom),
        Just(Op::Shuffle),
        Just(Op::Collect),
        (0usize..4, 0usize..8).prop_map(|(hands, cards)| Op::Deal(hands, cards)),
    ]
}

proptest! {
    #[test]
    fn prop_deck_always_holds_the_full_universe(
        seed in any::<u64>(),
        ops in proptest::collection::vec(op(), 0..40),
    ) {
        let mut deck = Deck::new(seed);

        for op in ops {
            let before = deck.len();
            match op {
                Op::Draw(i) => {
                    let result = deck.draw(i);
                    prop_assert_eq!(result.is_ok(), i < before);
                }
                Op::DrawTop => {
                    let _ = deck.draw_top();
                }
                Op::DrawRandom => {
                    let _ = deck.draw_random();
                }
                Op::Shuffle => deck.shuffle(),
                Op::Collect => {
                    deck.collect();
                    prop_assert!(deck.drawn().is_empty());
                    prop_assert_eq!(deck.len(), DECK_SIZE);
                }
                Op::Deal(hands, cards) => {
                    if deck.deal_hands(hands, cards).is_err() {
                        prop_assert_eq!(deck.len(), before);
                    }
                }
            }

            prop_assert_eq!(deck.undrawn().len() + deck.drawn().len(), DECK_SIZE);
            let unique: HashSet<Card> =
                deck.undrawn().iter().chain(deck.drawn()).copied().collect();
            prop_assert_eq!(unique.len(), DECK_SIZE);
        }
    }
}
