//! Pegging state machine integration tests.

use cribrs::{
    Card, Hand, Pegging, PeggingEvent, PeggingEventKind, PeggingState, PlayError, Player,
    parse_cards,
};

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

fn pegging(one: &str, two: &str) -> Pegging {
    let hands = [
        Hand::new(parse_cards(one).unwrap()),
        Hand::new(parse_cards(two).unwrap()),
    ];
    Pegging::new(hands, Player::One)
}

fn kinds(events: &[PeggingEvent]) -> Vec<(Player, PeggingEventKind, u8)> {
    events.iter().map(|e| (e.player, e.kind, e.points)).collect()
}

#[test]
fn fifteen_then_thirty_one_resets_the_count() {
    let mut game = pegging("8C 2D KS 3H", "5H 6C 4D 9S");

    game.play(Player::One, card("8C")).unwrap();
    let outcome = game.play(Player::Two, card("5H")).unwrap();
    assert_eq!(outcome.count, 13);
    assert!(outcome.events.is_empty());

    let outcome = game.play(Player::One, card("2D")).unwrap();
    assert_eq!(outcome.count, 15);
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::One, PeggingEventKind::Fifteen, 2)]
    );

    game.play(Player::Two, card("6C")).unwrap();
    let outcome = game.play(Player::One, card("KS")).unwrap();
    assert_eq!(outcome.count, 31);
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::One, PeggingEventKind::ThirtyOne, 2)]
    );

    assert_eq!(game.count(), 0);
    assert!(game.sequence().is_empty());
    assert_eq!(game.state(), PeggingState::AwaitingPlay(Player::Two));
    assert_eq!(game.points(Player::One), 4);
    assert_eq!(game.points(Player::Two), 0);
}

#[test]
fn matching_rank_scores_a_pair_for_the_second_player() {
    let mut game = pegging("7C AS", "7H AD");

    game.play(Player::One, card("7C")).unwrap();
    let outcome = game.play(Player::Two, card("7H")).unwrap();

    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::Two, PeggingEventKind::Pair(2), 2)]
    );
    assert_eq!(outcome.state, PeggingState::AwaitingPlay(Player::One));
}

#[test]
fn base_rules_score_three_of_a_kind_as_a_pair() {
    let mut game = pegging("7C 7D", "7H AD");

    game.play(Player::One, card("7C")).unwrap();
    game.play(Player::Two, card("7H")).unwrap();
    let outcome = game.play(Player::One, card("7D")).unwrap();

    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::One, PeggingEventKind::Pair(2), 2)]
    );
}

#[test]
fn go_passes_the_turn_then_last_card_scores() {
    let mut game = pegging("KC 10D 9S 10S", "5H 3C 2D 9C");

    game.play(Player::One, card("KC")).unwrap();
    let outcome = game.play(Player::Two, card("5H")).unwrap();
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::Two, PeggingEventKind::Fifteen, 2)]
    );
    game.play(Player::One, card("10D")).unwrap();

    // At 28 player one's 9 and 10 are both too big; two still has the 2.
    let outcome = game.play(Player::Two, card("3C")).unwrap();
    assert_eq!(outcome.count, 28);
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::One, PeggingEventKind::Go, 0)]
    );
    assert_eq!(outcome.state, PeggingState::AwaitingPlay(Player::Two));
    assert!(!game.can_play(Player::One));

    // Nobody can follow 30: last card, reset, and player one leads.
    let outcome = game.play(Player::Two, card("2D")).unwrap();
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::Two, PeggingEventKind::LastCard, 1)]
    );
    assert_eq!(outcome.state, PeggingState::AwaitingPlay(Player::One));
    assert_eq!(game.count(), 0);

    game.play(Player::One, card("9S")).unwrap();
    let outcome = game.play(Player::Two, card("9C")).unwrap();
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::Two, PeggingEventKind::Pair(2), 2)]
    );

    let outcome = game.play(Player::One, card("10S")).unwrap();
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::One, PeggingEventKind::LastCard, 1)]
    );
    assert_eq!(outcome.state, PeggingState::RoundOver);
    assert!(game.is_over());

    assert_eq!(game.points(Player::One), 1);
    assert_eq!(game.points(Player::Two), 5);
    assert_eq!(game.played().len(), 8);
}

#[test]
fn empty_hand_skips_turn_without_a_go() {
    let mut game = pegging("AC", "2C 3C");

    let outcome = game.play(Player::One, card("AC")).unwrap();
    assert_eq!(outcome.state, PeggingState::AwaitingPlay(Player::Two));

    let outcome = game.play(Player::Two, card("2C")).unwrap();
    assert!(outcome.events.is_empty());
    assert_eq!(outcome.state, PeggingState::AwaitingPlay(Player::Two));

    let outcome = game.play(Player::Two, card("3C")).unwrap();
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::Two, PeggingEventKind::LastCard, 1)]
    );
    assert!(game.is_over());
}

#[test]
fn thirty_one_on_the_final_card_is_not_also_a_last_card() {
    let mut game = pegging("KC AC", "KH QD");

    game.play(Player::One, card("KC")).unwrap();
    game.play(Player::Two, card("KH")).unwrap();
    game.play(Player::One, card("AC")).unwrap();
    let outcome = game.play(Player::Two, card("QD")).unwrap();

    assert_eq!(outcome.count, 31);
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::Two, PeggingEventKind::ThirtyOne, 2)]
    );
    assert!(game.is_over());
}

#[test]
fn illegal_plays_leave_state_unchanged() {
    let mut game = pegging("KC QC 3D 4D", "KH AC 9S");

    assert_eq!(
        game.play(Player::Two, card("KH")).unwrap_err(),
        PlayError::NotYourTurn
    );
    assert_eq!(
        game.play(Player::One, card("KH")).unwrap_err(),
        PlayError::CardNotInHand
    );

    game.play(Player::One, card("KC")).unwrap();
    game.play(Player::Two, card("KH")).unwrap();
    game.play(Player::One, card("3D")).unwrap();
    game.play(Player::Two, card("AC")).unwrap();
    assert_eq!(game.count(), 24);
    assert_eq!(game.state(), PeggingState::AwaitingPlay(Player::One));

    let before = game.clone();
    assert_eq!(
        game.play(Player::One, card("QC")).unwrap_err(),
        PlayError::ExceedsThirtyOne
    );
    assert_eq!(game.count(), before.count());
    assert_eq!(game.hand(Player::One), before.hand(Player::One));
    assert_eq!(game.state(), before.state());

    // The four still fits.
    let outcome = game.play(Player::One, card("4D")).unwrap();
    assert_eq!(outcome.count, 28);
}

#[test]
fn playable_cards_respect_the_count() {
    let mut game = pegging("KC 5S AD 9H", "KH QH");

    game.play(Player::One, card("KC")).unwrap();
    game.play(Player::Two, card("KH")).unwrap();
    let outcome = game.play(Player::One, card("5S")).unwrap();
    assert_eq!(outcome.count, 25);
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::Two, PeggingEventKind::Go, 0)]
    );

    assert_eq!(game.playable_cards(Player::One), vec![card("AD")]);
    assert!(game.playable_cards(Player::Two).is_empty());
}

#[test]
fn plays_after_round_over_are_rejected() {
    let mut game = pegging("AC", "2C");

    game.play(Player::One, card("AC")).unwrap();
    game.play(Player::Two, card("2C")).unwrap();
    assert!(game.is_over());
    assert_eq!(game.active_player(), None);

    assert_eq!(
        game.play(Player::One, card("AC")).unwrap_err(),
        PlayError::RoundOver
    );
}

#[test]
fn empty_leader_hand_passes_the_lead() {
    let game = Pegging::new(
        [Hand::default(), Hand::new(parse_cards("AC").unwrap())],
        Player::One,
    );
    assert_eq!(game.state(), PeggingState::AwaitingPlay(Player::Two));

    let game = Pegging::new([Hand::default(), Hand::default()], Player::One);
    assert_eq!(game.state(), PeggingState::RoundOver);
}

#[test]
fn extended_scoring_counts_pair_royals() {
    let mut game = pegging("7C 7D", "7H 7S").with_extended_scoring(true);

    game.play(Player::One, card("7C")).unwrap();
    let outcome = game.play(Player::Two, card("7H")).unwrap();
    assert_eq!(outcome.points_for(Player::Two), 2);

    let outcome = game.play(Player::One, card("7D")).unwrap();
    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::One, PeggingEventKind::Pair(3), 6)]
    );

    let outcome = game.play(Player::Two, card("7S")).unwrap();
    assert_eq!(
        kinds(&outcome.events),
        vec![
            (Player::Two, PeggingEventKind::Pair(4), 12),
            (Player::Two, PeggingEventKind::LastCard, 1),
        ]
    );
}

#[test]
fn extended_scoring_counts_runs_in_any_order() {
    let mut game = pegging("6C 8D", "4H 5S").with_extended_scoring(true);

    game.play(Player::One, card("6C")).unwrap();
    game.play(Player::Two, card("4H")).unwrap();
    let outcome = game.play(Player::One, card("8D")).unwrap();
    assert!(outcome.events.is_empty());

    // Neither 4-8-5 nor 6-4-8-5 is a sequence.
    let outcome = game.play(Player::Two, card("5S")).unwrap();
    assert!(
        !outcome
            .events
            .iter()
            .any(|e| matches!(e.kind, PeggingEventKind::Run(_)))
    );

    let mut game = pegging("4C 6D", "5H KS").with_extended_scoring(true);
    game.play(Player::One, card("4C")).unwrap();
    game.play(Player::Two, card("5H")).unwrap();
    let outcome = game.play(Player::One, card("6D")).unwrap();
    assert_eq!(
        kinds(&outcome.events),
        vec![
            (Player::One, PeggingEventKind::Run(3), 3),
            (Player::One, PeggingEventKind::Fifteen, 2),
        ]
    );
}

#[test]
fn base_rules_do_not_score_runs() {
    let mut game = pegging("4C 6D", "5H KS");
    game.play(Player::One, card("4C")).unwrap();
    game.play(Player::Two, card("5H")).unwrap();
    let outcome = game.play(Player::One, card("6D")).unwrap();

    assert_eq!(
        kinds(&outcome.events),
        vec![(Player::One, PeggingEventKind::Fifteen, 2)]
    );
}
