//! CLI cribbage example.
//!
//! You play seat one against a computer opponent that always lays its first
//! legal card and discards its first two.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{
    Card, CountedHand, Game, GameOptions, GameState, Hand, PeggingEvent, PeggingEventKind,
    Player, Suit, parse_cards,
};

const YOU: Player = Player::One;
const CPU: Player = Player::Two;

fn main() {
    println!("Cribbage CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let target = options.target_score;
    let mut game = Game::new(options, seed);

    loop {
        if let Err(err) = game.deal() {
            println!("Deal error: {err}");
            break;
        }

        println!(
            "\nRound {}: {} deals. Score {} (you) - {} (cpu), playing to {target}.",
            game.round(),
            name(game.dealer()),
            game.score(YOU),
            game.score(CPU),
        );

        if !discard_phase(&mut game) {
            return;
        }

        match game.cut() {
            Ok(card) => println!("Cut: {}", format_card(&card)),
            Err(err) => println!("Cut error: {err}"),
        }

        while let Some(player) = game.current_player() {
            if !play_turn(&mut game, player) {
                return;
            }
        }

        if game.state() == GameState::Counting {
            match game.count() {
                Ok(result) => {
                    for counted in [&result.pone_hand, &result.dealer_hand, &result.crib] {
                        print_count(counted);
                    }
                }
                Err(err) => println!("Count error: {err}"),
            }
        }

        if let Some(winner) = game.winner() {
            println!(
                "\nWinner: {} ({} - {})",
                name(winner),
                game.score(winner),
                game.score(winner.other())
            );
            break;
        }

        if let Err(err) = game.clear_round() {
            println!("Clear error: {err}");
            break;
        }
    }
}

/// Collects both discards. Returns `false` if the user quits.
fn discard_phase(game: &mut Game) -> bool {
    let cpu_discard = game.hand(CPU).cards()[..2].to_vec();
    if let Err(err) = game.discard(CPU, &cpu_discard) {
        println!("Discard error: {err}");
    }

    let crib_owner = if game.dealer() == YOU { "your" } else { "the cpu's" };
    loop {
        println!("Your hand: {}", format_hand(game.hand(YOU)));
        let Some(input) = prompt_line(&format!("Discard two cards to {crib_owner} crib: "))
        else {
            return false;
        };

        let cards = match parse_cards(&input) {
            Ok(cards) => cards,
            Err(err) => {
                println!("Parse error: {err}");
                continue;
            }
        };

        match game.discard(YOU, &cards) {
            Ok(()) => return true,
            Err(err) => println!("Discard error: {err}"),
        }
    }
}

/// Lays one card for `player`. Returns `false` if the user quits.
fn play_turn(game: &mut Game, player: Player) -> bool {
    let Some(pegging) = game.pegging() else {
        return true;
    };
    let count = pegging.count();

    let card = if player == CPU {
        let Some(&card) = pegging.playable_cards(CPU).first() else {
            return true;
        };
        card
    } else {
        println!(
            "\nCount {count} | played: {}",
            format_cards(pegging.sequence())
        );
        println!("Your cards: {}", format_hand(pegging.hand(YOU)));
        let Some(input) = prompt_line("Card to play: ") else {
            return false;
        };
        match input.parse::<Card>() {
            Ok(card) => card,
            Err(err) => {
                println!("Parse error: {err}");
                return true;
            }
        }
    };

    match game.play(player, card) {
        Ok(outcome) => {
            println!(
                "{}: {} (count {})",
                name(player),
                format_card(&outcome.card),
                outcome.count
            );
            for event in &outcome.events {
                print_event(event);
            }
        }
        Err(err) => println!("Play error: {err}"),
    }
    true
}

fn print_event(event: &PeggingEvent) {
    let what = match event.kind {
        PeggingEventKind::Fifteen => "fifteen".to_string(),
        PeggingEventKind::ThirtyOne => "thirty-one".to_string(),
        PeggingEventKind::Pair(n) => format!("{n} of a kind"),
        PeggingEventKind::Run(n) => format!("run of {n}"),
        PeggingEventKind::Go => "go".to_string(),
        PeggingEventKind::LastCard => "last card".to_string(),
    };
    if event.points == 0 {
        println!("  {}: {what}", name(event.player));
    } else {
        println!("  {}: {what} for {}", name(event.player), event.points);
    }
}

fn print_count(counted: &CountedHand) {
    let total = counted.score.total();
    let note = if counted.credited { "" } else { " (not counted)" };
    println!("{}: {total}{note}", name(counted.player));
    for event in counted.score.events() {
        println!(
            "  {} for {}: {}",
            event.kind,
            event.points,
            format_cards(&event.cards)
        );
    }
}

fn name(player: Player) -> &'static str {
    if player == YOU { "You" } else { "Cpu" }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    read_command(&mut io::stdin().lock())
}

/// Reads one trimmed, lowercased line. Returns `None` on quit or end of input.
fn read_command(reader: &mut impl BufRead) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return None,
        Ok(_) => {}
    }

    let input = input.trim().to_lowercase();
    if input == "q" || input == "quit" {
        return None;
    }
    Some(input)
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    format_cards(hand.cards())
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
