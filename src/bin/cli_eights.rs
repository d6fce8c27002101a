//! CLI front end for the matching game: renders the table, paces the
//! automated turns, and formats cards. The engine itself performs no I/O.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use c8rs::{Card, Game, GameOptions, Player, Rank, Snapshot, Suit, TurnEvent};

fn main() {
    println!("Two-player matching game (type 'q' to quit)");

    let Some(packs) = prompt_usize("Number of packs (each 52 cards): ") else {
        return;
    };
    let Ok(packs) = u8::try_from(packs) else {
        println!("Too many packs.");
        return;
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_packs(packs);

    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Cannot start game: {err}");
            return;
        }
    };

    println!("\nShuffling and dealing...");
    let snapshot = game.snapshot();
    print_hand(Player::One, &snapshot.hand1);
    print_hand(Player::Two, &snapshot.hand2);
    if let Some(top) = snapshot.discard_top {
        println!("Initial card: {}", format_card(&top));
    }

    loop {
        if !wait_for_enter() {
            return;
        }

        let Some(player) = game.current_player() else {
            break;
        };

        let event = match game.step() {
            Ok(event) => event,
            Err(err) => {
                println!("Step error: {err}");
                break;
            }
        };

        match event {
            TurnEvent::Played { player, card } => {
                println!("\n--- {}'s turn ---", player_name(player));
                println!("{} played {}", player_name(player), format_card(&card));
                print_player(&game.snapshot(), player);
            }
            TurnEvent::Drew { player, card } => {
                println!("\n--- {}'s turn ---", player_name(player));
                println!(
                    "{} cannot play and picks {} from the draw pile.",
                    player_name(player),
                    format_card(&card)
                );
                print_player(&game.snapshot(), player);
            }
            TurnEvent::Refilled => {
                println!("\n*** Draw pile empty -- refilling and shuffling ***");
                println!("{} still to act.", player_name(player));
            }
            TurnEvent::Won { player } => {
                println!("\n{} wins!", player_name(player));
                break;
            }
            TurnEvent::Stalemate => {
                println!("\nNo cards left to draw. The game is a stalemate.");
                break;
            }
        }

        println!("Draw pile: {} cards", game.cards_remaining());
    }
}

fn wait_for_enter() -> bool {
    print!("Press ENTER to continue...");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    input.trim() != "q"
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return None;
        }
        let input = input.trim().to_lowercase();
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_player(snapshot: &Snapshot, player: Player) {
    let hand = match player {
        Player::One => &snapshot.hand1,
        Player::Two => &snapshot.hand2,
    };
    print_hand(player, hand);
}

fn print_hand(player: Player, hand: &[Card]) {
    println!("{}'s cards:", player_name(player));
    for card in hand {
        println!("  {}", format_card(card));
    }
}

const fn player_name(player: Player) -> &'static str {
    match player {
        Player::One => "Player 1",
        Player::Two => "Player 2",
    }
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Clubs => ("Club", "32"),
        Suit::Diamonds => ("Diamond", "31"),
        Suit::Hearts => ("Heart", "31"),
        Suit::Spades => ("Spade", "34"),
    };

    let rank = match card.rank {
        Rank::Two => "Two",
        Rank::Three => "Three",
        Rank::Four => "Four",
        Rank::Five => "Five",
        Rank::Six => "Six",
        Rank::Seven => "Seven",
        Rank::Eight => "Eight",
        Rank::Nine => "Nine",
        Rank::Ten => "Ten",
        Rank::Jack => "Jack",
        Rank::Queen => "Queen",
        Rank::King => "King",
        Rank::Ace => "Ace",
    };

    colorize(&format!("{suit}-{rank}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
