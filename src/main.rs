//! Console blackjack driver.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use colored::Colorize;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use twentyone::{
    ActionSource, BetSource, Card, FullTable, Money, PartialTable, PlayerAction, Round,
    RoundOutcome, Suit, TableView,
};

const DEALER_PAUSE: Duration = Duration::from_secs(2);

fn main() {
    env_logger::init();

    println!("Welcome to blackjack!");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut session_rng = ChaCha8Rng::seed_from_u64(seed);

    loop {
        let mut round = Round::new(session_rng.random());
        let mut console = Console::new();

        if let Err(err) = round.play(&mut console) {
            println!("Round error: {err}");
        }

        if !play_again() {
            break;
        }
    }
}

/// Stdin/stdout implementation of the driver contract.
struct Console {
    /// Whether the opening partial table has been shown; later partial
    /// tables follow a hit and announce the drawn card.
    partial_shown: bool,
    /// Whether the reveal-time full table has been shown; later full tables
    /// follow a dealer draw and announce the drawn card.
    full_shown: bool,
}

impl Console {
    const fn new() -> Self {
        Self {
            partial_shown: false,
            full_shown: false,
        }
    }
}

impl BetSource for Console {
    fn bet(&mut self, max_allowed: Money) -> Money {
        let amount = loop {
            let input = prompt_line("Bet: $");
            let Ok(amount) = input.parse::<Money>() else {
                println!("Please enter a number.");
                continue;
            };
            if amount < 0 {
                println!("Please enter a number.");
                continue;
            }
            if amount > max_allowed {
                println!("Not enough cash!");
                continue;
            }
            break amount;
        };
        println!("Your bet is ${amount}\nHave a good luck!\n");
        amount
    }
}

impl ActionSource for Console {
    fn action(&mut self) -> PlayerAction {
        loop {
            match prompt_line("\nHit or stand? ").as_str() {
                "hit" => return PlayerAction::Hit,
                "stand" => return PlayerAction::Stand,
                _ => println!("Make sure you are typing correctly"),
            }
        }
    }
}

impl TableView for Console {
    fn show_partial(&mut self, table: &PartialTable<'_>) {
        if self.partial_shown {
            if let Some(card) = table.player_cards.last() {
                println!("You got a {}!\n", format_card(*card));
            }
        }
        self.partial_shown = true;

        println!("Player's hand: {}", table.player_value);
        println!("{}", format_cards(table.player_cards));
        println!("Dealer's hand: {}", format_card(table.dealer_upcard));
    }

    fn show_full(&mut self, table: &FullTable<'_>) {
        if self.full_shown {
            if let Some(card) = table.dealer_cards.last() {
                println!("Dealer got a {}\n", format_card(*card));
            }
        } else {
            println!("Ok, it's dealer's time now!");
            if let Some(hole) = table.dealer_cards.get(1) {
                println!("\nDealer's hidden card was a {}", format_card(*hole));
            }
        }
        self.full_shown = true;

        println!("Player's hand: {}", table.player_value);
        println!("{}", format_cards(table.player_cards));
        println!("Dealer's hand: {}", table.dealer_value);
        println!("{}\n", format_cards(table.dealer_cards));
    }

    fn outcome(&mut self, outcome: RoundOutcome) {
        let banner = match outcome {
            RoundOutcome::PlayerWin => "YOU WON!!!",
            RoundOutcome::DealerWin => "DEALER WON!!!",
            RoundOutcome::Push => "IT'S A DRAW!!!",
            RoundOutcome::PlayerBust => "YOU BUSTED =/",
            RoundOutcome::DealerBust => "DEALER BUSTED! YOU WIN!",
            RoundOutcome::PlayerTwentyOne => "CONGRATULATIONS! YOU GOT 21!!!!!",
            RoundOutcome::DealerTwentyOne => "Dealer got 21! More luck to you next time!",
        };
        println!("\n\n{banner}\n");
    }

    fn dealer_pause(&mut self) {
        thread::sleep(DEALER_PAUSE);
    }
}

fn play_again() -> bool {
    loop {
        match prompt_line("\nDo you want to play again? [yes/no] ").as_str() {
            "yes" => return true,
            "no" => return false,
            _ => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_card(card: Card) -> String {
    let text = card.to_string();
    match card.suit {
        Suit::Hearts | Suit::Diamonds => text.red().to_string(),
        Suit::Spades => text.blue().to_string(),
        Suit::Clubs => text.green().to_string(),
    }
}
