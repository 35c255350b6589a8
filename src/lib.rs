//! A single-player console blackjack round engine.
//!
//! The crate provides a [`Round`] type that manages the full round flow —
//! betting, the initial deal, player hit/stand decisions, the dealer's
//! automated draws, and resolution — against a driver that supplies inputs
//! and renders the table (see [`driver`]).
//!
//! # Example
//!
//! ```no_run
//! use twentyone::Round;
//!
//! let round = Round::new(42);
//! assert_eq!(round.chips().total(), 500);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod chips;
pub mod deck;
pub mod driver;
pub mod error;
pub mod hand;
pub mod outcome;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use chips::{Chips, Money, STARTING_BANKROLL};
pub use deck::Deck;
pub use driver::{ActionSource, BetSource, Driver, FullTable, PartialTable, TableView};
pub use error::{ActionError, BetError, DealError, DealerError, EmptyDeckError, PlayError};
pub use hand::Hand;
pub use outcome::RoundOutcome;
pub use round::{PlayerAction, Round, RoundState, TurnFlow};
