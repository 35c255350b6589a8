//! Hand representation with incremental scoring.

use crate::card::Card;

/// An accumulating hand of dealt cards for one party (player or dealer).
///
/// The running value and the ace count are maintained incrementally as cards
/// arrive. Aces enter at 11; [`Hand::adjust_for_aces`] demotes them to 1 one
/// at a time while the hand would otherwise bust. Adding a card never
/// self-adjusts — the round engine calls the adjustment at the points where a
/// bust is possible.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    /// Cards in the hand, in dealt order.
    cards: Vec<Card>,
    /// Running value, with each ace counted per the current ace count.
    value: u16,
    /// Number of aces still counted as 11.
    aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            value: 0,
            aces: 0,
        }
    }

    /// Adds a card to the hand.
    ///
    /// The card's base point value (ace = 11) is added to the running value;
    /// the ace count grows if the card is an ace. No adjustment happens here.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.value += u16::from(card.point_value());
        if card.is_ace() {
            self.aces += 1;
        }
    }

    /// Demotes aces from 11 to 1, one per iteration, while the hand is over
    /// 21 and an ace is still counted high.
    ///
    /// Idempotent once the value is 21 or below, or no high aces remain.
    pub const fn adjust_for_aces(&mut self) {
        while self.value > 21 && self.aces > 0 {
            self.value -= 10;
            self.aces -= 1;
        }
    }

    /// Returns the cards in the hand, in dealt order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the most recently dealt card.
    #[must_use]
    pub fn last_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the current hand value.
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.value
    }

    /// Returns the number of aces still counted as 11.
    #[must_use]
    pub const fn aces(&self) -> u8 {
        self.aces
    }

    /// Returns whether the hand is worth exactly 21.
    #[must_use]
    pub const fn is_twenty_one(&self) -> bool {
        self.value == 21
    }

    /// Returns whether the hand is worth more than 21.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        self.value > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
