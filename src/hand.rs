use std::collections::HashSet;
use std::fmt;
use std::ops::Index;

use crate::cards::{Card, Suit};
use crate::error::{DrillError, DrillResult};

/// An immutable set of hole cards, sorted descending by rank at
/// construction. The no-duplicate-card invariant belongs to the dealer,
/// not to Hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(mut cards: Vec<Card>) -> Hand {
        cards.sort_by(|a, b| b.rank.cmp(&a.rank));
        Hand { cards }
    }

    pub fn pair(first: Card, second: Card) -> Hand {
        Hand::new(vec![first, second])
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Each card's suit, in the same order as `cards()`.
    pub fn suits(&self) -> Vec<Suit> {
        self.cards.iter().map(|c| c.suit).collect()
    }

    /// Canonical range-table notation for a two-card hand: "TT" for a
    /// pocket pair (suit-agnostic), otherwise high rank, low rank, and
    /// "s"/"o" by distinct-suit count. Defined only for exactly 2 cards.
    pub fn notation(&self) -> DrillResult<String> {
        if self.cards.len() != 2 {
            return Err(DrillError::InvalidHandSize(self.cards.len()));
        }
        let (high, low) = (self.cards[0], self.cards[1]);
        if high.same_rank(&low) {
            return Ok(format!("{}{}", high.rank.to_char(), low.rank.to_char()));
        }
        let distinct_suits: HashSet<Suit> = self.suits().into_iter().collect();
        let token = if distinct_suits.len() == 1 { "s" } else { "o" };
        Ok(format!(
            "{}{}{}",
            high.rank.to_char(),
            low.rank.to_char(),
            token
        ))
    }
}

impl Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
