use std::fmt;
use std::hash::{Hash, Hasher};

use itertools::Itertools;
use rand::Rng;

use crate::error::{DrillError, DrillResult};

pub const RANKS_STR: &str = "23456789TJQKA";
pub const SUITS_STR: &str = "shdc";
pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn from_char(c: char) -> DrillResult<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Ok(Rank::Two),
            '3' => Ok(Rank::Three),
            '4' => Ok(Rank::Four),
            '5' => Ok(Rank::Five),
            '6' => Ok(Rank::Six),
            '7' => Ok(Rank::Seven),
            '8' => Ok(Rank::Eight),
            '9' => Ok(Rank::Nine),
            'T' => Ok(Rank::Ten),
            'J' => Ok(Rank::Jack),
            'Q' => Ok(Rank::Queen),
            'K' => Ok(Rank::King),
            'A' => Ok(Rank::Ace),
            _ => Err(DrillError::InvalidRank(c.to_string())),
        }
    }

    /// Parse a rank string. Case-insensitive; "10" is an alias for "T".
    pub fn parse(s: &str) -> DrillResult<Rank> {
        let s = s.trim();
        if s == "10" {
            return Ok(Rank::Ten);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::from_char(c),
            _ => Err(DrillError::InvalidRank(s.to_string())),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn value(self) -> u8 {
        self as u8
    }
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub fn from_char(c: char) -> DrillResult<Suit> {
        match c.to_ascii_lowercase() {
            's' => Ok(Suit::Spades),
            'h' => Ok(Suit::Hearts),
            'd' => Ok(Suit::Diamonds),
            'c' => Ok(Suit::Clubs),
            _ => Err(DrillError::InvalidSuit(c.to_string())),
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "\u{2660}",
            Suit::Hearts => "\u{2665}",
            Suit::Diamonds => "\u{2666}",
            Suit::Clubs => "\u{2663}",
        }
    }
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

/// One playing card. Equality and hashing use full (rank, suit) identity;
/// ordering compares rank only, so suit never participates in ordering.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Same physical card: rank and suit both match. Used for deal dedup.
    pub fn same_card(&self, other: &Card) -> bool {
        self == other
    }

    /// Same face value, suits ignored. Used for pair detection in notation.
    pub fn same_rank(&self, other: &Card) -> bool {
        self.rank == other.rank
    }

    pub fn pretty(&self) -> String {
        format!("{}{}", self.rank.to_char(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// All 52 cards, rank-major order.
pub fn full_deck() -> Vec<Card> {
    ALL_RANKS
        .iter()
        .cartesian_product(ALL_SUITS.iter())
        .map(|(&rank, &suit)| Card::new(rank, suit))
        .collect()
}

/// Deal `n` pairwise-distinct cards by uniform sampling over the 52-card
/// domain, redrawing on any exact (rank, suit) duplicate. The RNG is
/// injected so sessions can be seeded and tests made deterministic.
pub fn deal<R: Rng + ?Sized>(rng: &mut R, n: usize) -> DrillResult<Vec<Card>> {
    if n > DECK_SIZE {
        return Err(DrillError::InvalidDealCount {
            requested: n,
            deck: DECK_SIZE,
        });
    }
    let mut dealt: Vec<Card> = Vec::with_capacity(n);
    while dealt.len() < n {
        let rank = ALL_RANKS[rng.gen_range(0..ALL_RANKS.len())];
        let suit = ALL_SUITS[rng.gen_range(0..ALL_SUITS.len())];
        let card = Card::new(rank, suit);
        if !dealt.iter().any(|c| c.same_card(&card)) {
            dealt.push(card);
        }
    }
    Ok(dealt)
}

/// Parse card notation like "Ah", "td", or "10s".
pub fn parse_card(notation: &str) -> DrillResult<Card> {
    let notation = notation.trim();
    let chars: Vec<char> = notation.chars().collect();
    if chars.len() < 2 {
        return Err(DrillError::InvalidCardNotation(notation.to_string()));
    }
    let rank_part: String = chars[..chars.len() - 1].iter().collect();
    let rank = Rank::parse(&rank_part)?;
    let suit = Suit::from_char(chars[chars.len() - 1])?;
    Ok(Card::new(rank, suit))
}

/// Parse concatenated card notation like "AhKs" or "10c 7d".
pub fn parse_cards(notation: &str) -> DrillResult<Vec<Card>> {
    let cleaned = notation.trim().replace(' ', "").replace(',', "");
    let mut cards = Vec::new();
    let chars: Vec<char> = cleaned.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        // "10" spans three chars with the suit; everything else spans two.
        let len = if chars[i] == '1' { 3 } else { 2 };
        if i + len > chars.len() {
            return Err(DrillError::InvalidCardNotation(notation.to_string()));
        }
        let s: String = chars[i..i + len].iter().collect();
        cards.push(parse_card(&s)?);
        i += len;
    }
    Ok(cards)
}
