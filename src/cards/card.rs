//! Playing cards: ranks, suits and the `Card` value type.
//!
//! ## Ordering
//!
//! Cards compare by rank alone, Ace high. Suit never takes part in a game
//! comparison, so `7♣ == 7♥` is a real tie. Use [`Card::identity`] when the
//! exact rank/suit pair matters (card accounting, rendering).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{Result, WarError};

/// One of the 13 ranks, `Two` through `Ace`.
///
/// The discriminant is the rank value used for comparisons (Ace = 14).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
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

    /// Rank value, 2..=14.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Look up a rank by value (2..=14).
    pub fn from_value(value: u8) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.value() == value)
            .ok_or_else(|| WarError::InvalidCard(format!("rank value {value}")))
    }

    /// Short symbol: `2`..`10`, `J`, `Q`, `K`, `A`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parse a rank symbol. `T` is accepted as an alias for `10`.
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        let symbol = symbol.trim();
        if symbol.eq_ignore_ascii_case("T") {
            return Ok(Rank::Ten);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.symbol().eq_ignore_ascii_case(symbol))
            .ok_or_else(|| WarError::InvalidCard(format!("unknown rank {symbol:?}")))
    }

    /// Adjacent ranks for the speed-war trigger.
    ///
    /// Ranks one apart are adjacent, and the ends of the rank list wrap:
    /// `Two` and `Ace` are adjacent too.
    #[must_use]
    pub fn is_adjacent(self, other: Rank) -> bool {
        let diff = self.value().abs_diff(other.value());
        diff == 1 || diff == 12
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Card suit. Has no bearing on ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }

    /// Parse a suit from its full name or its initial letter.
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|s| {
                s.name().eq_ignore_ascii_case(name)
                    || (name.len() == 1 && s.name()[..1].eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| WarError::InvalidCard(format!("unknown suit {name:?}")))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Rank and suit are fixed at construction. `face_down` is a display flag
/// only and never affects comparison.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    face_down: bool,
}

impl Card {
    /// Create a face-up card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_down: false,
        }
    }

    /// Build a card from a rank symbol and a suit name, e.g. `("10", "Hearts")`.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self> {
        Ok(Self::new(Rank::from_symbol(rank)?, Suit::from_name(suit)?))
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Rank value used for comparisons (2..=14, Ace = 14).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Compare by rank value.
    #[must_use]
    pub fn compare(&self, other: &Card) -> Ordering {
        self.value().cmp(&other.value())
    }

    /// Exact rank/suit pair, for accounting where suits must be told apart.
    #[must_use]
    pub const fn identity(&self) -> (Rank, Suit) {
        (self.rank, self.suit)
    }

    #[must_use]
    pub const fn is_face_down(&self) -> bool {
        self.face_down
    }

    pub fn set_face_down(&mut self, face_down: bool) {
        self.face_down = face_down;
    }

    /// Same card, shown face down.
    #[must_use]
    pub const fn turned_down(mut self) -> Self {
        self.face_down = true;
        self
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = WarError;

    /// Parse compact notation, a rank symbol followed by a suit letter
    /// (`"10H"`, `"AS"`, `"qd"`), or the long form `"7 of Clubs"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some((rank, suit)) = s.split_once(" of ") {
            return Card::from_symbols(rank, suit);
        }

        let (idx, _) = s
            .char_indices()
            .last()
            .ok_or_else(|| WarError::InvalidCard("empty card notation".to_string()))?;
        let (rank, suit) = s.split_at(idx);
        if rank.is_empty() {
            return Err(WarError::InvalidCard(format!("missing rank in {s:?}")));
        }
        Card::from_symbols(rank, suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);
        assert_eq!(Rank::from_value(12), Ok(Rank::Queen));
        assert!(Rank::from_value(1).is_err());
        assert!(Rank::from_value(15).is_err());
    }

    #[test]
    fn test_ordering_ignores_suit() {
        let seven_clubs = Card::new(Rank::Seven, Suit::Clubs);
        let seven_hearts = Card::new(Rank::Seven, Suit::Hearts);
        let ace = Card::new(Rank::Ace, Suit::Spades);

        assert_eq!(seven_clubs, seven_hearts);
        assert_eq!(seven_clubs.compare(&seven_hearts), Ordering::Equal);
        assert!(ace > seven_clubs);
        assert_eq!(seven_hearts.compare(&ace), Ordering::Less);
        assert_ne!(seven_clubs.identity(), seven_hearts.identity());
    }

    #[test]
    fn test_face_down_does_not_affect_comparison() {
        let card = Card::new(Rank::King, Suit::Diamonds);
        let down = card.turned_down();

        assert!(down.is_face_down());
        assert!(!card.is_face_down());
        assert_eq!(card, down);
        assert_eq!(card.identity(), down.identity());
    }

    #[test]
    fn test_from_symbols() {
        let card = Card::from_symbols("10", "Hearts").unwrap();
        assert_eq!(card.identity(), (Rank::Ten, Suit::Hearts));

        assert!(matches!(
            Card::from_symbols("1", "Hearts"),
            Err(WarError::InvalidCard(_))
        ));
        assert!(matches!(
            Card::from_symbols("A", "Stars"),
            Err(WarError::InvalidCard(_))
        ));
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("10H".parse::<Card>().unwrap().identity(), (Rank::Ten, Suit::Hearts));
        assert_eq!("AS".parse::<Card>().unwrap().identity(), (Rank::Ace, Suit::Spades));
        assert_eq!("qd".parse::<Card>().unwrap().identity(), (Rank::Queen, Suit::Diamonds));
        assert_eq!("2c".parse::<Card>().unwrap().identity(), (Rank::Two, Suit::Clubs));
        assert_eq!(
            "7 of Clubs".parse::<Card>().unwrap().identity(),
            (Rank::Seven, Suit::Clubs)
        );

        assert!("".parse::<Card>().is_err());
        assert!("H".parse::<Card>().is_err());
        assert!("11H".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A of Spades");
    }

    #[test]
    fn test_adjacent_ranks() {
        assert!(Rank::Seven.is_adjacent(Rank::Eight));
        assert!(Rank::King.is_adjacent(Rank::Ace));
        assert!(Rank::Ace.is_adjacent(Rank::Two));
        assert!(!Rank::Seven.is_adjacent(Rank::Seven));
        assert!(!Rank::Two.is_adjacent(Rank::Four));
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Rank::Jack, Suit::Clubs);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card.identity(), deserialized.identity());
    }
}
