//! Cards and the deck.
//!
//! ## Key Types
//!
//! - `Rank`, `Suit`: the fixed enumerated sets
//! - `Card`: immutable value, ordered by rank only
//! - `Deck`: canonical card set with seeded shuffle and round-robin deal

pub mod card;
pub mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{DealtHands, Deck, STANDARD_DECK_SIZE};
