//! # warzone
//!
//! Turn-resolution engine for the card game War.
//!
//! ## Design Principles
//!
//! 1. **Card custody**: every card is always in exactly one place: the deck,
//!    a hand, the table, the war pot or the undealt remainder.
//!    `Game::card_census` checks this.
//!
//! 2. **No hidden state**: the engine holds no global instance and never
//!    formats UI text. A presentation layer owns the `Game`, calls
//!    `play_round` / `resolve_war`, and re-renders from `Game::snapshot`.
//!
//! 3. **Ties are state, not errors**: a tie puts the game into
//!    `GamePhase::WarPending`; only protocol misuse and broken invariants
//!    produce a `WarError`.
//!
//! ## Example
//!
//! ```
//! use warzone::{GameBuilder, RuleSet, WarPolicy};
//!
//! let mut game = GameBuilder::new()
//!     .player_names("Alice", "Bob")
//!     .rules(RuleSet::new().with_war_policy(WarPolicy::Double))
//!     .seed(7)
//!     .build();
//! game.shuffle();
//! game.deal().unwrap();
//!
//! for _ in 0..100 {
//!     let winner = if game.is_war_in_progress() {
//!         game.resolve_war().unwrap()
//!     } else {
//!         game.play_round().unwrap()
//!     };
//!     if winner.is_some() {
//!         break;
//!     }
//! }
//! assert_eq!(game.total_cards(), 52);
//! ```
//!
//! ## Modules
//!
//! - `cards`: ranks, suits, cards and the deck
//! - `core`: seats, players and the shuffle RNG
//! - `zones`: the table
//! - `rules`: rule configuration
//! - `engine`: the round/war state machine and snapshots

pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod zones;

pub use crate::cards::{Card, DealtHands, Deck, Rank, Suit};
pub use crate::core::{GameRng, Player, PlayerId, PlayerMap};
pub use crate::engine::{Game, GameBuilder, GamePhase, GameSnapshot, OutcomeKind, PlayerView, RoundOutcome};
pub use crate::error::{Result, WarError};
pub use crate::rules::{RuleSet, WarPolicy};
pub use crate::zones::{Placement, Table, TableSlot};
