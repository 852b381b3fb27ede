//! The round/war state machine.
//!
//! `Game` owns the deck, both players, the table and the war pot, and is
//! the only thing that moves cards between them.

mod game;
mod snapshot;
mod war;

pub use game::{Game, GameBuilder};
pub use snapshot::{GamePhase, GameSnapshot, OutcomeKind, PlayerView, RoundOutcome};
