//! Core types: seats, players and the shuffle RNG.

pub mod player;
pub mod rng;

pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
