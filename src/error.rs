//! Error types for the War engine.
//!
//! Ties, eliminations and undealt remainder cards are normal game flow and
//! are never reported through this type.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WarError {
    #[error("Invalid card: {0}")]
    InvalidCard(String),

    #[error("At least two players are required, got {players}")]
    InsufficientPlayers { players: usize },

    #[error("Cannot deal {cards} cards to {players} players")]
    InsufficientCards { cards: usize, players: usize },

    /// A play was attempted from an empty hand. Under correct engine
    /// sequencing this never happens.
    #[error("No cards left in hand for {player}")]
    EmptyHand { player: String },

    #[error("A war is pending; resolve it before playing another round")]
    WarPending,

    #[error("No war is in progress")]
    NoWarInProgress,

    #[error("Unknown war resolution policy: {0}")]
    UnknownWarPolicy(String),
}

pub type Result<T> = std::result::Result<T, WarError>;
