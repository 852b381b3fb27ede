//! Read-only views of a game for a presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::zones::Placement;

/// Where the game is between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Cards are still in the deck.
    AwaitingDeal,
    /// Ready for `play_round`.
    Idle,
    /// A round tied; `resolve_war` must be called next.
    WarPending,
    /// One hand holds every card in play.
    GameOver,
}

/// How the last step ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    /// A round decided by its face-up cards.
    Round,
    /// A round that tied and opened a war (nothing awarded yet).
    Tie,
    /// A war decided by a face-up comparison after `escalations` steps.
    War { escalations: u32 },
    /// A war decided because a participant could not afford another step.
    Elimination { escalations: u32 },
}

/// Result of the most recent `play_round` or `resolve_war`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub kind: OutcomeKind,
    /// The last face-up cards compared (empty for an elimination without
    /// escalation).
    pub placements: Vec<Placement>,
    /// Seat that took the cards, `None` for a tie.
    pub winner: Option<PlayerId>,
    /// Number of cards handed to the winner.
    pub cards_awarded: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub hand_size: usize,
}

/// Everything a renderer needs after a call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub players: Vec<PlayerView>,
    /// Cards currently on the table, current step first then snapshot.
    pub table: Vec<Placement>,
    pub pot_size: usize,
    pub rules: String,
    pub last_outcome: Option<RoundOutcome>,
    pub winner: Option<PlayerId>,
    pub rounds_played: u32,
    pub wars_fought: u32,
}
