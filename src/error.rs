//! Error types.
//!
//! Recoverable host mistakes are returned as errors. Broken internal
//! invariants (negative gem counts, popping an empty slot, a fourth reserved
//! card, a conservation mismatch) panic instead: they mean the rules and the
//! legal-action generator disagree, and the state can no longer be trusted.

use thiserror::Error;

use crate::core::action::ActionId;
use crate::core::state::PhaseKind;

/// Errors from applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// The id is not in the current legal set.
    #[error("{action} is not legal in the {phase} phase")]
    InvalidAction {
        action: ActionId,
        phase: PhaseKind,
    },

    /// The game already has a result.
    #[error("the game is over")]
    GameOver,
}

/// Errors from building a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError {
    /// A tier is too small for the face-down slot to exist.
    #[error("tier {tier} has {len} cards, at least {min} are required")]
    TierTooSmall { tier: usize, len: usize, min: usize },

    #[error("card {index} of tier {tier} is worth {points} points")]
    PointsOutOfRange { tier: usize, index: usize, points: u8 },

    /// A catalog row named a level outside 1..=3.
    #[error("card level {0} is not 1, 2 or 3")]
    InvalidLevel(u8),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Failure to encode a state snapshot.
#[derive(Debug, Error)]
#[error("snapshot encoding failed: {0}")]
pub struct SnapshotError(#[from] pub bincode::Error);
