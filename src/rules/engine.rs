//! Rules engine trait.
//!
//! A host drives any game through `RulesEngine`:
//! - What actions are legal
//! - How an action changes the state
//! - Whether the game is over, and the reward so far

use serde::{Deserialize, Serialize};

use crate::core::action::ActionId;
use crate::core::config::GameConfig;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Turn};
use crate::error::GameError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Draw => false,
        }
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{p} wins"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Sorted ascending, empty once the game is over
/// - `apply_action`: Must be deterministic; rejects ids outside the legal set
/// - `is_terminal`: Return None if the game continues
/// - `returns`: Zero-sum, defined in every state
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Legal action ids for the player on turn.
    fn legal_actions(&self, state: &GameState) -> Vec<ActionId>;

    /// Apply an action for the player on turn.
    fn apply_action(&self, state: &mut GameState, action: ActionId) -> Result<(), GameError>;

    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Reward for each player; the two entries always sum to zero.
    fn returns(&self, state: &GameState) -> [f64; 2];

    /// Number of distinct action ids.
    fn num_distinct_actions(&self) -> usize;

    // === Convenience Methods ===

    /// Who acts next.
    fn current_player(&self, state: &GameState) -> Turn {
        state.turn()
    }

    /// Check whether an id is currently legal.
    fn is_legal(&self, state: &GameState, action: ActionId) -> bool {
        self.legal_actions(state).binary_search(&action).is_ok()
    }
}
