//! # rust-splendor
//!
//! A deterministic two-player rules engine for a gem trading card game,
//! built for RL/MCTS training.
//!
//! ## Design Principles
//!
//! 1. **Dense Actions**: Every move is one of 57 fixed ids, so a policy
//!    head has a constant size.
//!
//! 2. **Explicit Sub-Turns**: Paying with gold and returning excess gems are
//!    phases of the state, driven by their own actions.
//!
//! 3. **Deterministic**: The only randomness is a seeded shuffle at
//!    construction. Same seed, catalog and ids give identical states.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs` for search.
//!
//! - **Fail Loudly**: Illegal host input is an error; a broken internal
//!   invariant (such as gems not being conserved) is a panic.
//!
//! ## Modules
//!
//! - `core`: Gems, players, actions, state, RNG, configuration
//! - `cards`: Cards and the card catalog
//! - `board`: Card tiers and the gem pool
//! - `rules`: `RulesEngine` trait
//! - `games`: The game itself (`games::splendor`)
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod board;
pub mod rules;
pub mod games;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Color, Gem, GemVector,
    Player, PlayerId, PlayerMap,
    GameRng, GameConfig, RewardConfig,
    Action, ActionCatalog, ActionCategory, ActionId, ActionRecord,
    GameState, Phase, PhaseKind, Turn,
};

pub use crate::cards::{Card, CardCatalog};
pub use crate::board::Board;
pub use crate::rules::{GameResult, RulesEngine};
pub use crate::games::splendor::{Splendor, SplendorBuilder};
pub use crate::error::{ConstructionError, GameError, SnapshotError};
