//! Core types: gems, players, actions, state, RNG, configuration.

pub mod gems;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use gems::{Color, Gem, GemVector, COLOR_KINDS, GEM_KINDS};
pub use player::{Player, PlayerId, PlayerMap, MAX_RESERVED, NUM_PLAYERS};
pub use rng::GameRng;
pub use config::{GameConfig, RewardConfig};
pub use action::{Action, ActionCatalog, ActionCategory, ActionId, ActionRecord, NUM_ACTIONS};
pub use state::{GameState, Phase, PhaseKind, Turn};
