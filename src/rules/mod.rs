//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - Win/draw conditions and rewards
//!
//! Hosts (search, training loops, tests) only talk to games through this
//! trait and the dense action ids.

pub mod engine;

pub use engine::{GameResult, RulesEngine};
