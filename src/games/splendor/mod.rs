//! Two-player gem trading game.
//!
//! Players take gems from a shared pool, reserve cards, and buy cards whose
//! bonuses permanently discount later purchases. The first player to reach
//! the winning score ends the game.
//!
//! ## Turn Structure
//!
//! Most actions end the turn. Two open a sub-turn for the same player:
//! a purchase made while holding gold enters the spending phase, and a take
//! that leaves the player over the gem limit enters the return phase.
//!
//! ## Modules
//!
//! - `legal`: Legal-action generation per phase
//! - `apply`: The phase state machine
//! - `terminal`: End-of-game detection and rewards
//! - `game`: `Splendor` (the `RulesEngine` impl) and its builder

mod apply;
mod game;
mod legal;
mod terminal;

pub use game::{Splendor, SplendorBuilder};
