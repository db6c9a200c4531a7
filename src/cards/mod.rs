//! Cards and the card catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card value (points, bonus color, cost)
//! - `CardCatalog`: The three validated tiers a board is dealt from

pub mod card;
pub mod catalog;

pub use card::{Card, MAX_CARD_POINTS};
pub use catalog::{CardCatalog, NUM_TIERS};
