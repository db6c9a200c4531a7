//! The shared board: three card tiers and the gem pool.
//!
//! ## Slot Addressing
//!
//! Within a tier of `n` cards, the last four entries are visible. Slot
//! `k` in 1..=4 is index `n - k`, so slot 1 is the most recently exposed
//! card. Slot 0 is index `n - 5`, the face-down top of the deck, which can
//! only be reserved. Removing a card shifts the tier so the next card is
//! exposed without leaving a gap.

pub mod tiers;

pub use tiers::Board;
