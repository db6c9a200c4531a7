//! Development cards.
//!
//! A card is an immutable value: a point value, the bonus color it grants
//! once purchased, and a cost in colored gems. Cards are `Copy`; two cards
//! with equal values are still distinct pieces because the engine moves
//! them between board, reserve and purchased lists rather than sharing them.

use serde::{Deserialize, Serialize};

use crate::core::gems::{Color, GemVector, COLOR_KINDS};

/// Highest point value a card may carry.
pub const MAX_CARD_POINTS: u8 = 5;

/// A development card.
///
/// ## Example
///
/// ```
/// use rust_splendor::cards::Card;
/// use rust_splendor::core::Color;
///
/// let card = Card::new(1, Color::Red, [0, 0, 4, 0, 0]);
/// assert_eq!(card.cost[Color::Green], 4);
/// assert_eq!(card.cost.gold(), 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Prestige points (0..=5).
    pub points: u8,

    /// Color of the permanent discount this card grants.
    pub bonus: Color,

    /// Cost in colored gems. The gold slot is always zero.
    pub cost: GemVector,
}

impl Card {
    /// Create a card from a five-slot color cost.
    #[must_use]
    pub const fn new(points: u8, bonus: Color, cost: [u8; COLOR_KINDS]) -> Self {
        Self {
            points,
            bonus,
            cost: GemVector::from_colors(cost),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{} [", self.points, self.bonus.letter())?;
        for (i, color) in Color::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", self.cost[*color])?;
        }
        f.write_str("]")
    }
}
