//! Card catalog: the three tiers of cards a game is built from.
//!
//! The catalog is supplied fully constructed by the host; this module only
//! validates it. Parsing card data from files is the host's job.

use serde::{Deserialize, Serialize};

use super::card::{Card, MAX_CARD_POINTS};
use crate::error::ConstructionError;

/// Number of card tiers.
pub const NUM_TIERS: usize = 3;

/// Validated card tiers in deck order.
///
/// Within a tier, the last card is the first one exposed on the board.
///
/// ## Example
///
/// ```
/// use rust_splendor::cards::{Card, CardCatalog};
/// use rust_splendor::core::Color;
///
/// let rows = (1..=3u8).flat_map(|level| {
///     (0..5).map(move |_| (level, Card::new(level - 1, Color::Green, [1, 1, 0, 0, 0])))
/// });
/// let catalog = CardCatalog::from_rows(rows).unwrap();
///
/// assert_eq!(catalog.tier(2).len(), 5);
/// assert_eq!(catalog.len(), 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCatalog {
    tiers: [Vec<Card>; NUM_TIERS],
}

impl CardCatalog {
    /// Build a catalog from three tiers.
    ///
    /// Fails if any card is worth more than the maximum point value.
    pub fn new(tiers: [Vec<Card>; NUM_TIERS]) -> Result<Self, ConstructionError> {
        for (tier, cards) in tiers.iter().enumerate() {
            if let Some((index, card)) = cards
                .iter()
                .enumerate()
                .find(|(_, c)| c.points > MAX_CARD_POINTS)
            {
                return Err(ConstructionError::PointsOutOfRange {
                    tier,
                    index,
                    points: card.points,
                });
            }
        }
        Ok(Self { tiers })
    }

    /// Build a catalog from `(level, card)` rows, where `level` is 1..=3.
    ///
    /// Row order within a level is kept as deck order.
    pub fn from_rows(
        rows: impl IntoIterator<Item = (u8, Card)>,
    ) -> Result<Self, ConstructionError> {
        let mut tiers: [Vec<Card>; NUM_TIERS] = Default::default();
        for (level, card) in rows {
            let slot = usize::from(level)
                .checked_sub(1)
                .and_then(|tier| tiers.get_mut(tier))
                .ok_or(ConstructionError::InvalidLevel(level))?;
            slot.push(card);
        }
        Self::new(tiers)
    }

    /// Check every tier holds at least `min` cards.
    pub fn check_tier_sizes(&self, min: usize) -> Result<(), ConstructionError> {
        match self
            .tiers
            .iter()
            .enumerate()
            .find(|(_, cards)| cards.len() < min)
        {
            Some((tier, cards)) => Err(ConstructionError::TierTooSmall {
                tier,
                len: cards.len(),
                min,
            }),
            None => Ok(()),
        }
    }

    /// Cards of one tier (0-based).
    ///
    /// Panics if `tier` is not 0, 1 or 2.
    #[must_use]
    pub fn tier(&self, tier: usize) -> &[Card] {
        &self.tiers[tier]
    }

    /// All tiers.
    #[must_use]
    pub fn tiers(&self) -> &[Vec<Card>; NUM_TIERS] {
        &self.tiers
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    /// True if the catalog has no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
