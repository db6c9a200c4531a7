//! Board tiers and pool.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardCatalog, NUM_TIERS};
use crate::core::action::{SLOTS_PER_TIER, VISIBLE_SLOTS};
use crate::core::config::GameConfig;
use crate::core::gems::{Gem, GemVector};
use crate::core::rng::GameRng;

/// Card tiers plus the shared gem pool.
///
/// Tiers are persistent vectors, so cloning a board for search is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tiers: [Vector<Card>; NUM_TIERS],
    pool: GemVector,
}

impl Board {
    /// Deal a board from a catalog.
    ///
    /// When `config.shuffle` is set each tier is shuffled once, from its own
    /// stream of a generator seeded with `config.seed`.
    #[must_use]
    pub fn new(catalog: &CardCatalog, config: &GameConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let tiers = std::array::from_fn(|tier| {
            let mut cards = catalog.tier(tier).to_vec();
            if config.shuffle {
                rng.for_context(&format!("tier-{tier}")).shuffle(&mut cards);
            }
            cards.into_iter().collect::<Vector<Card>>()
        });

        let mut pool = GemVector::from_colors([config.starting_colors; 5]);
        pool[Gem::Gold] = config.starting_gold;

        Self { tiers, pool }
    }

    /// The shared gem pool.
    #[must_use]
    pub fn pool(&self) -> &GemVector {
        &self.pool
    }

    /// All cards left in a tier, deck order.
    #[must_use]
    pub fn tier(&self, tier: usize) -> &Vector<Card> {
        &self.tiers[tier]
    }

    fn slot_index(&self, tier: usize, slot: u8) -> Option<usize> {
        let len = self.tiers.get(tier)?.len();
        match slot {
            0 => len.checked_sub(usize::from(SLOTS_PER_TIER)),
            1..=VISIBLE_SLOTS => len.checked_sub(usize::from(slot)),
            _ => None,
        }
    }

    /// The card at `(tier, slot)`, if that slot is occupied.
    #[must_use]
    pub fn card_at(&self, tier: usize, slot: u8) -> Option<&Card> {
        let index = self.slot_index(tier, slot)?;
        self.tiers[tier].get(index)
    }

    /// Visible cards of a tier as `(slot, card)` pairs, slot 1 first.
    pub fn visible(&self, tier: usize) -> impl Iterator<Item = (u8, &Card)> + '_ {
        (1..=VISIBLE_SLOTS).filter_map(move |slot| self.card_at(tier, slot).map(|c| (slot, c)))
    }

    /// Remove and return the card at `(tier, slot)`.
    ///
    /// Panics if the slot is empty; the legal-action generator never offers
    /// an empty slot.
    pub fn pop_card(&mut self, tier: usize, slot: u8) -> Card {
        match self.slot_index(tier, slot) {
            Some(index) => self.tiers[tier].remove(index),
            None => panic!(
                "card at tier {tier} slot {slot} is not on the board ({} cards)",
                self.tiers.get(tier).map_or(0, Vector::len)
            ),
        }
    }

    /// True if every tier still holds at least `min` cards.
    #[must_use]
    pub fn enough_cards(&self, min: usize) -> bool {
        self.tiers.iter().all(|tier| tier.len() >= min)
    }

    /// Put gems into the pool and return the new pool.
    pub fn deposit(&mut self, gems: &GemVector) -> GemVector {
        self.pool.add(gems)
    }

    /// Take gems out of the pool and return the new pool.
    ///
    /// Panics if the pool does not hold them.
    pub fn withdraw(&mut self, gems: &GemVector) -> GemVector {
        self.pool.sub(gems)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "pool: {}", self.pool)?;
        for tier in (0..NUM_TIERS).rev() {
            write!(f, "tier {} ({:2}):", tier + 1, self.tiers[tier].len())?;
            for (_, card) in self.visible(tier) {
                write!(f, "  {card}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
