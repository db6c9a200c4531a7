//! The fixed action catalog.
//!
//! Every move in the game maps to one dense id in `0..NUM_ACTIONS`. Ids are
//! grouped by category in a fixed order, so a host can size a policy head
//! once and keep it for every game:
//!
//! | Category | Ids |
//! |---|---|
//! | Reserve | 0..15 (`tier * 5 + slot`, slot 0 is the face-down deck top) |
//! | Purchase | 15..27 (visible slots 1..=4) |
//! | PurchaseReserve | 27..30 |
//! | TakeThree | 30..40 |
//! | TakeTwo | 40..45 |
//! | Return | 45..51 |
//! | Spending | 51..57 (`SpendGold` per color, then `EndSpending`) |
//!
//! `Action` is the decoded form the rules dispatch on.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::gems::{Color, Gem, COLOR_KINDS};
use super::player::{PlayerId, MAX_RESERVED};
use crate::cards::NUM_TIERS;

/// Number of distinct action ids.
pub const NUM_ACTIONS: usize = 57;

/// Slots addressable by a reserve: the face-down slot 0 plus four visible.
pub const SLOTS_PER_TIER: u8 = 5;

/// Visible slots per tier (1..=4).
pub const VISIBLE_SLOTS: u8 = 4;

/// Dense action identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActionId(pub u16);

impl ActionId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Action({})", self.0)
    }
}

/// A decoded move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Reserve a card; `slot` 0 is the face-down top of the deck.
    Reserve { tier: u8, slot: u8 },
    /// Buy a visible card, `slot` in 1..=4.
    Purchase { tier: u8, slot: u8 },
    /// Buy one of the player's own reserved cards.
    PurchaseReserved { index: u8 },
    /// Take one gem of each of three different colors.
    TakeThree([Color; 3]),
    /// Take two gems of one color.
    TakeTwo(Color),
    /// Give one gem back to the pool.
    Return(Gem),
    /// Pay one gold in place of a gem of this color.
    SpendGold(Color),
    /// Finish paying; the rest of the cost is paid in colored gems.
    EndSpending,
}

impl Action {
    /// The category this action belongs to.
    #[must_use]
    pub fn category(&self) -> ActionCategory {
        match self {
            Action::Reserve { .. } => ActionCategory::Reserve,
            Action::Purchase { .. } => ActionCategory::Purchase,
            Action::PurchaseReserved { .. } => ActionCategory::PurchaseReserve,
            Action::TakeThree(_) => ActionCategory::TakeThree,
            Action::TakeTwo(_) => ActionCategory::TakeTwo,
            Action::Return(_) => ActionCategory::Return,
            Action::SpendGold(_) | Action::EndSpending => ActionCategory::Spending,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Reserve { tier, slot: 0 } => write!(f, "reserve tier {} deck", tier + 1),
            Action::Reserve { tier, slot } => write!(f, "reserve tier {} slot {}", tier + 1, slot),
            Action::Purchase { tier, slot } => write!(f, "purchase tier {} slot {}", tier + 1, slot),
            Action::PurchaseReserved { index } => write!(f, "purchase reserved {}", index),
            Action::TakeThree([a, b, c]) => write!(f, "take {} {} {}", a, b, c),
            Action::TakeTwo(color) => write!(f, "take 2 {}", color),
            Action::Return(gem) => write!(f, "return {}", gem),
            Action::SpendGold(color) => write!(f, "spend gold as {}", color),
            Action::EndSpending => f.write_str("end spending"),
        }
    }
}

/// Action categories in id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCategory {
    Reserve,
    Purchase,
    PurchaseReserve,
    TakeThree,
    TakeTwo,
    Return,
    Spending,
}

impl ActionCategory {
    pub const ALL: [ActionCategory; 7] = [
        ActionCategory::Reserve,
        ActionCategory::Purchase,
        ActionCategory::PurchaseReserve,
        ActionCategory::TakeThree,
        ActionCategory::TakeTwo,
        ActionCategory::Return,
        ActionCategory::Spending,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Bidirectional map between ids and decoded actions.
///
/// ```
/// use rust_splendor::core::{Action, ActionCatalog, ActionCategory, ActionId, Color};
///
/// let catalog = ActionCatalog::new();
/// assert_eq!(catalog.len(), 57);
/// assert_eq!(catalog.action(ActionId(7)), Some(&Action::Reserve { tier: 1, slot: 2 }));
/// assert_eq!(catalog.id_of(&Action::TakeTwo(Color::Red)), Some(ActionId(43)));
/// assert_eq!(catalog.ids(ActionCategory::Spending).len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ActionCatalog {
    entries: Vec<Action>,
    by_action: FxHashMap<Action, ActionId>,
    by_category: [Vec<ActionId>; 7],
}

impl ActionCatalog {
    /// Build the catalog in canonical id order.
    #[must_use]
    pub fn new() -> Self {
        let mut entries = Vec::with_capacity(NUM_ACTIONS);

        for tier in 0..NUM_TIERS as u8 {
            for slot in 0..SLOTS_PER_TIER {
                entries.push(Action::Reserve { tier, slot });
            }
        }
        for tier in 0..NUM_TIERS as u8 {
            for slot in 1..=VISIBLE_SLOTS {
                entries.push(Action::Purchase { tier, slot });
            }
        }
        for index in 0..MAX_RESERVED as u8 {
            entries.push(Action::PurchaseReserved { index });
        }
        for i in 0..COLOR_KINDS {
            for j in i + 1..COLOR_KINDS {
                for k in j + 1..COLOR_KINDS {
                    entries.push(Action::TakeThree([Color::ALL[i], Color::ALL[j], Color::ALL[k]]));
                }
            }
        }
        entries.extend(Color::ALL.iter().map(|&c| Action::TakeTwo(c)));
        entries.extend(Gem::ALL.iter().map(|&g| Action::Return(g)));
        entries.extend(Color::ALL.iter().map(|&c| Action::SpendGold(c)));
        entries.push(Action::EndSpending);

        debug_assert_eq!(entries.len(), NUM_ACTIONS);

        let mut by_action = FxHashMap::default();
        let mut by_category: [Vec<ActionId>; 7] = Default::default();
        for (i, action) in entries.iter().enumerate() {
            let id = ActionId(i as u16);
            by_action.insert(*action, id);
            by_category[action.category().index()].push(id);
        }

        Self {
            entries,
            by_action,
            by_category,
        }
    }

    /// Decode an id.
    #[must_use]
    pub fn action(&self, id: ActionId) -> Option<&Action> {
        self.entries.get(id.index())
    }

    /// Category of an id.
    #[must_use]
    pub fn category(&self, id: ActionId) -> Option<ActionCategory> {
        self.action(id).map(Action::category)
    }

    /// All ids of a category, ascending.
    #[must_use]
    pub fn ids(&self, category: ActionCategory) -> &[ActionId] {
        &self.by_category[category.index()]
    }

    /// Encode an action.
    #[must_use]
    pub fn id_of(&self, action: &Action) -> Option<ActionId> {
        self.by_action.get(action).copied()
    }

    /// Number of ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(id, action)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ActionId, &Action)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, a)| (ActionId(i as u16), a))
    }
}

impl Default for ActionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// An applied action with metadata for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    pub id: ActionId,

    pub action: Action,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Position within the turn; sub-turn actions share the turn number.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, id: ActionId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            id,
            action,
            turn,
            sequence,
        }
    }
}
