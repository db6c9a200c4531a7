//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the two players.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! A player's tableau: gem holdings, purchased cards (the source of
//! permanent bonuses and points) and up to three reserved cards.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::gems::{Color, GemVector};
use crate::cards::Card;

/// Number of players in a game.
pub const NUM_PLAYERS: usize = 2;

/// Maximum number of reserved cards a player may hold.
pub const MAX_RESERVED: usize = 3;

/// Player identifier: seat 0 or seat 1.
///
/// Seat 0 moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// Panics if `id` is not a valid seat.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < NUM_PLAYERS, "Player id out of range");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both player IDs in seat order.
    ///
    /// ```
    /// use rust_splendor::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..NUM_PLAYERS as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_splendor::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);
/// score[PlayerId::new(1)] += 10;
///
/// assert_eq!(score[PlayerId::new(0)], 0);
/// assert_eq!(score[PlayerId::new(1)], 11);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; NUM_PLAYERS],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId(0)), factory(PlayerId(1))],
        }
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player's holdings and cards.
///
/// `bonuses` is derived from `purchased` and cached: one permanent gem of
/// discount per purchased card, in that card's bonus color.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    holdings: GemVector,
    purchased: Vector<Card>,
    reserved: SmallVec<[Card; MAX_RESERVED]>,
    bonuses: GemVector,
    passes: u32,
}

impl Player {
    /// Create a player with no gems and no cards.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gems currently held (gold included).
    #[must_use]
    pub fn holdings(&self) -> &GemVector {
        &self.holdings
    }

    /// Total gems held, gold included.
    #[must_use]
    pub fn gem_total(&self) -> u32 {
        self.holdings.sum()
    }

    /// Purchased cards in purchase order.
    #[must_use]
    pub fn purchased(&self) -> &Vector<Card> {
        &self.purchased
    }

    /// Reserved cards in reservation order.
    #[must_use]
    pub fn reserved(&self) -> &[Card] {
        &self.reserved
    }

    /// Count of purchased cards per bonus color.
    #[must_use]
    pub fn resources_by_color(&self) -> &GemVector {
        &self.bonuses
    }

    /// Sum of purchased card points.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.purchased.iter().map(|c| u32::from(c.points)).sum()
    }

    /// Number of turns this player had to pass for lack of a legal action.
    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    /// True iff reservation capacity is exhausted.
    #[must_use]
    pub fn reserve_limit(&self) -> bool {
        self.reserved.len() >= MAX_RESERVED
    }

    /// Gems still owed for `card` after bonuses and the gold substitutions
    /// recorded in `paid`. Gold slot is always zero.
    #[must_use]
    pub fn due(&self, card: &Card, paid: &GemVector) -> GemVector {
        card.cost
            .saturating_sub(&self.bonuses)
            .saturating_sub(paid)
            .colors_only()
    }

    /// Part of `due` the player's colored gems cannot cover.
    #[must_use]
    pub fn shortfall(&self, card: &Card, paid: &GemVector) -> GemVector {
        self.due(card, paid)
            .saturating_sub(&self.holdings)
            .colors_only()
    }

    /// Whether the player can pay for `card`.
    ///
    /// With `using_gold`, gold may cover any shortfall one-for-one.
    /// Without it, bonuses and colored gems alone must cover the cost.
    #[must_use]
    pub fn can_purchase(&self, card: &Card, using_gold: bool) -> bool {
        let shortfall = self.shortfall(card, &GemVector::ZERO).sum();
        if using_gold {
            shortfall <= u32::from(self.holdings.gold())
        } else {
            shortfall == 0
        }
    }

    /// Add gems to holdings, returning the new holdings.
    pub fn deposit(&mut self, gems: &GemVector) -> GemVector {
        self.holdings.add(gems)
    }

    /// Remove gems from holdings, returning the new holdings.
    ///
    /// Panics if the player does not hold them.
    pub fn withdraw(&mut self, gems: &GemVector) -> GemVector {
        self.holdings.sub(gems)
    }

    /// Add a card to the purchased list.
    pub fn add_purchased(&mut self, card: Card) {
        self.bonuses[card.bonus] += 1;
        self.purchased.push_back(card);
    }

    /// Add a card to the reserved list.
    ///
    /// Panics if three cards are already reserved.
    pub fn reserve(&mut self, card: Card) {
        assert!(
            !self.reserve_limit(),
            "reserved list overflow: already holding {MAX_RESERVED} cards"
        );
        self.reserved.push(card);
    }

    /// Remove and return the reserved card at `index`.
    ///
    /// Panics if there is no such card.
    pub fn take_reserved(&mut self, index: usize) -> Card {
        assert!(
            index < self.reserved.len(),
            "no reserved card at index {index} (holding {})",
            self.reserved.len()
        );
        self.reserved.remove(index)
    }

    /// Record a skipped turn.
    pub fn record_pass(&mut self) {
        self.passes += 1;
    }

    /// Number of purchased cards with the given bonus color.
    #[must_use]
    pub fn bonus(&self, color: Color) -> u8 {
        self.bonuses[color]
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  points:    {}", self.points())?;
        writeln!(f, "  gems:      {} (total {})", self.holdings, self.gem_total())?;
        writeln!(f, "  bonuses:   {}", self.bonuses.colors_only())?;
        write!(f, "  reserved:  ")?;
        if self.reserved.is_empty() {
            f.write_str("-")?;
        }
        for (i, card) in self.reserved.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{card}")?;
        }
        writeln!(f)
    }
}
