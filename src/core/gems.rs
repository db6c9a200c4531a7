//! Gem kinds and gem counts.
//!
//! ## Gem / Color
//!
//! There are five colored gems and one wildcard, gold. `Color` names only
//! the five colored kinds (card bonuses, "take" actions, gold substitution);
//! `Gem` names all six (holdings, the pool, returns).
//!
//! ## GemVector
//!
//! A six-slot count used for the shared pool, player holdings and card
//! costs. Counts are never negative at rest: removing more gems than are
//! held panics, because it means the rules diverged from the legal-action
//! generator.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of gem kinds including gold.
pub const GEM_KINDS: usize = 6;

/// Number of colored (non-wildcard) gem kinds.
pub const COLOR_KINDS: usize = 5;

/// One of the five colored gems.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    White,
    Blue,
    Green,
    Red,
    Black,
}

impl Color {
    /// All colors in slot order.
    pub const ALL: [Color; COLOR_KINDS] = [
        Color::White,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Black,
    ];

    /// Slot index of this color (0..5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-letter tag used in debug output.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Blue => 'u',
            Color::Green => 'g',
            Color::Red => 'r',
            Color::Black => 'k',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Black => "black",
        };
        f.write_str(name)
    }
}

/// Any gem kind, including the gold wildcard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gem {
    White,
    Blue,
    Green,
    Red,
    Black,
    Gold,
}

impl Gem {
    /// All gems in slot order, gold last.
    pub const ALL: [Gem; GEM_KINDS] = [
        Gem::White,
        Gem::Blue,
        Gem::Green,
        Gem::Red,
        Gem::Black,
        Gem::Gold,
    ];

    /// Slot index of this gem (0..6).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The color of this gem, or `None` for gold.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Gem::White => Some(Color::White),
            Gem::Blue => Some(Color::Blue),
            Gem::Green => Some(Color::Green),
            Gem::Red => Some(Color::Red),
            Gem::Black => Some(Color::Black),
            Gem::Gold => None,
        }
    }
}

impl From<Color> for Gem {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Gem::White,
            Color::Blue => Gem::Blue,
            Color::Green => Gem::Green,
            Color::Red => Gem::Red,
            Color::Black => Gem::Black,
        }
    }
}

impl std::fmt::Display for Gem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.color() {
            Some(color) => color.fmt(f),
            None => f.write_str("gold"),
        }
    }
}

/// Counts for each of the six gem kinds.
///
/// ```
/// use rust_splendor::core::{Color, Gem, GemVector};
///
/// let mut pool = GemVector::new([4, 4, 4, 4, 4, 5]);
/// let taken = GemVector::single(Gem::Red, 2);
///
/// assert!(pool.has_at_least(&taken));
/// pool.sub(&taken);
/// assert_eq!(pool[Color::Red], 2);
/// assert_eq!(pool.sum(), 23);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GemVector([u8; GEM_KINDS]);

impl GemVector {
    /// All-zero vector.
    pub const ZERO: GemVector = GemVector([0; GEM_KINDS]);

    /// Create from six raw counts (white, blue, green, red, black, gold).
    #[must_use]
    pub const fn new(counts: [u8; GEM_KINDS]) -> Self {
        Self(counts)
    }

    /// Create from five color counts; gold is zero.
    #[must_use]
    pub const fn from_colors(colors: [u8; COLOR_KINDS]) -> Self {
        Self([colors[0], colors[1], colors[2], colors[3], colors[4], 0])
    }

    /// A vector holding `count` of a single gem.
    #[must_use]
    pub fn single(gem: impl Into<Gem>, count: u8) -> Self {
        let mut v = Self::ZERO;
        v[gem.into()] = count;
        v
    }

    /// Raw counts.
    #[must_use]
    pub const fn counts(&self) -> [u8; GEM_KINDS] {
        self.0
    }

    /// Gold count.
    #[must_use]
    pub const fn gold(&self) -> u8 {
        self.0[GEM_KINDS - 1]
    }

    /// Total number of gems, gold included.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|&n| u32::from(n)).sum()
    }

    /// True if every slot is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&n| n == 0)
    }

    /// Elementwise `self >= query`.
    #[must_use]
    pub fn has_at_least(&self, query: &GemVector) -> bool {
        self.0.iter().zip(query.0.iter()).all(|(have, want)| have >= want)
    }

    /// Add `other` in place and return the new value.
    pub fn add(&mut self, other: &GemVector) -> GemVector {
        for (slot, n) in self.0.iter_mut().zip(other.0.iter()) {
            match slot.checked_add(*n) {
                Some(total) => *slot = total,
                None => panic!("gem count overflow adding {other:?}"),
            }
        }
        *self
    }

    /// Subtract `other` in place and return the new value.
    ///
    /// Panics if any slot would go negative; the vector is left untouched
    /// in that case.
    pub fn sub(&mut self, other: &GemVector) -> GemVector {
        match self.checked_sub(other) {
            Some(next) => {
                *self = next;
                next
            }
            None => panic!("gem count went negative: {self:?} - {other:?}"),
        }
    }

    /// Elementwise subtraction, `None` if any slot would go negative.
    #[must_use]
    pub fn checked_sub(&self, other: &GemVector) -> Option<GemVector> {
        let mut out = [0u8; GEM_KINDS];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[i].checked_sub(other.0[i])?;
        }
        Some(GemVector(out))
    }

    /// Elementwise `max(0, self - other)`.
    #[must_use]
    pub fn saturating_sub(&self, other: &GemVector) -> GemVector {
        let mut out = [0u8; GEM_KINDS];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[i].saturating_sub(other.0[i]);
        }
        GemVector(out)
    }

    /// The five color slots, gold dropped.
    #[must_use]
    pub fn colors_only(&self) -> GemVector {
        let mut out = *self;
        out.0[GEM_KINDS - 1] = 0;
        out
    }

    /// Iterate `(gem, count)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Gem, u8)> + '_ {
        Gem::ALL.iter().map(move |&gem| (gem, self[gem]))
    }
}

impl Index<Gem> for GemVector {
    type Output = u8;

    fn index(&self, gem: Gem) -> &Self::Output {
        &self.0[gem.index()]
    }
}

impl IndexMut<Gem> for GemVector {
    fn index_mut(&mut self, gem: Gem) -> &mut Self::Output {
        &mut self.0[gem.index()]
    }
}

impl Index<Color> for GemVector {
    type Output = u8;

    fn index(&self, color: Color) -> &Self::Output {
        &self.0[color.index()]
    }
}

impl IndexMut<Color> for GemVector {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.0[color.index()]
    }
}

impl std::fmt::Display for GemVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, color) in Color::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", color.letter(), self[*color])?;
        }
        write!(f, " y{}", self.gold())
    }
}
