//! Terrain tile kinds, compact kind sets and the variant catalogue
//!
//! Tile codes are assigned by declaration order and are part of the wire
//! format: clients persist and compare them, so they must never be reordered.

use crate::io::configuration::{DEFAULT_ITERATIONS, STANDARD_ITERATIONS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Terrain category of a single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    /// Bare land, code 0
    Land,
    /// Shallow water bordering land, code 1
    CoastalWater,
    /// Open water, code 2
    Water,
    /// Grassland, code 3
    Grass,
    /// Forest, code 4 (extended variant only)
    Forest,
}

impl TileKind {
    /// Every kind in code order
    pub const ALL: [Self; 5] = [
        Self::Land,
        Self::CoastalWater,
        Self::Water,
        Self::Grass,
        Self::Forest,
    ];

    /// Number of distinct kinds across all variants
    pub const COUNT: usize = Self::ALL.len();

    /// Stable wire code of this kind
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a wire code, rejecting anything outside `0..COUNT`
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Land),
            1 => Some(Self::CoastalWater),
            2 => Some(Self::Water),
            3 => Some(Self::Grass),
            4 => Some(Self::Forest),
            _ => None,
        }
    }

    /// Human readable name used in logs and error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::CoastalWater => "coastal water",
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Forest => "forest",
        }
    }

    const fn bit(self) -> u8 {
        1 << self.code()
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Small set of tile kinds packed into a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KindSet(u8);

impl KindSet {
    /// Set containing no kinds
    pub const EMPTY: Self = Self(0);

    /// Build a set from a list of kinds (duplicates are ignored)
    pub fn of(kinds: &[TileKind]) -> Self {
        kinds.iter().copied().collect()
    }

    /// Return a copy of the set with `kind` added
    pub const fn with(self, kind: TileKind) -> Self {
        Self(self.0 | kind.bit())
    }

    /// Check membership
    pub const fn contains(self, kind: TileKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Number of kinds in the set
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check whether the set has no members
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over members in code order
    pub fn iter(self) -> impl Iterator<Item = TileKind> {
        TileKind::ALL
            .into_iter()
            .filter(move |&kind| self.contains(kind))
    }

    /// The `index`-th member in code order
    pub fn nth(self, index: usize) -> Option<TileKind> {
        self.iter().nth(index)
    }
}

impl FromIterator<TileKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = TileKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::EMPTY, Self::with)
    }
}

/// Named rule table and kind set selected by the caller
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Four kinds with deterministic thresholds
    #[default]
    #[value(name = "standard4")]
    Standard4,
    /// Five kinds including forest, with probabilistic transitions
    #[value(name = "extended5")]
    Extended5,
}

impl Variant {
    /// Kinds a cell may hold under this variant
    pub fn kinds(self) -> KindSet {
        match self {
            Self::Standard4 => KindSet::of(&[
                TileKind::Land,
                TileKind::CoastalWater,
                TileKind::Water,
                TileKind::Grass,
            ]),
            Self::Extended5 => KindSet::of(&TileKind::ALL),
        }
    }

    /// Round count used when the caller does not choose one
    pub const fn default_iterations(self) -> usize {
        match self {
            Self::Standard4 => STANDARD_ITERATIONS,
            Self::Extended5 => DEFAULT_ITERATIONS,
        }
    }

    /// Rounds actually applied when the caller asks for `requested`
    ///
    /// The standard variant always runs [`STANDARD_ITERATIONS`] rounds; the
    /// extended variant honours the request and falls back to its default.
    pub const fn rounds_for(self, requested: Option<usize>) -> usize {
        match (self, requested) {
            (Self::Extended5, Some(rounds)) => rounds,
            _ => self.default_iterations(),
        }
    }

    /// Whether a caller-supplied round count has any effect
    pub const fn honours_iterations(self) -> bool {
        matches!(self, Self::Extended5)
    }

    /// Name as accepted on the command line and in requests
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard4 => "standard4",
            Self::Extended5 => "extended5",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
