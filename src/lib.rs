//! Stochastic cellular-automaton terrain generator
//!
//! A grid is seeded from a paint mask (fixed tiles) and uniform random draws,
//! then relaxed for a number of synchronous rounds in which every cell looks at
//! its orthogonal neighbors and may change kind according to a rule table.
//! Two rule tables ship with the crate: a deterministic four-kind table and a
//! probabilistic five-kind table that adds forest.

#![forbid(unsafe_code)]

/// Grid evolution, transition rules and injected randomness
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Tile kinds, grids and paint masks
pub mod spatial;

pub use algorithm::{GridEvolver, PinPolicy, RandomSource, RngSource, RuleSet, evolve};
pub use io::error::{EvolveError, Result};
pub use spatial::{PaintMask, TileGrid, TileKind, Variant};
