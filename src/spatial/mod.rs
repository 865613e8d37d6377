//! Spatial data structures for terrain generation
//!
//! This module contains:
//! - Tile kinds, kind sets and the variant catalogue
//! - The fixed-size terrain grid
//! - Paint masks that pin seed tiles

/// Fixed-size terrain grid storage
pub mod grid;
/// Caller-supplied seed tiles
pub mod mask;
/// Tile kinds and variant definitions
pub mod tiles;

pub use grid::TileGrid;
pub use mask::PaintMask;
pub use tiles::{KindSet, TileKind, Variant};
