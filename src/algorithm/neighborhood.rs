//! Orthogonal neighbor enumeration and category counting

use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::KindSet;

/// Most neighbors any cell can have (north, south, east, west)
pub const MAX_NEIGHBORS: u8 = 4;

// West, east, north, south
const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Neighbor category counts for one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborCounts {
    /// Neighbors whose kind is land-like
    pub land: u8,
    /// Neighbors whose kind is forest-like
    pub forest: u8,
}

/// In-bounds orthogonal neighbors of `(x, y)` on a `width × height` grid
///
/// Edge and corner cells simply have fewer neighbors; there is no wraparound.
pub fn orthogonal_neighbors(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    ORTHOGONAL_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then_some((nx, ny))
    })
}

/// Count the land-like and forest-like neighbors of `(x, y)`
pub fn count_neighbors(
    grid: &TileGrid,
    x: usize,
    y: usize,
    land_like: KindSet,
    forest_like: KindSet,
) -> NeighborCounts {
    orthogonal_neighbors(x, y, grid.width(), grid.height())
        .filter_map(|(nx, ny)| grid.get(nx, ny))
        .fold(NeighborCounts::default(), |mut counts, kind| {
            if land_like.contains(kind) {
                counts.land += 1;
            }
            if forest_like.contains(kind) {
                counts.forest += 1;
            }
            counts
        })
}
