//! Fixed-size terrain grid backed by a row-major `ndarray` matrix
//!
//! Cells are addressed as `(x, y)` in the public API and stored as
//! `[row, col] = [y, x]`. A grid never changes shape after construction;
//! evolution builds a fresh successor grid each round instead.

use ndarray::Array2;

use crate::spatial::tiles::TileKind;

/// Rectangular grid of terrain tiles with `height` rows of `width` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<TileKind>,
}

impl TileGrid {
    /// Create a grid where every cell holds `kind`
    pub fn filled(width: usize, height: usize, kind: TileKind) -> Self {
        Self {
            cells: Array2::from_elem((height, width), kind),
        }
    }

    /// Create a grid by evaluating `cell(x, y)` for every position
    ///
    /// Cells are visited strictly row by row, left to right, so callers that
    /// draw random numbers inside `cell` get a reproducible draw order.
    pub fn from_fn(
        width: usize,
        height: usize,
        mut cell: impl FnMut(usize, usize) -> TileKind,
    ) -> Self {
        let mut cells = Array2::from_elem((height, width), TileKind::Land);
        for ((y, x), slot) in cells.indexed_iter_mut() {
            *slot = cell(x, y);
        }
        Self { cells }
    }

    /// Build a grid from nested rows, returning `None` for ragged input
    pub fn from_rows(rows: &[Vec<TileKind>]) -> Option<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self::from_fn(width, rows.len(), |x, y| {
            rows.get(y)
                .and_then(|row| row.get(x))
                .copied()
                .unwrap_or(TileKind::Land)
        }))
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<TileKind> {
        self.cells.get([y, x]).copied()
    }

    /// Overwrite the tile at `(x, y)`; returns `false` outside the grid
    pub fn set(&mut self, x: usize, y: usize, kind: TileKind) -> bool {
        self.cells.get_mut([y, x]).map(|slot| *slot = kind).is_some()
    }

    /// Iterate over `(x, y, kind)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, TileKind)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &kind)| (x, y, kind))
    }

    /// Copy the grid into nested rows
    pub fn to_rows(&self) -> Vec<Vec<TileKind>> {
        self.cells.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Copy the grid into nested rows of wire codes
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|kind| kind.code()).collect())
            .collect()
    }

    /// Count the cells of each kind, indexed by tile code
    pub fn census(&self) -> [usize; TileKind::COUNT] {
        let mut counts = [0; TileKind::COUNT];
        for kind in &self.cells {
            if let Some(count) = counts.get_mut(usize::from(kind.code())) {
                *count += 1;
            }
        }
        counts
    }
}
