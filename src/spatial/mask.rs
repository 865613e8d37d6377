//! Paint masks: caller-fixed seed tiles over the output grid

use bitvec::vec::BitVec;

use crate::io::configuration::UNSET_PAINT_CODE;
use crate::io::error::{EvolveError, Result, ShapeAxis};
use crate::spatial::tiles::{KindSet, TileKind};

/// Grid of optional tile kinds; `Some` cells are pinned, `None` cells are randomized
///
/// A mask is deliberately allowed to be ragged so that malformed caller input
/// can be represented and rejected by [`PaintMask::validate_shape`] instead of
/// being silently reshaped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaintMask {
    rows: Vec<Vec<Option<TileKind>>>,
}

impl PaintMask {
    /// Wrap nested rows as a mask
    pub const fn new(rows: Vec<Vec<Option<TileKind>>>) -> Self {
        Self { rows }
    }

    /// Mask of the given shape with every cell unset
    pub fn unset(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![None; width]; height],
        }
    }

    /// Decode wire codes where `-1` marks an unset cell
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidTileCode`] for any code that is neither
    /// the unset sentinel nor a known tile code.
    pub fn from_codes(codes: &[Vec<i32>]) -> Result<Self> {
        let rows = codes
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, &code)| decode_cell(code, x, y))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    /// Encode the mask as wire codes, using `-1` for unset cells
    pub fn to_codes(&self) -> Vec<Vec<i32>> {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(UNSET_PAINT_CODE, |kind| i32::from(kind.code())))
                    .collect()
            })
            .collect()
    }

    /// Borrow the nested rows
    pub fn rows(&self) -> &[Vec<Option<TileKind>>] {
        &self.rows
    }

    /// Number of rows in the mask
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, 0 for a mask without rows
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Pinned kind at `(x, y)`, `None` when unset or outside the mask
    pub fn get(&self, x: usize, y: usize) -> Option<TileKind> {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Pin a single cell; returns `false` outside the mask
    pub fn paint(&mut self, x: usize, y: usize, kind: TileKind) -> bool {
        self.rows
            .get_mut(y)
            .and_then(|row| row.get_mut(x))
            .map(|cell| *cell = Some(kind))
            .is_some()
    }

    /// Pin a `size × size` square whose top-left corner is `(x, y)`
    ///
    /// The brush is clipped at the mask border. Returns the number of cells painted.
    pub fn paint_brush(&mut self, x: usize, y: usize, size: usize, kind: TileKind) -> usize {
        let mut painted = 0;
        for row in y..y.saturating_add(size) {
            for col in x..x.saturating_add(size) {
                if self.paint(col, row, kind) {
                    painted += 1;
                }
            }
        }
        painted
    }

    /// Clear a pinned cell back to unset; returns `false` outside the mask
    pub fn erase(&mut self, x: usize, y: usize) -> bool {
        self.rows
            .get_mut(y)
            .and_then(|row| row.get_mut(x))
            .map(|cell| *cell = None)
            .is_some()
    }

    /// Number of pinned cells
    pub fn pinned_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Row-major bitmap of pinned cells
    pub fn pinned_bits(&self) -> BitVec {
        self.rows
            .iter()
            .flatten()
            .map(Option::is_some)
            .collect()
    }

    /// Check that the mask is exactly `height` rows of `width` cells
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::ShapeMismatch`] naming the first disagreeing axis.
    pub fn validate_shape(&self, width: usize, height: usize) -> Result<()> {
        if self.rows.len() != height {
            return Err(EvolveError::ShapeMismatch {
                axis: ShapeAxis::Height,
                expected: height,
                actual: self.rows.len(),
            });
        }

        for (row, cells) in self.rows.iter().enumerate() {
            if cells.len() != width {
                return Err(EvolveError::ShapeMismatch {
                    axis: ShapeAxis::Width { row },
                    expected: width,
                    actual: cells.len(),
                });
            }
        }

        Ok(())
    }

    /// Check that every pinned kind belongs to `allowed`
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::UnsupportedKind`] for the first pinned cell
    /// (row-major) whose kind is outside `allowed`.
    pub fn validate_kinds(&self, allowed: KindSet) -> Result<()> {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = *cell {
                    if !allowed.contains(kind) {
                        return Err(EvolveError::UnsupportedKind { kind, x, y });
                    }
                }
            }
        }
        Ok(())
    }
}

fn decode_cell(code: i32, x: usize, y: usize) -> Result<Option<TileKind>> {
    if code == UNSET_PAINT_CODE {
        return Ok(None);
    }
    TileKind::from_code(code)
        .map(Some)
        .ok_or(EvolveError::InvalidTileCode { code, x, y })
}
