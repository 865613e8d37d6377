//! JSON request and response shapes of the generation service
//!
//! A request carries the grid shape, an optional paint mask of wire codes
//! (`-1` for unset cells), an optional round count and the variant. The
//! response is the bare grid of tile codes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithm::evolver::GridEvolver;
use crate::algorithm::random::RandomSource;
use crate::io::error::{EvolveError, Result, file_system_error};
use crate::spatial::grid::TileGrid;
use crate::spatial::mask::PaintMask;
use crate::spatial::tiles::Variant;

/// Generation request as received from clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolveRequest {
    /// Grid width in tiles
    pub width: usize,
    /// Grid height in tiles
    pub height: usize,
    /// Rows of tile codes, `-1` for unset; omitted means nothing is painted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paint_mask: Option<Vec<Vec<i32>>>,
    /// Rounds to apply; only honoured by the extended variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
    /// Rule table to use
    #[serde(default)]
    pub variant: Variant,
}

impl EvolveRequest {
    /// Parse a request from JSON text
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::Serialization`] if the text is not a valid request.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| EvolveError::Serialization {
            context: "request".to_string(),
            source: e,
        })
    }

    /// Read and parse a request file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read request", e))?;
        serde_json::from_str(&text).map_err(|e| EvolveError::Serialization {
            context: format!("request '{}'", path.display()),
            source: e,
        })
    }

    /// Decode the paint mask, substituting an unset mask when none was sent
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::InvalidTileCode`] for unknown codes.
    pub fn paint_mask(&self) -> Result<PaintMask> {
        self.paint_mask.as_deref().map_or_else(
            || Ok(PaintMask::unset(self.width, self.height)),
            PaintMask::from_codes,
        )
    }

    /// Rounds that will actually be applied
    ///
    /// The standard variant always runs its fixed round count; the extended
    /// variant honours the requested count.
    pub const fn effective_iterations(&self) -> usize {
        self.variant.rounds_for(self.iterations)
    }

    /// Run the request against the given random source
    ///
    /// # Errors
    ///
    /// Returns the decoding and validation errors of the paint mask.
    pub fn execute<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<EvolveResponse> {
        let mask = self.paint_mask()?;
        let grid = GridEvolver::for_variant(self.variant).evolve(
            self.width,
            self.height,
            &mask,
            self.effective_iterations(),
            rng,
        )?;
        Ok(EvolveResponse::from_grid(&grid))
    }
}

/// Generated grid as returned to clients: rows of tile codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EvolveResponse {
    /// Rows of tile codes
    pub tiles: Vec<Vec<u8>>,
}

impl EvolveResponse {
    /// Encode a grid
    pub fn from_grid(grid: &TileGrid) -> Self {
        Self {
            tiles: grid.to_codes(),
        }
    }

    /// Serialize as JSON text
    ///
    /// # Errors
    ///
    /// Returns [`EvolveError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| EvolveError::Serialization {
            context: "response".to_string(),
            source: e,
        })
    }

    /// Write the response as JSON to `path`
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        std::fs::write(path, text).map_err(|e| file_system_error(path, "write response", e))
    }
}
