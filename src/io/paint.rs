//! Paint mask loading from palette images or JSON code grids

use std::path::Path;

use crate::io::error::{EvolveError, Result, file_system_error, invalid_parameter};
use crate::io::image::kind_for_color;
use crate::spatial::mask::PaintMask;

/// Load a paint mask, choosing the decoder from the file extension
///
/// `.png` files are read with [`paint_mask_from_png`], `.json` files with
/// [`paint_mask_from_json`].
///
/// # Errors
///
/// Returns an error if the extension is unsupported or decoding fails.
pub fn load_paint_mask(path: &Path) -> Result<PaintMask> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => paint_mask_from_png(path),
        Some("json") => paint_mask_from_json(path),
        _ => Err(invalid_parameter(
            "paint",
            &path.display(),
            &"paint masks must be .png or .json files",
        )),
    }
}

/// Parse a palette image into a paint mask
///
/// Pixels drawn in a tile colour pin that kind; every other pixel, including
/// transparent ones, is left unset. One pixel maps to one tile.
///
/// # Errors
///
/// Returns an error if the image cannot be loaded.
pub fn paint_mask_from_png(path: &Path) -> Result<PaintMask> {
    let img = image::open(path).map_err(|e| EvolveError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();
    let mut mask = PaintMask::unset(width as usize, height as usize);

    for (x, y, pixel) in rgba_img.enumerate_pixels() {
        if let Some(kind) = kind_for_color(pixel.0) {
            mask.paint(x as usize, y as usize, kind);
        }
    }

    Ok(mask)
}

/// Parse a JSON array of rows of tile codes (`-1` for unset) into a paint mask
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a grid of integers,
/// or contains an unknown tile code.
pub fn paint_mask_from_json(path: &Path) -> Result<PaintMask> {
    let text =
        std::fs::read_to_string(path).map_err(|e| file_system_error(path, "read paint mask", e))?;

    let codes: Vec<Vec<i32>> =
        serde_json::from_str(&text).map_err(|e| EvolveError::Serialization {
            context: format!("paint mask '{}'", path.display()),
            source: e,
        })?;

    PaintMask::from_codes(&codes)
}
