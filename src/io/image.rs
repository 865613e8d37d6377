//! Tile palette and PNG export of generated maps

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{
    COASTAL_WATER_COLOR, FOREST_COLOR, GRASS_COLOR, LAND_COLOR, WATER_COLOR,
};
use crate::io::error::{EvolveError, Result, file_system_error, invalid_parameter};
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileKind;

/// RGBA colour used to draw a tile kind
pub const fn tile_color(kind: TileKind) -> [u8; 4] {
    match kind {
        TileKind::Land => LAND_COLOR,
        TileKind::CoastalWater => COASTAL_WATER_COLOR,
        TileKind::Water => WATER_COLOR,
        TileKind::Grass => GRASS_COLOR,
        TileKind::Forest => FOREST_COLOR,
    }
}

/// Tile kind drawn with exactly this colour, if any
pub fn kind_for_color(color: [u8; 4]) -> Option<TileKind> {
    TileKind::ALL
        .into_iter()
        .find(|&kind| tile_color(kind) == color)
}

/// Render the grid with each tile drawn as a `scale × scale` block
///
/// # Errors
///
/// Returns an error if `scale` is zero or the image would exceed `u32` pixels per side.
pub fn render_grid(grid: &TileGrid, scale: u32) -> Result<RgbaImage> {
    if scale == 0 {
        return Err(invalid_parameter(
            "scale",
            &scale,
            &"tiles need at least one pixel",
        ));
    }

    let side = |tiles: usize, name: &'static str| {
        u32::try_from(tiles)
            .ok()
            .and_then(|tiles| tiles.checked_mul(scale))
            .ok_or_else(|| invalid_parameter(name, &tiles, &"image would be too large"))
    };
    let width = side(grid.width(), "width")?;
    let height = side(grid.height(), "height")?;

    let mut img = RgbaImage::new(width, height);
    for (px, py, pixel) in img.enumerate_pixels_mut() {
        let x = (px / scale) as usize;
        let y = (py / scale) as usize;
        if let Some(kind) = grid.get(x, y) {
            *pixel = Rgba(tile_color(kind));
        }
    }

    Ok(img)
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty or `scale` is invalid
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(grid: &TileGrid, scale: u32, output_path: &Path) -> Result<()> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{}x{}", grid.width(), grid.height()),
            &"an empty grid cannot be written as an image",
        ));
    }

    let img = render_grid(grid, scale)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| EvolveError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
