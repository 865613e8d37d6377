//! Generation constants and runtime configuration defaults

/// Wire value marking an unpainted cell in a paint mask
pub const UNSET_PAINT_CODE: i32 = -1;

// The four-kind variant always runs a fixed number of rounds on the request surface
/// Rounds applied by the standard variant
pub const STANDARD_ITERATIONS: usize = 10;

/// Rounds applied by the extended variant when the caller gives none
pub const DEFAULT_ITERATIONS: usize = 10;

// Safety limits for caller-controlled work; the evolver itself is unbounded
/// Maximum allowed grid width or height
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum allowed number of rounds
pub const MAX_ITERATIONS: usize = 100_000;

// Default values for configurable parameters
/// Default grid width in tiles
pub const DEFAULT_WIDTH: usize = 64;
/// Default grid height in tiles
pub const DEFAULT_HEIGHT: usize = 48;
/// Default side length in pixels of one tile in exported images
pub const DEFAULT_TILE_SCALE: u32 = 4;

// Tile palette shared by PNG export, GIF frames and PNG paint masks
/// Colour of land tiles
pub const LAND_COLOR: [u8; 4] = [194, 178, 128, 255];
/// Colour of coastal water tiles
pub const COASTAL_WATER_COLOR: [u8; 4] = [102, 178, 255, 255];
/// Colour of open water tiles
pub const WATER_COLOR: [u8; 4] = [25, 76, 178, 255];
/// Colour of grass tiles
pub const GRASS_COLOR: [u8; 4] = [96, 168, 72, 255];
/// Colour of forest tiles
pub const FOREST_COLOR: [u8; 4] = [34, 102, 51, 255];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Animation settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Multiplier applied to the frame delay of the final frame
pub const FINAL_FRAME_HOLD: u32 = 10;
/// Most grids kept in memory while capturing a run for visualization
pub const MAX_CAPTURED_FRAMES: usize = 500;
/// Total tile budget across all captured grids
pub const MAX_CAPTURED_CELLS: usize = 64 * 1024 * 1024;
