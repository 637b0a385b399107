//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Default maze width in cells
pub const DEFAULT_WIDTH: usize = 5;
/// Default maze height in cells
pub const DEFAULT_HEIGHT: usize = 5;
/// Default number of placement units per cell edge
pub const DEFAULT_PATH_WIDTH: usize = 1;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Safety limits to prevent excessive memory allocation
/// Maximum allowed grid dimension in cells
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum allowed path width in placement units
pub const MAX_PATH_WIDTH: usize = 64;

/// Elevation shared by every placement command
pub const DEFAULT_ELEVATION: f64 = 0.0;

// Raster output settings
/// Default pixels per placement unit in exported images
pub const DEFAULT_TILE_SCALE: u32 = 8;
/// Maximum pixels per placement unit
pub const MAX_TILE_SCALE: u32 = 64;
/// Maximum side of a rasterised plan in placement units
pub const MAX_CANVAS_DIMENSION: usize = 16_384;
/// Maximum side of an exported image in pixels
pub const MAX_IMAGE_DIMENSION: u32 = 16_384;
/// Default PNG output path
pub const DEFAULT_OUTPUT: &str = "maze.png";
/// Suffix added to the output stem for the carving animation
pub const VISUALIZATION_SUFFIX: &str = "_carving";

/// Colour for floor tiles (RGBA)
pub const FLOOR_COLOR: [u8; 4] = [236, 228, 210, 255];
/// Colour for wall tiles (RGBA)
pub const WALL_COLOR: [u8; 4] = [48, 52, 64, 255];
/// Colour for passage tiles (RGBA)
pub const PASSAGE_COLOR: [u8; 4] = [196, 178, 140, 255];
/// Colour for positions no command covers (RGBA)
pub const EMPTY_COLOR: [u8; 4] = [0, 0, 0, 0];

// Animation settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on rendered animation frames before skipping kicks in
pub const MAX_VISUALIZATION_FRAMES: usize = 400;
/// Hold multiplier applied to the last animation frame
pub const FINAL_FRAME_HOLD: u32 = 25;

/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
