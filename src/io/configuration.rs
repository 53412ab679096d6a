//! Tiling limits and runtime configuration defaults

// A 4096x4096 board of 8-byte cells needs 128 MiB; each order above quadruples it
/// Largest board order accepted by `solve` and `Board::new`
pub const MAX_ORDER: u32 = 12;

/// Id given to the first placed tromino
pub const FIRST_TILE_ID: u32 = 1;

// Default values for configurable parameters
/// Fixed seed for reproducible random damaged cells
pub const DEFAULT_SEED: u64 = 42;

/// Side length in pixels of one board cell in exported images
pub const DEFAULT_CELL_PIXELS: u32 = 16;

// Output settings
/// Colour of the damaged cell in exported images
pub const DAMAGED_COLOR: [u8; 4] = [0, 0, 0, 255];
/// HSV saturation of tile colours
pub const TILE_SATURATION: f64 = 0.55;
/// HSV value (brightness) of tile colours
pub const TILE_VALUE: f64 = 0.95;
