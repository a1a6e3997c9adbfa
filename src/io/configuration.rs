//! Generation constants and scene defaults

// Grid dimensions for the district recipe
/// Grid width in cells
pub const GRID_WIDTH: usize = 48;
/// Grid height in cells
pub const GRID_HEIGHT: usize = 48;

/// Side length of a road segment pattern (and width of a road band)
pub const SEGMENT_SIZE: usize = 4;

/// Distance between consecutive street tree stops
pub const TREE_SPACING: usize = 2;

/// Side length of the square park fountain
pub const FOUNTAIN_SIZE: usize = 2;

/// One scattered park tree is attempted per this many park cells
pub const PARK_TREE_DENSITY: usize = 8;

/// Statue footprint width
pub const STATUE_WIDTH: usize = 1;
/// Statue footprint height
pub const STATUE_HEIGHT: usize = 2;

// Scene metadata carried alongside the grid
/// Pedestrians the client spawns
pub const DEFAULT_ACTOR_COUNT: u32 = 24;
/// Vehicles the client spawns
pub const DEFAULT_VEHICLE_COUNT: u32 = 12;
/// Initial camera zoom
pub const DEFAULT_ZOOM: f64 = 1.5;
/// Brightness multiplier
pub const DEFAULT_BRIGHTNESS: f64 = 1.05;
/// Contrast multiplier
pub const DEFAULT_CONTRAST: f64 = 1.1;
/// Saturation multiplier
pub const DEFAULT_SATURATION: f64 = 0.95;
/// Colour temperature shift, negative is cooler
pub const DEFAULT_WARMTH: f64 = 0.2;

// Preview output
/// Pixels per cell edge in PNG previews
pub const DEFAULT_PREVIEW_SCALE: u32 = 8;
/// Largest accepted preview scale
pub const MAX_PREVIEW_SCALE: u32 = 64;
/// Width of the stage progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
