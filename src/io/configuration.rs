//! Generator constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default map width in tiles
pub const DEFAULT_WIDTH: i32 = 48;

/// Default map height in tiles
pub const DEFAULT_HEIGHT: i32 = 48;

// Interior generator defaults
/// Partition depth levels grown by the interior generator
pub const DEFAULT_SPLIT_COUNT: usize = 4;

/// Smallest room extent the interior generator will produce
pub const DEFAULT_MIN_ROOM_SIZE: i32 = 5;

/// Corridor width reserved at each interior split
pub const DEFAULT_CORRIDOR_WIDTH: i32 = 1;

/// Ancestor depth difference beyond which a street end is sealed
pub const DEFAULT_LOCK_DEPTH_THRESHOLD: usize = 1;

// Lobby interior defaults
/// Largest room extent for the lobby interior generator
pub const DEFAULT_MAX_ROOM_SIZE: i32 = 10;

// Cave generator defaults
/// Percentage of tiles seeded as stone by the cave generator
pub const DEFAULT_FILL_PERCENT: i32 = 40;

/// Smoothing repetitions applied by the cave generator
pub const DEFAULT_REPETITIONS: usize = 4;

/// Stone threshold within one step (cave smoothing rule)
pub const DEFAULT_RULE_ONE: usize = 5;

/// Stone threshold within two steps (cave smoothing rule)
pub const DEFAULT_RULE_TWO: usize = 2;

// Random walk defaults
/// Steps taken by the random walk generator
pub const DEFAULT_WALK_ITERATIONS: usize = 3000;

// Grid-rogue defaults
/// Grid cells per axis for the rogue generator
pub const DEFAULT_GRID_CELLS: i32 = 3;

/// Smallest percentage of grid cells promoted to rooms
pub const DEFAULT_MIN_ROOM_PERCENT: i32 = 50;

/// Largest percentage of grid cells promoted to rooms
pub const DEFAULT_MAX_ROOM_PERCENT: i32 = 100;

// Output settings
/// Edge length of one tile in exported images, in pixels
pub const TILE_PIXELS: u32 = 8;

/// Suffix added to batch export filenames before the index
pub const BATCH_SUFFIX: &str = "_map";
