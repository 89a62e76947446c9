//! Tests for configuration constants and their internal consistency

use tilecarve::interior::{InteriorConfig, generate};
use tilecarve::io::configuration::{
    DEFAULT_CORRIDOR_WIDTH, DEFAULT_FILL_PERCENT, DEFAULT_GRID_CELLS, DEFAULT_HEIGHT,
    DEFAULT_MAX_ROOM_PERCENT, DEFAULT_MAX_ROOM_SIZE, DEFAULT_MIN_ROOM_PERCENT,
    DEFAULT_MIN_ROOM_SIZE, DEFAULT_WIDTH, TILE_PIXELS,
};

#[test]
fn test_defaults_satisfy_generator_validation() {
    // The default configuration must generate without adjustment
    let result = generate(&InteriorConfig::default());
    assert!(result.is_ok());
}

#[test]
fn test_default_ranges_are_consistent() {
    assert!(DEFAULT_MIN_ROOM_SIZE >= 3);
    assert!(DEFAULT_CORRIDOR_WIDTH >= 1);
    assert!(DEFAULT_MAX_ROOM_SIZE > DEFAULT_MIN_ROOM_SIZE);
    assert!(DEFAULT_MIN_ROOM_PERCENT < DEFAULT_MAX_ROOM_PERCENT);
    assert!((0..=100).contains(&DEFAULT_FILL_PERCENT));
    assert!(DEFAULT_WIDTH >= DEFAULT_MIN_ROOM_SIZE);
    assert!(DEFAULT_HEIGHT >= DEFAULT_MIN_ROOM_SIZE);
    assert!(DEFAULT_GRID_CELLS >= 2);
    assert!(TILE_PIXELS >= 1);
}
