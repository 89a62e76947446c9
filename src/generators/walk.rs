//! Drunken-walk floor carving
//!
//! Wears a winding path into a plain floor by walking randomly from the
//! map center, one tile per step.

use rand::Rng;
use rand::rngs::StdRng;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Map;
use crate::spatial::grid;
use crate::spatial::tiles;

/// Step from a tile to a random in-bounds 4-neighbour
///
/// Redraws the direction until one stays inside the given bounds, so
/// corner tiles still make progress.
pub fn random_step(x: i32, y: i32, width: i32, height: i32, rng: &mut StdRng) -> (i32, i32) {
    if width <= 1 && height <= 1 {
        return (x, y);
    }
    loop {
        match rng.random_range(0..4u32) {
            0 if y > 0 => return (x, y - 1),
            1 if x < width - 1 => return (x + 1, y),
            2 if y < height - 1 => return (x, y + 1),
            3 if x > 0 => return (x - 1, y),
            _ => {}
        }
    }
}

/// Carve a worn path by random walk from the map center
///
/// # Errors
///
/// Returns an error when the map has no tiles to walk on.
pub fn generate(width: i32, height: i32, iterations: usize, rng: &mut StdRng) -> Result<Map> {
    if width < 1 || height < 1 {
        return Err(invalid_parameter(
            "width/height",
            &format!("{width}x{height}"),
            &"the walk needs at least one tile",
        ));
    }
    let mut map = Map::new(width, height);
    let ground = map.layer(grid::GROUND);
    ground.fill(tiles::FLOOR);

    let (mut x, mut y) = (width / 2, height / 2);
    for _ in 0..iterations {
        ground.set(x, y, tiles::FLOOR2);
        (x, y) = random_step(x, y, width, height, rng);
    }
    Ok(map)
}
