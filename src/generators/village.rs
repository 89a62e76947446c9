//! Village generation
//!
//! A grass field dotted with walled buildings, each doored toward the
//! open ground, with trees scattered over the leftover grass.

use rand::Rng;
use rand::rngs::StdRng;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::{Map, Rect};

/// Generate a village map
///
/// Building count scales with the map area; each building keeps a
/// one-tile margin of grass around it so doors stay usable.
///
/// # Errors
///
/// Returns an error when the map cannot hold a single building.
pub fn generate(width: i32, height: i32, rng: &mut StdRng) -> Result<Map> {
    if width < 12 || height < 12 {
        return Err(invalid_parameter(
            "width/height",
            &format!("{width}x{height}"),
            &"a village needs at least a 12x12 field",
        ));
    }

    let mut map = Map::new(width, height);
    map.layer(grid::GROUND).fill(tiles::GRASS);

    let target = ((width * height) / 150).max(2);
    let mut placed = 0;
    for _ in 0..target * 20 {
        if placed >= target {
            break;
        }
        let w = 6 + rng.random_range(0..5);
        let h = 6 + rng.random_range(0..5);
        if width - w < 1 || height - h - 1 < 1 {
            continue;
        }
        let x = rng.random_range(0..width - w);
        let y = rng.random_range(0..height - h - 1);
        // One tile of clear grass all around
        if !map
            .layer(grid::STRUCTURES)
            .is_clear(x - 1, y - 1, w + 2, h + 2)
        {
            continue;
        }
        let building = Rect::new(x, y, w, h);
        map.layer(grid::STRUCTURES)
            .rectangle(building, tiles::WALL, false);
        map.layer(grid::GROUND).rectangle(
            Rect::new(x + 1, y + 1, w - 2, h - 2),
            tiles::ROOM,
            true,
        );
        // Door on the bottom wall, sign beside it on the grass
        let door_x = x + w / 2;
        map.layer(grid::STRUCTURES)
            .set(door_x, building.bottom() - 1, tiles::DOOR);
        map.layer(grid::FURNITURE)
            .set(door_x + 1, building.bottom(), tiles::SIGN);
        placed += 1;
    }

    // Trees on the leftover grass
    for _ in 0..(width * height) / 30 {
        let x = rng.random_range(0..width);
        let y = rng.random_range(0..height);
        let open = map
            .layer_ref(grid::GROUND)
            .is_some_and(|layer| layer.get(x, y) == tiles::GRASS)
            && map
                .layer_ref(grid::STRUCTURES)
                .is_none_or(|layer| layer.get(x, y) == tiles::NOTHING)
            && map
                .layer_ref(grid::FURNITURE)
                .is_none_or(|layer| layer.get(x, y) == tiles::NOTHING);
        if open {
            map.layer(grid::FURNITURE).set(x, y, tiles::TREE);
        }
    }

    Ok(map)
}
