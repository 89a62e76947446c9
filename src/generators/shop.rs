//! Single-shop generation
//!
//! A walled shop on a road-ringed plot: entrance and signage on the
//! front, a counter with its shopkeeper opposite the door, shelf aisles
//! stocked at random, an optional rest area with rug, tables and chairs,
//! pots against the walls, and a sprinkling of assistants and patrons.

use rand::Rng;
use rand::rngs::StdRng;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::{Map, Rect};

/// Attempts granted to every rejection-sampled placement
const PLACEMENT_ATTEMPTS: usize = 64;

/// Generate a furnished shop map
///
/// # Errors
///
/// Returns an error when the plot is too small for the fixed front
/// layout (entrance, sign and counter).
pub fn generate(width: i32, height: i32, rng: &mut StdRng) -> Result<Map> {
    if width < 11 || height < 11 {
        return Err(invalid_parameter(
            "width/height",
            &format!("{width}x{height}"),
            &"a shop needs at least an 11x11 plot",
        ));
    }

    let mut map = Map::new(width, height);

    // Grass plot ringed by road, shop floor inside
    map.layer(grid::GROUND).fill(tiles::GRASS);
    map.layer(grid::GROUND)
        .rectangle(Rect::new(0, 0, width, height), tiles::ROAD, false);
    map.layer(grid::GROUND)
        .rectangle(Rect::new(2, 2, width - 4, height - 5), tiles::ROOM, true);

    // Walls, leaving one grass row along the bottom for lawn and board
    map.layer(grid::STRUCTURES)
        .rectangle(Rect::new(1, 1, width - 2, height - 3), tiles::WALL, false);

    // Entrance: connect road and floor, door in the wall, sign beside it
    let entrance_x = width / 2;
    map.layer(grid::GROUND)
        .set(entrance_x, height - 2, tiles::ROAD);
    map.layer(grid::GROUND)
        .set(entrance_x, height - 3, tiles::ROOM);
    map.layer(grid::STRUCTURES)
        .set(entrance_x, height - 3, tiles::DOOR);
    map.layer(grid::STRUCTURES)
        .set(entrance_x + 1, height - 2, tiles::SIGN);

    // Hangings along the top wall, shop sign inside the front wall
    map.layer(grid::FURNITURE)
        .rectangle(Rect::new(2, 1, width - 4, 1), tiles::HANGING, false);
    map.layer(grid::FURNITURE)
        .set(entrance_x - 1, height - 3, tiles::SIGN);

    // Windows along the front, one tile of space between elements
    let front_y = height - 3;
    let mut x = 3;
    while x < width - 3 {
        let clear = map
            .layer_ref(grid::FURNITURE)
            .is_none_or(|layer| layer.is_clear(x - 1, front_y, 3, 1));
        let no_door = (x - 1..=x + 1).all(|wx| {
            map.layer_ref(grid::STRUCTURES)
                .is_none_or(|layer| layer.get(wx, front_y) != tiles::DOOR)
        });
        if clear && no_door {
            map.layer(grid::FURNITURE).set(x, front_y, tiles::WINDOW);
        }
        x += 2;
    }

    // Counter opposite the door, random width of at least two
    let counter_w = 2 + rng.random_range(0..(width - 6).max(1));
    let counter_x = entrance_x - counter_w / 2;
    for cx in counter_x..counter_x + counter_w {
        map.layer(grid::FURNITURE).set(cx, 3, tiles::COUNTER);
    }
    map.layer(grid::CHARACTERS)
        .set(entrance_x, 2, tiles::SHOPKEEPER);

    // Shelf area to the right; two draws pull the edge toward the middle
    let mut shelf_x = rng.random_range(0..(width - 7).max(1)) / 2
        + (rng.random_range(0..(width - 7).max(1)) + 1) / 2
        + 2;
    // Wide shelf areas leave at least three tiles free for the rest area
    if width - 2 - shelf_x > 5 && shelf_x < 5 {
        shelf_x = 5;
    }
    let mut y = 3;
    while y < height - 4 {
        let mut row_counter = 0;
        for sx in shelf_x..width - 3 {
            let clear = shelf_clear(&map, sx, y);
            if clear && row_counter < 3 && sx != entrance_x {
                map.layer(grid::FURNITURE).set(sx, y, tiles::SHELF);
                if rng.random_range(0..3) < 2 {
                    map.layer(grid::INVENTORY).set(sx, y, tiles::STOCK);
                }
                row_counter += 1;
            } else {
                row_counter = 0;
            }
        }
        y += 2;
    }

    // Rest area between the left wall and the shelves
    if shelf_x >= 5 {
        let rest = Rect::new(2, 2, shelf_x - 2, height - 5);
        map.layer(grid::STRUCTURES).rectangle(
            Rect::new(rest.x, rest.y + 2, rest.w, rest.h - 2),
            tiles::RUG,
            true,
        );
        let rest_area = rest.w * rest.h;
        for _ in 0..2 * rest_area {
            let tx = 2 + rng.random_range(0..rest.w.max(1));
            let ty = 2 + rng.random_range(0..rest.h.max(1));
            if tx == entrance_x {
                continue;
            }
            let clear = map
                .layer_ref(grid::FURNITURE)
                .is_none_or(|layer| layer.is_clear(tx - 1, ty - 1, 3, 3));
            if clear {
                map.layer(grid::FURNITURE).set(tx, ty, tiles::TABLE);
                let left_clear = tx - 1 >= 2
                    && map
                        .layer_ref(grid::FURNITURE)
                        .is_none_or(|layer| layer.is_clear(tx - 2, ty - 1, 1, 3));
                if left_clear {
                    map.layer(grid::FURNITURE).set(tx - 1, ty, tiles::CHAIR);
                }
                let right_clear = tx + 1 < shelf_x
                    && map
                        .layer_ref(grid::FURNITURE)
                        .is_none_or(|layer| layer.is_clear(tx + 2, ty - 1, 1, 3));
                if right_clear {
                    map.layer(grid::FURNITURE).set(tx + 1, ty, tiles::CHAIR);
                }
            }
        }
    }

    // Pots against the walls, diagonals left free
    for _ in 0..(width + height) * 4 {
        let px = 2 + rng.random_range(0..(width - 4).max(1));
        let py = 2 + rng.random_range(0..(height - 5).max(1));
        if px != 2 && px != width - 3 && py != 2 && py != height - 4 {
            continue;
        }
        if pot_spot_clear(&map, px, py) {
            map.layer(grid::FURNITURE).set(px, py, tiles::POT);
        }
    }

    // Assistants in front of the counter, one per hundred tiles after
    // the first
    let assistants = (width * height / 100 - 1).max(0);
    for _ in 0..assistants {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let ax = 2 + rng.random_range(0..(width - 4).max(1));
            let ay = 4 + rng.random_range(0..(height - 7).max(1));
            let clear = map
                .layer_ref(grid::FURNITURE)
                .is_none_or(|layer| layer.is_clear(ax, ay, 1, 1));
            if clear {
                map.layer(grid::CHARACTERS).set(ax, ay, tiles::ASSISTANT);
                break;
            }
        }
    }

    // Patrons anywhere except behind the counter; rugs and chairs are
    // fair standing room
    let counter_span = counter_x..counter_x + counter_w;
    for _ in 0..width * height / 36 {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let px = rng.random_range(0..width);
            let py = rng.random_range(0..height);
            if py == 2 && counter_span.contains(&px) {
                continue;
            }
            let structure_ok = map.layer_ref(grid::STRUCTURES).is_none_or(|layer| {
                layer.is_clear(px, py, 1, 1) || layer.get(px, py) == tiles::RUG
            });
            let furniture_ok = map.layer_ref(grid::FURNITURE).is_none_or(|layer| {
                layer.is_clear(px, py, 1, 1) || layer.get(px, py) == tiles::CHAIR
            });
            let character_ok = map
                .layer_ref(grid::CHARACTERS)
                .is_none_or(|layer| layer.is_clear(px, py, 1, 1));
            if structure_ok && furniture_ok && character_ok {
                map.layer(grid::CHARACTERS).set(px, py, tiles::PERSON);
                break;
            }
        }
    }

    Ok(map)
}

/// Whether a 3x3 neighbourhood holds nothing but shelves
fn shelf_clear(map: &Map, x: i32, y: i32) -> bool {
    let Some(furniture) = map.layer_ref(grid::FURNITURE) else {
        return true;
    };
    for yi in y - 1..=y + 1 {
        for xi in x - 1..=x + 1 {
            let tile = furniture.get(xi, yi);
            if tile != tiles::NOTHING && tile != tiles::SHELF {
                return false;
            }
        }
    }
    true
}

/// Whether a wall spot can take a pot
///
/// The surrounding furniture may only be pots, counters or hangings, and
/// no character may stand nearby.
fn pot_spot_clear(map: &Map, x: i32, y: i32) -> bool {
    let characters_clear = map
        .layer_ref(grid::CHARACTERS)
        .is_none_or(|layer| layer.is_clear(x - 1, y - 1, 3, 3));
    if !characters_clear {
        return false;
    }
    let Some(furniture) = map.layer_ref(grid::FURNITURE) else {
        return true;
    };
    for yi in y - 1..=y + 1 {
        for xi in x - 1..=x + 1 {
            let tile = furniture.get(xi, yi);
            if tile != tiles::NOTHING
                && tile != tiles::POT
                && tile != tiles::COUNTER
                && tile != tiles::HANGING
            {
                return false;
            }
        }
    }
    true
}
