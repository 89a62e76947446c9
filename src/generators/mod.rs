//! Self-contained generation strategies beyond the interior builder
//!
//! Each generator writes a fresh [`Map`](crate::spatial::Map) and takes
//! an explicit seeded random generator, so every strategy is reproducible
//! in isolation.

/// Plain BSP dungeon with one random room per leaf
pub mod bsp;
/// Cellular-automata cave with flood-fill area connection
pub mod cellular;
/// Lobby-based building layout
pub mod lobby;
/// Grid-based rooms joined by tunnels
pub mod rogue;
/// Furnished single-building shop
pub mod shop;
/// Grass field dotted with walled buildings
pub mod village;
/// Drunken-walk floor carving
pub mod walk;

use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::Map;

/// Carve an L-shaped corridor between two tiles
///
/// Lays corridor floor on the ground layer and clears any structure in
/// the way, moving along the dominant axis first so long connections
/// take at most one turn.
pub fn carve_corridor(map: &mut Map, from: (i32, i32), to: (i32, i32), floor: char) {
    let (mut x, mut y) = from;
    let (x2, y2) = to;
    let x_first = (x2 - x).abs() > (y2 - y).abs();
    let step_x = (x2 - x).signum();
    let step_y = (y2 - y).signum();

    let carve = |map: &mut Map, x: i32, y: i32| {
        map.layer(grid::GROUND).set(x, y, floor);
        map.layer(grid::STRUCTURES).set(x, y, tiles::NOTHING);
    };

    if x_first {
        while x != x2 {
            carve(map, x, y);
            x += step_x;
        }
        while y != y2 {
            carve(map, x, y);
            y += step_y;
        }
    } else {
        while y != y2 {
            carve(map, x, y);
            y += step_y;
        }
        while x != x2 {
            carve(map, x, y);
            x += step_x;
        }
    }
    carve(map, x2, y2);
}
