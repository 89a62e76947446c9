//! Plain BSP dungeon generation
//!
//! Splits the map into a binary tree of cells along random axes, then
//! drops one randomly sized and positioned room into every leaf. Unlike
//! the interior builder there are no corridors or connectivity
//! guarantees; this is the classic rooms-in-cells dungeon sketch.

use rand::Rng;
use rand::rngs::StdRng;

use crate::interior::partition::{Area, Arena, Axis, split_rect};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::{Map, Rect};

/// Smallest cell extent a split may leave behind
const MIN_CELL: i32 = 3;

/// Generate a rooms-in-cells dungeon
///
/// # Errors
///
/// Returns an error when the map cannot hold a single minimum-size cell.
pub fn generate(width: i32, height: i32, iterations: usize, rng: &mut StdRng) -> Result<Map> {
    if width < MIN_CELL || height < MIN_CELL {
        return Err(invalid_parameter(
            "width/height",
            &format!("{width}x{height}"),
            &"the dungeon needs room for at least one cell",
        ));
    }

    // Same growing-worklist shape as the interior partition, but with a
    // random axis per split and no corridor reservation
    let mut arena = Arena::default();
    arena.push(Area::root(width, height));
    let mut index = 0;
    while index < arena.len() {
        let Some(area) = arena.get(index) else { break };
        if area.level + 1 >= iterations {
            break;
        }
        let rect = area.rect;
        let level = area.level;
        let axis = if rng.random_range(0..2u32) == 0 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        if let Some((r1, r2)) = split_rect(rect, axis, MIN_CELL, rng) {
            let c1 = arena.push(Area::child(r1, index, level + 1));
            let c2 = arena.push(Area::child(r2, index, level + 1));
            if let Some(parent) = arena.get_mut(index) {
                parent.children = Some([c1, c2]);
            }
        }
        index += 1;
    }

    let mut map = Map::new(width, height);
    for leaf in arena.leaves() {
        let Some(cell) = arena.get(leaf).map(|area| area.rect) else {
            continue;
        };
        let room = random_room(cell, rng);
        map.layer(grid::GROUND).rectangle(
            Rect::new(room.x + 1, room.y + 1, room.w - 2, room.h - 2),
            tiles::ROOM,
            true,
        );
        map.layer(grid::STRUCTURES)
            .rectangle(room, tiles::WALL2, false);
    }
    Ok(map)
}

/// Random room within a cell, at least the minimum size on both axes
fn random_room(cell: Rect, rng: &mut StdRng) -> Rect {
    let w = if cell.w <= MIN_CELL {
        cell.w
    } else {
        MIN_CELL + rng.random_range(0..cell.w - MIN_CELL)
    };
    let x = if cell.w == w {
        cell.x
    } else {
        cell.x + rng.random_range(0..cell.w - w)
    };
    let h = if cell.h <= MIN_CELL {
        cell.h
    } else {
        MIN_CELL + rng.random_range(0..cell.h - MIN_CELL)
    };
    let y = if cell.h == h {
        cell.y
    } else {
        cell.y + rng.random_range(0..cell.h - h)
    };
    Rect::new(x, y, w, h)
}
