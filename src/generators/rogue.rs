//! Grid-based room placement with tunnels
//!
//! Divides the map into a coarse grid of cells, connects the cells with a
//! random spanning walk plus a repair scan and a few extra links, then
//! promotes cells to rooms (dead ends and the walk's endpoints always
//! become rooms, others may collapse to one-tile junctions). Corridors
//! follow the recorded links, doorways are detected where a corridor
//! meets a room wall, and stairs land in the walk's first and last rooms.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::generators::carve_corridor;
use crate::generators::walk::random_step;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::{Map, Rect};

/// Recorded connections of one grid cell
#[derive(Debug, Clone, Copy, Default)]
struct CellLinks {
    up: bool,
    right: bool,
    down: bool,
    left: bool,
}

impl CellLinks {
    const fn is_connected(self) -> bool {
        self.up || self.right || self.down || self.left
    }

    const fn all_connected(self) -> bool {
        self.up && self.right && self.down && self.left
    }

    /// Connections that are real links rather than map-edge markers
    const fn interior_connections(self, x: i32, y: i32, cells: i32) -> usize {
        let mut n = 0;
        if self.up && y > 0 {
            n += 1;
        }
        if self.right && x < cells - 1 {
            n += 1;
        }
        if self.down && y < cells - 1 {
            n += 1;
        }
        if self.left && x > 0 {
            n += 1;
        }
        n
    }
}

/// Record a link between two neighbouring cells
///
/// Fails when the origin cell already holds a link in that direction.
fn try_connect(links: &mut [CellLinks], from: (i32, i32), to: (i32, i32), cells: i32) -> bool {
    let from_index = (from.1 * cells + from.0) as usize;
    let to_index = (to.1 * cells + to.0) as usize;
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);

    let Some(origin) = links.get(from_index).copied() else {
        return false;
    };
    let already = match (dx, dy) {
        (0, -1) => origin.up,
        (1, 0) => origin.right,
        (0, 1) => origin.down,
        (-1, 0) => origin.left,
        _ => return false,
    };
    if already {
        return false;
    }
    if let Some(cell) = links.get_mut(from_index) {
        match (dx, dy) {
            (0, -1) => cell.up = true,
            (1, 0) => cell.right = true,
            (0, 1) => cell.down = true,
            _ => cell.left = true,
        }
    }
    if let Some(cell) = links.get_mut(to_index) {
        match (dx, dy) {
            (0, -1) => cell.down = true,
            (1, 0) => cell.left = true,
            (0, 1) => cell.up = true,
            _ => cell.right = true,
        }
    }
    true
}

/// Generate a grid-rogue map
///
/// # Errors
///
/// Returns an error when the grid cells are too small to hold rooms or
/// the room percentages are not an ascending range.
pub fn generate(
    width: i32,
    height: i32,
    cells: i32,
    min_room_percent: i32,
    max_room_percent: i32,
    rng: &mut StdRng,
) -> Result<Map> {
    if cells < 2 || width / cells < 5 || height / cells < 5 {
        return Err(invalid_parameter(
            "cells",
            &cells,
            &"each grid cell must span at least five tiles on both axes",
        ));
    }
    if min_room_percent >= max_room_percent || !(0..=100).contains(&max_room_percent) {
        return Err(invalid_parameter(
            "min_room_percent/max_room_percent",
            &format!("{min_room_percent}/{max_room_percent}"),
            &"must be an ascending range of percentages",
        ));
    }

    let total = (cells * cells) as usize;
    let mut links = vec![CellLinks::default(); total];

    // Random spanning walk over the grid
    let start = rng.random_range(0..cells * cells);
    let first_cell = start as usize;
    let mut last_cell = first_cell;
    let (mut x, mut y) = (start % cells, start / cells);
    loop {
        let index = (y * cells + x) as usize;
        if let Some(cell) = links.get_mut(index) {
            // Map edges count as already connected
            cell.left = cell.left || x == 0;
            cell.up = cell.up || y == 0;
            cell.right = cell.right || x == cells - 1;
            cell.down = cell.down || y == cells - 1;
        }
        if links.get(index).copied().unwrap_or_default().all_connected() {
            break;
        }
        // Some direction is still open, so the redraw below terminates
        loop {
            let (nx, ny) = random_step(x, y, cells, cells, rng);
            if try_connect(&mut links, (x, y), (nx, ny), cells) {
                x = nx;
                y = ny;
                last_cell = (ny * cells + nx) as usize;
                break;
            }
        }
    }

    // Repair scan: hook leftover cells onto any connected neighbour
    loop {
        let mut has_unconnected = false;
        for cy in 0..cells {
            for cx in 0..cells {
                let index = (cy * cells + cx) as usize;
                if links.get(index).copied().unwrap_or_default().is_connected() {
                    continue;
                }
                has_unconnected = true;
                let neighbour_connected = |dx: i32, dy: i32| {
                    let (nx, ny) = (cx + dx, cy + dy);
                    nx >= 0
                        && nx < cells
                        && ny >= 0
                        && ny < cells
                        && links
                            .get((ny * cells + nx) as usize)
                            .copied()
                            .unwrap_or_default()
                            .is_connected()
                };
                if !neighbour_connected(0, -1)
                    && !neighbour_connected(1, 0)
                    && !neighbour_connected(0, 1)
                    && !neighbour_connected(-1, 0)
                {
                    continue;
                }
                loop {
                    let (nx, ny) = random_step(cx, cy, cells, cells, rng);
                    if !links
                        .get((ny * cells + nx) as usize)
                        .copied()
                        .unwrap_or_default()
                        .is_connected()
                    {
                        continue;
                    }
                    if try_connect(&mut links, (cx, cy), (nx, ny), cells) {
                        last_cell = index;
                        break;
                    }
                }
            }
        }
        if !has_unconnected {
            break;
        }
    }

    // A few extra links make loops instead of a pure tree
    let extra = rng.random_range(0..cells);
    for _ in 0..extra {
        let pick = rng.random_range(0..cells * cells);
        let (px, py) = (pick % cells, pick / cells);
        if links
            .get(pick as usize)
            .copied()
            .unwrap_or_default()
            .all_connected()
        {
            continue;
        }
        for _ in 0..16 {
            let (nx, ny) = random_step(px, py, cells, cells, rng);
            if try_connect(&mut links, (px, py), (nx, ny), cells) {
                break;
            }
        }
    }

    // Promote cells to rooms; the rest collapse to one-tile junctions
    let cell_w = width / cells;
    let cell_h = height / cells;
    let span = max_room_percent - min_room_percent;
    let num_rooms =
        ((min_room_percent + rng.random_range(0..span)) * cells * cells / 100).max(0) as usize;
    let mut order: Vec<usize> = (0..total).collect();
    order.shuffle(rng);

    let mut map = Map::new(width, height);
    let mut rooms: Vec<Rect> = vec![Rect::new(0, 0, 0, 0); total];
    for (rank, &cell_index) in order.iter().enumerate() {
        let cx = (cell_index as i32) % cells;
        let cy = (cell_index as i32) / cells;
        let origin_x = cx * cell_w;
        let origin_y = cy * cell_h;
        let cell_links = links.get(cell_index).copied().unwrap_or_default();
        // Dead ends and the walk endpoints must hold real rooms
        let promote = rank < num_rooms
            || cell_links.interior_connections(cx, cy, cells) <= 1
            || cell_index == first_cell
            || cell_index == last_cell;
        let room = if promote {
            let w = 4 + rng.random_range(0..(cell_w - 4).max(1));
            let h = 4 + rng.random_range(0..(cell_h - 4).max(1));
            Rect::new(
                origin_x + rng.random_range(0..(cell_w - w).max(1)),
                origin_y + rng.random_range(0..(cell_h - h).max(1)),
                w,
                h,
            )
        } else {
            Rect::new(
                origin_x + rng.random_range(0..(cell_w - 1).max(1)),
                origin_y + rng.random_range(0..(cell_h - 1).max(1)),
                1,
                1,
            )
        };
        for ty in room.y..room.bottom() {
            for tx in room.x..room.right() {
                let border = tx == room.x
                    || tx == room.right() - 1
                    || ty == room.y
                    || ty == room.bottom() - 1;
                if room.w > 1 && border {
                    map.layer(grid::STRUCTURES).set(tx, ty, tiles::WALL2);
                } else {
                    map.layer(grid::GROUND).set(tx, ty, tiles::ROOM);
                }
            }
        }
        if let Some(slot) = rooms.get_mut(cell_index) {
            *slot = room;
        }
    }

    // Corridors along the recorded links, right and down only so every
    // link is carved exactly once
    for index in 0..total {
        let cell_links = links.get(index).copied().unwrap_or_default();
        let cx = (index as i32) % cells;
        let cy = (index as i32) / cells;
        let room = rooms.get(index).copied().unwrap_or(Rect::new(0, 0, 0, 0));
        if cell_links.right && cx < cells - 1 {
            let neighbour = rooms
                .get(index + 1)
                .copied()
                .unwrap_or(Rect::new(0, 0, 0, 0));
            carve_corridor(
                &mut map,
                (room.right() - 1, room.y + room.h / 2),
                (neighbour.x, neighbour.y + neighbour.h / 2),
                tiles::STREET,
            );
        }
        if cell_links.down && cy < cells - 1 {
            let neighbour = rooms
                .get(index + cells as usize)
                .copied()
                .unwrap_or(Rect::new(0, 0, 0, 0));
            carve_corridor(
                &mut map,
                (room.x + room.w / 2, room.bottom() - 1),
                (neighbour.x + neighbour.w / 2, neighbour.y),
                tiles::STREET,
            );
        }
    }

    detect_doors(&mut map);

    // Stairs in the walk's first and last rooms
    let up = rooms.get(first_cell).copied().unwrap_or(Rect::new(0, 0, 1, 1));
    let down = rooms.get(last_cell).copied().unwrap_or(Rect::new(0, 0, 1, 1));
    let (ux, uy) = up.center();
    let (dx, dy) = down.center();
    map.layer(grid::STRUCTURES).set(ux, uy, tiles::STAIRS_UP);
    map.layer(grid::STRUCTURES).set(dx, dy, tiles::STAIRS_DOWN);

    Ok(map)
}

/// Turn wall breaches into doorways
///
/// A doorway is any open tile flanked by two walls with a room floor on
/// one remaining side and a corridor floor on the other.
fn detect_doors(map: &mut Map) {
    let width = map.width();
    let height = map.height();
    let mut doors = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let structure = map
                .layer_ref(grid::STRUCTURES)
                .map_or(tiles::NOTHING, |layer| layer.get(x, y));
            if tiles::is_wall(structure) {
                continue;
            }
            let mut walls = 0;
            let mut corridors = 0;
            let mut rooms = 0;
            for (nx, ny) in [(x, y - 1), (x + 1, y), (x, y + 1), (x - 1, y)] {
                if !map.is_in(nx, ny) {
                    continue;
                }
                let neighbour_structure = map
                    .layer_ref(grid::STRUCTURES)
                    .map_or(tiles::NOTHING, |layer| layer.get(nx, ny));
                if tiles::is_wall(neighbour_structure) {
                    walls += 1;
                    continue;
                }
                match map
                    .layer_ref(grid::GROUND)
                    .map_or(tiles::NOTHING, |layer| layer.get(nx, ny))
                {
                    tiles::ROOM => rooms += 1,
                    tiles::STREET => corridors += 1,
                    _ => {}
                }
            }
            if walls == 2 && corridors == 1 && rooms == 1 {
                doors.push((x, y));
            }
        }
    }
    for (x, y) in doors {
        map.layer(grid::STRUCTURES).set(x, y, tiles::DOOR);
    }
}
