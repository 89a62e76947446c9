//! Street gating and key placement
//!
//! Every interior street's two corridor ends are either sealed or turned
//! into doorways; doorways on critical-path streets are locked. Each lock
//! then receives a key placed down a branch that diverges from the
//! critical path, found by walking the connectivity graph strictly away
//! from the path. Because the walk's distance label increases at every
//! step while the lock sits on the path itself, the key can always be
//! reached without opening the lock it belongs to.

use crate::interior::connect::AdjacencyMatrix;
use crate::interior::partition::{Arena, Axis};
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::{Map, Rect};

/// First street, in arena order, whose rectangle contains a tile
fn street_at(arena: &Arena, x: i32, y: i32) -> Option<usize> {
    arena
        .areas()
        .find(|(_, area)| area.is_street() && area.rect.contains(x, y))
        .map(|(index, _)| index)
}

/// Cap the open ends of every interior street
///
/// An end is sealed with wall when its outward tile leaves the map, hits
/// no street at all, or hits an ancestor street more than
/// `lock_depth_threshold` levels older; otherwise the end is walled with
/// a doorway in the middle, locked when the street lies on the critical
/// path and ordinary otherwise. Returns one entry per locked doorway
/// naming its street.
pub fn cap_streets(arena: &Arena, map: &mut Map, lock_depth_threshold: usize) -> Vec<usize> {
    let mut locks = Vec::new();
    for (index, area) in arena.areas() {
        let Some(axis) = area.street_axis else {
            continue;
        };
        if area.parent.is_none() {
            continue;
        }
        let r = area.rect;
        let (cx, cy) = r.center();
        // Each end: the corridor's own end line and the tile just beyond it
        let ends = match axis {
            Axis::Vertical => [
                (Rect::new(r.x, r.y, r.w, 1), (cx, r.y - 1)),
                (Rect::new(r.x, r.bottom() - 1, r.w, 1), (cx, r.bottom())),
            ],
            Axis::Horizontal => [
                (Rect::new(r.x, r.y, 1, r.h), (r.x - 1, cy)),
                (Rect::new(r.right() - 1, r.y, 1, r.h), (r.right(), cy)),
            ],
        };
        for (cap, (out_x, out_y)) in ends {
            let sealed = if map.is_in(out_x, out_y) {
                match street_at(arena, out_x, out_y) {
                    Some(junction) => {
                        let gap = area.level as i64
                            - arena.get(junction).map_or(0, |other| other.level) as i64;
                        gap > lock_depth_threshold as i64
                    }
                    None => true,
                }
            } else {
                true
            };
            map.layer(grid::STRUCTURES).rectangle(cap, tiles::WALL2, true);
            if !sealed {
                let (door_x, door_y) = cap.center();
                if area.on_critical_path {
                    map.layer(grid::STRUCTURES)
                        .set(door_x, door_y, tiles::DOOR_LOCKED);
                    locks.push(index);
                } else {
                    map.layer(grid::STRUCTURES).set(door_x, door_y, tiles::DOOR);
                }
            }
        }
    }
    locks
}

/// Drop a key on the first free furniture tile of an area
///
/// Tries the center first, then scans the interior row by row. Interiors
/// too small to hold a tile fall back to the center coordinate.
fn drop_key(map: &mut Map, rect: Rect) {
    let furniture = map.layer(grid::FURNITURE);
    let (cx, cy) = rect.center();
    if furniture.get(cx, cy) == tiles::NOTHING {
        furniture.set(cx, cy, tiles::KEY);
        return;
    }
    for y in rect.y + 1..rect.bottom() - 1 {
        for x in rect.x + 1..rect.right() - 1 {
            if furniture.get(x, y) == tiles::NOTHING {
                furniture.set(x, y, tiles::KEY);
                return;
            }
        }
    }
    furniture.set(cx, cy, tiles::KEY);
}

/// Place one key per locked doorway
///
/// Starting at the locked street, repeatedly steps to the lowest-index
/// neighbor whose distance from the critical path is strictly greater
/// than the current area's, and drops the key where the walk runs out of
/// farther neighbors. The strictly increasing distance both bounds the
/// walk and keeps it off the critical path.
///
/// # Errors
///
/// Returns [`GenerationError::NoKeyBranch`] when a walk cannot take a
/// single step, which would leave a lock without a reachable key.
pub fn place_keys(
    arena: &Arena,
    adjacency: &AdjacencyMatrix,
    distance: &[usize],
    map: &mut Map,
    locks: &[usize],
) -> Result<()> {
    for &street in locks {
        let mut current = street;
        loop {
            let here = distance.get(current).copied().unwrap_or(0);
            let next = adjacency
                .neighbors(current)
                .into_iter()
                .find(|&neighbor| distance.get(neighbor).copied().unwrap_or(0) > here);
            match next {
                Some(neighbor) => current = neighbor,
                None => break,
            }
        }
        if current == street {
            return Err(GenerationError::NoKeyBranch { street });
        }
        if let Some(area) = arena.get(current) {
            drop_key(map, area.rect);
        }
    }
    Ok(())
}
