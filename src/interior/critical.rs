//! Critical path analysis between the two progression endpoints
//!
//! The deepest leaf under each of the root's two children becomes an
//! endpoint (stairs up and stairs down). Every street on the walk from an
//! endpoint back to the root is part of the critical path, and every area
//! is then labeled with its graph distance from that path. The endpoint
//! search follows the immutable partition links; the path walk and the
//! distance labels follow the connectivity graph.

use crate::interior::connect::AdjacencyMatrix;
use crate::interior::partition::Arena;
use crate::spatial::Map;
use crate::spatial::grid;
use crate::spatial::tiles;

/// Deepest leaf in the subtree under `start`, by explicit-stack search
///
/// Ties keep the first leaf encountered, so the result is deterministic
/// for a given arena.
fn deepest_leaf(arena: &Arena, start: usize) -> usize {
    let mut best: Option<(usize, usize)> = None;
    let mut stack = vec![start];
    while let Some(current) = stack.pop() {
        let Some(area) = arena.get(current) else {
            continue;
        };
        if area.is_leaf() {
            if best.is_none_or(|(_, level)| area.level > level) {
                best = Some((current, area.level));
            }
            continue;
        }
        if let Some([c1, c2]) = area.children {
            stack.push(c2);
            stack.push(c1);
        }
    }
    best.map_or(start, |(index, _)| index)
}

/// Mark one endpoint's walk back to the root as critical
///
/// Follows the connectivity parents, flagging every street on the way.
/// The walk is bounded by the area count to stay finite even on a
/// malformed graph.
fn mark_route(arena: &mut Arena, endpoint: usize) {
    let mut cursor = arena.get(endpoint).and_then(|area| area.route_parent);
    let mut steps = 0;
    while let Some(current) = cursor {
        if steps > arena.len() {
            break;
        }
        steps += 1;
        let Some(area) = arena.get_mut(current) else {
            break;
        };
        if area.is_street() {
            area.on_critical_path = true;
        }
        cursor = area.route_parent;
    }
}

/// Place the progression endpoints and mark the streets between them
///
/// Stairs up go to the deepest leaf under the root's first child, stairs
/// down under the second. A root that never split holds both stairs
/// itself, one tile apart, and is flagged critical so distance labeling
/// still has a seed.
pub fn mark_critical_path(arena: &mut Arena, map: &mut Map) {
    let children = arena.get(0).and_then(|area| area.children);
    let Some([c1, c2]) = children else {
        if let Some(area) = arena.get_mut(0) {
            area.on_critical_path = true;
            let (cx, cy) = area.rect.center();
            map.layer(grid::STRUCTURES).set(cx, cy, tiles::STAIRS_UP);
            map.layer(grid::STRUCTURES)
                .set(cx + 1, cy, tiles::STAIRS_DOWN);
        }
        return;
    };

    let up = deepest_leaf(arena, c1);
    let down = deepest_leaf(arena, c2);
    if let Some(area) = arena.get(up) {
        let (cx, cy) = area.rect.center();
        map.layer(grid::STRUCTURES).set(cx, cy, tiles::STAIRS_UP);
    }
    if let Some(area) = arena.get(down) {
        let (cx, cy) = area.rect.center();
        map.layer(grid::STRUCTURES).set(cx, cy, tiles::STAIRS_DOWN);
    }
    mark_route(arena, up);
    mark_route(arena, down);
}

/// Distance in adjacency hops from the critical path, per area
///
/// Critical areas are seeded at one; each unlabeled area takes the least
/// labeled neighbor plus one, rescanning until a full pass changes
/// nothing. Areas outside the connectivity graph keep the unset label
/// zero. The relaxation halts because every pass labels at least one
/// area or nothing is left to label.
pub fn distance_from_path(arena: &Arena, adjacency: &AdjacencyMatrix) -> Vec<usize> {
    let mut distance = vec![0usize; arena.len()];
    for (index, area) in arena.areas() {
        if area.on_critical_path
            && let Some(slot) = distance.get_mut(index)
        {
            *slot = 1;
        }
    }
    loop {
        let mut changed = false;
        for index in 0..arena.len() {
            if distance.get(index).copied().unwrap_or(0) != 0 {
                continue;
            }
            let nearest = adjacency
                .neighbors(index)
                .iter()
                .filter_map(|&neighbor| distance.get(neighbor).copied())
                .filter(|&label| label > 0)
                .min();
            if let Some(label) = nearest
                && let Some(slot) = distance.get_mut(index)
            {
                *slot = label + 1;
                changed = true;
            }
        }
        if !changed {
            return distance;
        }
    }
}
