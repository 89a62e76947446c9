//! Rasterization and connectivity of the partitioned interior
//!
//! Draws rooms and streets into the tile grid, then guarantees every room
//! is reachable: streets are adjacent to their structural parents, a first
//! pass doors each room into its nearest ancestor street, and a repair
//! loop links any room left over to an already connected neighboring room
//! through a shared wall.

use bitvec::bitvec;
use bitvec::vec::BitVec;

use crate::interior::partition::Arena;
use crate::io::error::{GenerationError, Result};
use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::{Map, Rect};

/// Symmetric boolean adjacency relation over area indices
///
/// The partition tree is a spanning subgraph of this relation; doorway
/// placement and connectivity repair add further edges, so the final
/// structure is a connected graph rather than a tree.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix {
    bits: BitVec,
    count: usize,
}

impl AdjacencyMatrix {
    /// Relation over `count` areas with no edges
    pub fn new(count: usize) -> Self {
        Self {
            bits: bitvec![0; count * count],
            count,
        }
    }

    /// Record a symmetric edge between two areas
    pub fn connect(&mut self, a: usize, b: usize) {
        if a < self.count && b < self.count {
            self.bits.set(a * self.count + b, true);
            self.bits.set(b * self.count + a, true);
        }
    }

    /// Whether two areas share an edge
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        a < self.count
            && b < self.count
            && self.bits.get(a * self.count + b).as_deref() == Some(&true)
    }

    /// Areas adjacent to `index`, in ascending index order
    pub fn neighbors(&self, index: usize) -> Vec<usize> {
        (0..self.count)
            .filter(|&other| self.adjacent(index, other))
            .collect()
    }
}

/// Draw the finished partition into the tile grid
///
/// The whole ground starts as street floor; each leaf room then draws its
/// floor interior over it and its wall outline onto the structure layer,
/// leaving the streets as the exposed background.
pub fn rasterize(arena: &Arena, map: &mut Map) {
    map.layer(grid::GROUND).fill(tiles::STREET);
    for (_, area) in arena.areas() {
        if !area.is_leaf() {
            continue;
        }
        let r = area.rect;
        map.layer(grid::GROUND).rectangle(
            Rect::new(r.x + 1, r.y + 1, r.w - 2, r.h - 2),
            tiles::ROOM,
            true,
        );
        map.layer(grid::STRUCTURES).rectangle(r, tiles::WALL2, false);
    }
}

/// Record the structural street adjacencies
///
/// Every street is adjacent to its structural parent. Rooms gain their
/// edges later, when a doorway is placed.
pub fn link_streets(arena: &Arena, adjacency: &mut AdjacencyMatrix) {
    for (index, area) in arena.areas() {
        if area.is_street()
            && let Some(parent) = area.parent
        {
            adjacency.connect(index, parent);
        }
    }
}

/// Door every leaf room into its nearest ancestor street
///
/// Probes the four wall midpoints (top, right, bottom, left) for contact
/// with the street's rectangle; the first open side receives the doorway,
/// the room is marked connected and rerouted through the street. Rooms
/// with no touching ancestor street stay unconnected for the repair pass.
pub fn place_doorways(arena: &mut Arena, adjacency: &mut AdjacencyMatrix, map: &mut Map) {
    for index in arena.leaves() {
        let Some(street) = arena.street_ancestor(index) else {
            continue;
        };
        let Some(street_rect) = arena.get(street).map(|area| area.rect) else {
            continue;
        };
        let Some(r) = arena.get(index).map(|area| area.rect) else {
            continue;
        };
        let (cx, cy) = r.center();
        let probes = [
            ((cx, r.y), (cx, r.y - 1)),
            ((r.right() - 1, cy), (r.right(), cy)),
            ((cx, r.bottom() - 1), (cx, r.bottom())),
            ((r.x, cy), (r.x - 1, cy)),
        ];
        for ((door_x, door_y), (out_x, out_y)) in probes {
            if street_rect.contains(out_x, out_y) {
                map.layer(grid::STRUCTURES).set(door_x, door_y, tiles::DOOR);
                adjacency.connect(index, street);
                if let Some(area) = arena.get_mut(index) {
                    area.connected = true;
                    area.route_parent = Some(street);
                }
                break;
            }
        }
    }
}

/// Link every room the doorway pass missed
///
/// Repeats until a full pass makes no progress: each unconnected room is
/// trimmed by one tile on its trailing edges and tested for edge contact
/// against every already connected room under the same trim; the first
/// contact carries a doorway at the midpoint of the shared wall span.
/// Each pass connects at least one room or the unconnected set is empty,
/// which bounds the loop by the room count.
///
/// # Errors
///
/// Returns [`GenerationError::UnreachableRooms`] when a pass completes
/// without progress while unconnected rooms remain; a well-formed
/// partition cannot reach that state.
pub fn repair_connectivity(
    arena: &mut Arena,
    adjacency: &mut AdjacencyMatrix,
    map: &mut Map,
) -> Result<()> {
    let leaves = arena.leaves();

    // A streetless map has no doorway anchors; its first room seeds the
    // component, tied to its structural parent when one exists.
    if !arena.areas().any(|(_, area)| area.is_street())
        && let Some(&first) = leaves.first()
    {
        if let Some(parent) = arena.get(first).and_then(|area| area.parent) {
            adjacency.connect(first, parent);
        }
        if let Some(area) = arena.get_mut(first) {
            area.connected = true;
        }
    }

    loop {
        let unconnected: Vec<usize> = leaves
            .iter()
            .copied()
            .filter(|&index| arena.get(index).is_some_and(|area| !area.connected))
            .collect();
        if unconnected.is_empty() {
            return Ok(());
        }

        let mut progress = false;
        for index in &unconnected {
            let Some(trimmed) = arena.get(*index).map(|area| area.rect.trimmed()) else {
                continue;
            };
            for other in &leaves {
                if other == index {
                    continue;
                }
                let Some(other_area) = arena.get(*other) else {
                    continue;
                };
                if !other_area.connected {
                    continue;
                }
                let Some(contact) = trimmed.edge_contact(&other_area.rect.trimmed()) else {
                    continue;
                };
                let (door_x, door_y) = contact.midpoint();
                map.layer(grid::STRUCTURES).set(door_x, door_y, tiles::DOOR);
                adjacency.connect(*index, *other);
                let partner = *other;
                if let Some(area) = arena.get_mut(*index) {
                    area.connected = true;
                    area.route_parent = Some(partner);
                }
                progress = true;
                break;
            }
        }

        if !progress {
            let count = leaves
                .iter()
                .filter(|&&index| arena.get(index).is_some_and(|area| !area.connected))
                .count();
            return Err(GenerationError::UnreachableRooms { count });
        }
    }
}
