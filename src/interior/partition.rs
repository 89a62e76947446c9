//! Binary space partitioning with corridor reservation
//!
//! Grows a strict binary tree of areas inside a flat append-only arena.
//! Split axes alternate with depth, every successful split reserves room
//! for a corridor between the two children, and the split parent is
//! retagged as a street occupying exactly the reserved gap. A second pass
//! subdivides the remaining leaves so one partition cell can yield two
//! adjoining rooms.

use rand::Rng;
use rand::rngs::StdRng;

use crate::spatial::Rect;

/// Split axis, which also fixes the carved corridor's run direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Cut along the width; the freed corridor runs vertically
    Horizontal,
    /// Cut along the height; the freed corridor runs horizontally
    Vertical,
}

impl Axis {
    /// The perpendicular axis
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Axis used at a partition depth, alternating from a starting parity
    pub const fn for_level(level: usize, parity: usize) -> Self {
        if (level + parity) % 2 == 0 {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}

/// One node of the partition arena
///
/// Indices into the arena are identities; the structural `parent` and
/// `children` links never change once the tree is built, while
/// `route_parent` tracks the connectivity graph and is reassigned when a
/// doorway is placed.
#[derive(Debug, Clone)]
pub struct Area {
    /// Covered rectangle; replaced by the corridor gap on streets
    pub rect: Rect,
    /// Structural parent in the partition tree
    pub parent: Option<usize>,
    /// Child pair produced by a successful split
    pub children: Option<[usize; 2]>,
    /// Depth in the partition tree, root at zero
    pub level: usize,
    /// Corridor run direction; present only once retagged as a street
    pub street_axis: Option<Axis>,
    /// Parent in the connectivity graph
    pub route_parent: Option<usize>,
    /// Whether a doorway connects this area to the rest of the map
    pub connected: bool,
    /// Whether this area lies on the main progression route
    pub on_critical_path: bool,
}

impl Area {
    /// Root area covering the whole map
    pub const fn root(width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(0, 0, width, height),
            parent: None,
            children: None,
            level: 0,
            street_axis: None,
            route_parent: None,
            connected: false,
            on_critical_path: false,
        }
    }

    /// Fresh child area below `parent`
    pub const fn child(rect: Rect, parent: usize, level: usize) -> Self {
        Self {
            rect,
            parent: Some(parent),
            children: None,
            level,
            street_axis: None,
            route_parent: Some(parent),
            connected: false,
            on_critical_path: false,
        }
    }

    /// Whether the area has no children
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// Whether the area was retagged as a corridor
    pub const fn is_street(&self) -> bool {
        self.street_axis.is_some()
    }
}

/// Flat append-only arena of partition areas
#[derive(Debug, Default)]
pub struct Arena {
    areas: Vec<Area>,
}

impl Arena {
    /// Number of areas
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Whether the arena holds no areas
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Append an area, returning its index
    pub fn push(&mut self, area: Area) -> usize {
        self.areas.push(area);
        self.areas.len() - 1
    }

    /// Area at an index
    pub fn get(&self, index: usize) -> Option<&Area> {
        self.areas.get(index)
    }

    /// Mutable area at an index
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Area> {
        self.areas.get_mut(index)
    }

    /// Iterate areas with their indices
    pub fn areas(&self) -> impl Iterator<Item = (usize, &Area)> {
        self.areas.iter().enumerate()
    }

    /// Indices of all leaf rooms
    pub fn leaves(&self) -> Vec<usize> {
        self.areas()
            .filter(|(_, area)| area.is_leaf())
            .map(|(index, _)| index)
            .collect()
    }

    /// Nearest ancestor of an area that is a street
    ///
    /// Follows the immutable structural parent links.
    pub fn street_ancestor(&self, index: usize) -> Option<usize> {
        let mut cursor = self.get(index).and_then(|area| area.parent);
        while let Some(current) = cursor {
            let area = self.get(current)?;
            if area.is_street() {
                return Some(current);
            }
            cursor = area.parent;
        }
        None
    }
}

/// Attempt to cut a rectangle in two along an axis
///
/// The cut offset is drawn uniformly so both halves keep at least
/// `min_size` along the split axis; `None` means the rectangle is too
/// small, which permanently ends growth on that branch.
pub fn split_rect(
    rect: Rect,
    axis: Axis,
    min_size: i32,
    rng: &mut StdRng,
) -> Option<(Rect, Rect)> {
    let dimension = match axis {
        Axis::Horizontal => rect.w,
        Axis::Vertical => rect.h,
    };
    let spare = dimension - min_size * 2;
    if spare < 0 {
        return None;
    }
    let offset = min_size + rng.random_range(0..=spare);
    match axis {
        Axis::Horizontal => Some((
            Rect::new(rect.x, rect.y, offset, rect.h),
            Rect::new(rect.x + offset, rect.y, rect.w - offset, rect.h),
        )),
        Axis::Vertical => Some((
            Rect::new(rect.x, rect.y, rect.w, offset),
            Rect::new(rect.x, rect.y + offset, rect.w, rect.h - offset),
        )),
    }
}

/// Grow the partition tree by repeated alternating-axis splits
///
/// The arena doubles as the worklist: each visited area either produces
/// two children (and becomes a street occupying the reserved gap) or
/// stays a leaf forever. Because areas are appended in breadth-first
/// order, growth stops at the first area of the requested depth.
pub fn build_tree(
    width: i32,
    height: i32,
    split_count: usize,
    min_room_size: i32,
    corridor_width: i32,
    rng: &mut StdRng,
) -> Arena {
    // Cut the longer map axis first; every level below alternates
    let parity = usize::from(height > width);
    let mut arena = Arena::default();
    arena.push(Area::root(width, height));

    let mut index = 0;
    while index < arena.len() {
        let Some(area) = arena.get(index) else { break };
        if area.level >= split_count {
            break;
        }
        let rect = area.rect;
        let level = area.level;
        let axis = Axis::for_level(level, parity);
        // Reserve corridor width on top of the room minimum so carving
        // can never push a child below min_room_size
        if let Some((r1, r2)) = split_rect(rect, axis, min_room_size + corridor_width, rng) {
            let (first, second, gap) = carve_street(rect, r1, r2, axis, corridor_width);
            let c1 = arena.push(Area::child(first, index, level + 1));
            let c2 = arena.push(Area::child(second, index, level + 1));
            if let Some(parent) = arena.get_mut(index) {
                parent.children = Some([c1, c2]);
                parent.rect = gap;
                parent.street_axis = Some(axis.perpendicular());
            }
        }
        index += 1;
    }
    arena
}

/// Shrink a split's children to free the reserved corridor gap
///
/// Each unit of corridor width is absorbed alternately by child1's
/// trailing edge and child2's leading edge, keeping the corridor
/// centered on the cut. Returns the adjusted children and the gap
/// rectangle left between them.
fn carve_street(
    parent: Rect,
    mut r1: Rect,
    mut r2: Rect,
    axis: Axis,
    corridor_width: i32,
) -> (Rect, Rect, Rect) {
    for unit in 0..corridor_width {
        if unit % 2 == 0 {
            match axis {
                Axis::Horizontal => r1.w -= 1,
                Axis::Vertical => r1.h -= 1,
            }
        } else {
            match axis {
                Axis::Horizontal => {
                    r2.x += 1;
                    r2.w -= 1;
                }
                Axis::Vertical => {
                    r2.y += 1;
                    r2.h -= 1;
                }
            }
        }
    }
    let gap = match axis {
        Axis::Horizontal => Rect::new(r1.right(), parent.y, corridor_width, parent.h),
        Axis::Vertical => Rect::new(parent.x, r1.bottom(), parent.w, corridor_width),
    };
    (r1, r2, gap)
}

/// Split every leaf once more along its longer axis
///
/// No corridor is reserved here; instead the first child is widened by
/// one tile so the two rooms share a wall line. That one-tile overlap is
/// what the connectivity repair pass later searches for a doorway. A
/// failed split silently leaves the leaf as a single room.
pub fn subdivide_leaves(arena: &mut Arena, min_room_size: i32, rng: &mut StdRng) {
    let bound = arena.len();
    for index in 0..bound {
        let Some(area) = arena.get(index) else { continue };
        if !area.is_leaf() {
            continue;
        }
        let rect = area.rect;
        let level = area.level;
        let axis = if rect.w >= rect.h {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        let Some((mut r1, r2)) = split_rect(rect, axis, min_room_size, rng) else {
            continue;
        };
        match axis {
            Axis::Horizontal => r1.w += 1,
            Axis::Vertical => r1.h += 1,
        }
        let c1 = arena.push(Area::child(r1, index, level + 1));
        let c2 = arena.push(Area::child(r2, index, level + 1));
        if let Some(parent) = arena.get_mut(index) {
            parent.children = Some([c1, c2]);
        }
    }
}
