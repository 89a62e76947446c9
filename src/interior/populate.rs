//! Population scattering by distance from the main route
//!
//! Quiet corners get busy: every room and street receives its distance
//! from the critical path minus one population markers, so density grows
//! the farther an area sits from the primary progression route.

use rand::Rng;
use rand::rngs::StdRng;

use crate::interior::partition::{Arena, Axis};
use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::{Map, Rect};

/// Walkable interior of an area
///
/// Rooms lose their wall border; streets lose their two end caps.
const fn interior(rect: Rect, street_axis: Option<Axis>) -> Rect {
    match street_axis {
        Some(Axis::Vertical) => Rect::new(rect.x, rect.y + 1, rect.w, rect.h - 2),
        Some(Axis::Horizontal) => Rect::new(rect.x + 1, rect.y, rect.w - 2, rect.h),
        None => Rect::new(rect.x + 1, rect.y + 1, rect.w - 2, rect.h - 2),
    }
}

/// Scatter population markers over rooms and streets
///
/// Each marker takes a random free interior tile; occupied or structural
/// tiles are skipped, with a bounded number of attempts per marker so
/// crowded interiors cannot stall generation.
pub fn scatter_population(
    arena: &Arena,
    distance: &[usize],
    map: &mut Map,
    rng: &mut StdRng,
) {
    for (index, area) in arena.areas() {
        if !area.is_leaf() && !area.is_street() {
            continue;
        }
        let spread = interior(area.rect, area.street_axis);
        if spread.w <= 0 || spread.h <= 0 {
            continue;
        }
        let count = distance.get(index).copied().unwrap_or(0).saturating_sub(1);
        for _ in 0..count {
            for _ in 0..8 {
                let x = spread.x + rng.random_range(0..spread.w);
                let y = spread.y + rng.random_range(0..spread.h);
                let open = map.layer(grid::CHARACTERS).get(x, y) == tiles::NOTHING
                    && map.layer(grid::FURNITURE).get(x, y) == tiles::NOTHING
                    && map.layer(grid::STRUCTURES).get(x, y) == tiles::NOTHING;
                if open {
                    map.layer(grid::CHARACTERS).set(x, y, tiles::PERSON);
                    break;
                }
            }
        }
    }
}
