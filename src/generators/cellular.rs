//! Cellular-automata cave generation
//!
//! Seeds a percentage of the map with stone, smooths it with a two-radius
//! neighbourhood rule, then labels the remaining open areas by flood fill
//! and joins them with corridors so the cave is one connected space.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::generators::carve_corridor;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid;
use crate::spatial::tiles;
use crate::spatial::{Layer, Map};

/// One smoothing repetition
///
/// A tile turns to stone when at least `rule_one` stones sit within one
/// step of it, or at most `rule_two` stones sit within two steps (which
/// seals off open pockets); otherwise it opens up.
fn smooth(structures: &mut Layer, rule_one: usize, rule_two: usize) {
    let width = structures.width();
    let height = structures.height();
    let mut buffer = Layer::new(&structures.name, width, height);
    for y in 0..height {
        for x in 0..width {
            let stone = structures.count_tiles(x, y, 1, tiles::WALL) >= rule_one
                || structures.count_tiles(x, y, 2, tiles::WALL) <= rule_two;
            if stone {
                buffer.set(x, y, tiles::WALL);
            }
        }
    }
    *structures = buffer;
}

/// Label connected open areas by breadth-first flood fill
///
/// Returns one label per tile (`None` on stone) and the number of areas.
fn label_areas(structures: &Layer) -> (Vec<Option<usize>>, usize) {
    let width = structures.width();
    let height = structures.height();
    let total = (width * height).max(0) as usize;
    let mut labels: Vec<Option<usize>> = vec![None; total];
    let mut areas = 0;

    let index_of = |x: i32, y: i32| (y * width + x) as usize;

    for start_y in 0..height {
        for start_x in 0..width {
            if structures.get(start_x, start_y) == tiles::WALL
                || labels.get(index_of(start_x, start_y)).copied().flatten().is_some()
            {
                continue;
            }
            let mut frontier = vec![(start_x, start_y)];
            while let Some((x, y)) = frontier.pop() {
                if !structures.is_in(x, y) || structures.get(x, y) == tiles::WALL {
                    continue;
                }
                let Some(slot) = labels.get_mut(index_of(x, y)) else {
                    continue;
                };
                if slot.is_some() {
                    continue;
                }
                *slot = Some(areas);
                frontier.push((x, y - 1));
                frontier.push((x + 1, y));
                frontier.push((x, y + 1));
                frontier.push((x - 1, y));
            }
            areas += 1;
        }
    }
    (labels, areas)
}

/// Generate a stone cave and connect its open areas
///
/// # Errors
///
/// Returns an error when the dimensions or fill percentage cannot seed a
/// meaningful cave.
pub fn generate(
    width: i32,
    height: i32,
    fill_percent: i32,
    repetitions: usize,
    rule_one: usize,
    rule_two: usize,
    rng: &mut StdRng,
) -> Result<Map> {
    if width < 3 || height < 3 {
        return Err(invalid_parameter(
            "width/height",
            &format!("{width}x{height}"),
            &"the cave needs room for at least one open tile",
        ));
    }
    if !(0..=100).contains(&fill_percent) {
        return Err(invalid_parameter(
            "fill_percent",
            &fill_percent,
            &"must be a percentage between 0 and 100",
        ));
    }

    let mut map = Map::new(width, height);
    map.layer(grid::GROUND).fill(tiles::FLOOR);

    // Random stone seed: exactly fill_percent of the tiles, shuffled
    let mut positions: Vec<(i32, i32)> = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .collect();
    positions.shuffle(rng);
    let stones = (fill_percent * width * height / 100).max(0) as usize;
    {
        let structures = map.layer(grid::STRUCTURES);
        for &(x, y) in positions.iter().take(stones) {
            structures.set(x, y, tiles::WALL);
        }
        for _ in 0..repetitions {
            smooth(structures, rule_one, rule_two);
        }
    }

    // Join the disconnected areas: a random representative tile of each
    // area, connected first to second, second to third, and so on
    let (labels, areas) = {
        let structures = map.layer(grid::STRUCTURES);
        label_areas(structures)
    };
    let mut starts: Vec<Option<(i32, i32)>> = vec![None; areas];
    for &(x, y) in &positions {
        let index = (y * width + x) as usize;
        if let Some(area) = labels.get(index).copied().flatten()
            && let Some(slot) = starts.get_mut(area)
            && slot.is_none()
        {
            *slot = Some((x, y));
        }
    }
    let anchors: Vec<(i32, i32)> = starts.into_iter().flatten().collect();
    for pair in anchors.windows(2) {
        if let [from, to] = pair {
            carve_corridor(&mut map, *from, *to, tiles::FLOOR);
        }
    }

    Ok(map)
}
