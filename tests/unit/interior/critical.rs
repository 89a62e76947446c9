//! Tests for endpoint selection, path marking and distance labeling

use rand::SeedableRng;
use rand::rngs::StdRng;

use tilecarve::interior::connect::{
    AdjacencyMatrix, link_streets, place_doorways, rasterize, repair_connectivity,
};
use tilecarve::interior::critical::{distance_from_path, mark_critical_path};
use tilecarve::interior::partition::{Area, Arena, build_tree, subdivide_leaves};
use tilecarve::spatial::grid;
use tilecarve::spatial::tiles;
use tilecarve::spatial::Map;

fn connected_layout(width: i32, height: i32, seed: u64) -> (Arena, AdjacencyMatrix, Map) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut arena = build_tree(width, height, 3, 5, 1, &mut rng);
    subdivide_leaves(&mut arena, 5, &mut rng);
    let mut map = Map::new(width, height);
    rasterize(&arena, &mut map);
    let mut adjacency = AdjacencyMatrix::new(arena.len());
    link_streets(&arena, &mut adjacency);
    place_doorways(&mut arena, &mut adjacency, &mut map);
    let repaired = repair_connectivity(&mut arena, &mut adjacency, &mut map);
    assert!(repaired.is_ok());
    (arena, adjacency, map)
}

#[test]
fn test_stairs_land_in_both_halves() {
    let (mut arena, _, mut map) = connected_layout(12, 5, 3);
    mark_critical_path(&mut arena, &mut map);

    let structures = map.layer_ref(grid::STRUCTURES);
    // Deepest leaves of the two branches are the rooms themselves
    assert!(structures.is_some_and(|layer| layer.get(2, 2) == tiles::STAIRS_UP));
    assert!(structures.is_some_and(|layer| layer.get(9, 2) == tiles::STAIRS_DOWN));
}

#[test]
fn test_route_streets_are_marked_critical() {
    let (mut arena, _, mut map) = connected_layout(32, 32, 42);
    mark_critical_path(&mut arena, &mut map);

    // The root street carries both endpoint routes
    assert!(arena.get(0).is_some_and(|area| area.on_critical_path));
    // Only streets are ever marked
    for (_, area) in arena.areas() {
        if area.on_critical_path {
            assert!(area.is_street());
        }
    }
    assert_eq!(map.count_symbol(tiles::STAIRS_UP), 1);
    assert_eq!(map.count_symbol(tiles::STAIRS_DOWN), 1);
}

#[test]
fn test_unsplit_root_still_gets_both_stairs() {
    let mut arena = Arena::default();
    arena.push(Area::root(9, 7));
    let mut map = Map::new(9, 7);
    rasterize(&arena, &mut map);
    mark_critical_path(&mut arena, &mut map);

    assert_eq!(map.count_symbol(tiles::STAIRS_UP), 1);
    assert_eq!(map.count_symbol(tiles::STAIRS_DOWN), 1);
    assert!(arena.get(0).is_some_and(|area| area.on_critical_path));
}

#[test]
fn test_distances_grow_away_from_the_path() {
    let (mut arena, adjacency, mut map) = connected_layout(12, 5, 3);
    mark_critical_path(&mut arena, &mut map);
    let distance = distance_from_path(&arena, &adjacency);

    // Street on the path at one, doored rooms one hop out
    assert_eq!(distance.first().copied(), Some(1));
    assert_eq!(distance.get(1).copied(), Some(2));
    assert_eq!(distance.get(2).copied(), Some(2));
}

#[test]
fn test_every_connected_area_is_labeled() {
    let (mut arena, adjacency, mut map) = connected_layout(32, 32, 42);
    mark_critical_path(&mut arena, &mut map);
    let distance = distance_from_path(&arena, &adjacency);

    for leaf in arena.leaves() {
        assert!(
            distance.get(leaf).copied().unwrap_or(0) > 0,
            "leaf {leaf} never received a distance label"
        );
    }
    // Labels on adjacent areas differ by at most one hop
    for (index, _) in arena.areas() {
        let own = distance.get(index).copied().unwrap_or(0);
        if own == 0 {
            continue;
        }
        for neighbor in adjacency.neighbors(index) {
            let other = distance.get(neighbor).copied().unwrap_or(0);
            if other > 0 {
                assert!(own.abs_diff(other) <= 1);
            }
        }
    }
}
