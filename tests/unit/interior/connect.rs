//! Tests for rasterization, doorway placement and connectivity repair

use rand::SeedableRng;
use rand::rngs::StdRng;

use tilecarve::interior::connect::{
    AdjacencyMatrix, link_streets, place_doorways, rasterize, repair_connectivity,
};
use tilecarve::interior::partition::{Area, Arena, build_tree};
use tilecarve::spatial::grid;
use tilecarve::spatial::tiles;
use tilecarve::spatial::{Map, Rect};

/// The deterministic 12x5 single-split layout: rooms at indices 1 and 2
/// around the street at index 0
fn single_split() -> Arena {
    let mut rng = StdRng::seed_from_u64(3);
    build_tree(12, 5, 3, 5, 1, &mut rng)
}

#[test]
fn test_adjacency_matrix_is_symmetric() {
    let mut adjacency = AdjacencyMatrix::new(4);
    assert!(!adjacency.adjacent(1, 2));
    adjacency.connect(1, 2);
    assert!(adjacency.adjacent(1, 2));
    assert!(adjacency.adjacent(2, 1));
    assert_eq!(adjacency.neighbors(1), vec![2]);
    assert_eq!(adjacency.neighbors(3), Vec::<usize>::new());

    // Out-of-range edges are dropped
    adjacency.connect(1, 9);
    assert!(!adjacency.adjacent(1, 9));
}

#[test]
fn test_rasterization_draws_rooms_over_street_ground() {
    let arena = single_split();
    let mut map = Map::new(12, 5);
    rasterize(&arena, &mut map);

    // The street column stays exposed corridor floor
    let ground = map.layer_ref(grid::GROUND);
    assert!(ground.is_some_and(|layer| layer.get(5, 2) == tiles::STREET));
    // Room interiors are floor, their outlines wall
    assert!(ground.is_some_and(|layer| layer.get(2, 2) == tiles::ROOM));
    let structures = map.layer_ref(grid::STRUCTURES);
    assert!(structures.is_some_and(|layer| layer.get(0, 0) == tiles::WALL2));
    assert!(structures.is_some_and(|layer| layer.get(4, 2) == tiles::WALL2));
    // Nothing is drawn on the street column itself
    assert!(structures.is_some_and(|layer| layer.get(5, 2) == tiles::NOTHING));
}

#[test]
fn test_streets_link_to_structural_parents() {
    let mut rng = StdRng::seed_from_u64(42);
    let arena = build_tree(32, 32, 3, 5, 1, &mut rng);
    let mut adjacency = AdjacencyMatrix::new(arena.len());
    link_streets(&arena, &mut adjacency);
    for (index, area) in arena.areas() {
        if area.is_street()
            && let Some(parent) = area.parent
        {
            assert!(adjacency.adjacent(index, parent));
        }
    }
}

#[test]
fn test_doorways_open_into_the_parent_street() {
    let mut arena = single_split();
    let mut map = Map::new(12, 5);
    rasterize(&arena, &mut map);
    let mut adjacency = AdjacencyMatrix::new(arena.len());
    link_streets(&arena, &mut adjacency);
    place_doorways(&mut arena, &mut adjacency, &mut map);

    // Both rooms door onto the street column through their side walls
    let structures = map.layer_ref(grid::STRUCTURES);
    assert!(structures.is_some_and(|layer| layer.get(4, 2) == tiles::DOOR));
    assert!(structures.is_some_and(|layer| layer.get(6, 2) == tiles::DOOR));
    for leaf in arena.leaves() {
        let area = arena.get(leaf);
        assert!(area.is_some_and(|a| a.connected));
        assert!(area.is_some_and(|a| a.route_parent == Some(0)));
        assert!(adjacency.adjacent(leaf, 0));
    }
}

#[test]
fn test_repair_links_overlapping_siblings() {
    // Two rooms sharing one wall column under a streetless root: the
    // seed room anchors the component, the repair pass doors the other
    let mut arena = Arena::default();
    arena.push(Area::root(11, 5));
    let first = arena.push(Area::child(Rect::new(0, 0, 6, 5), 0, 1));
    let second = arena.push(Area::child(Rect::new(5, 0, 6, 5), 0, 1));
    if let Some(root) = arena.get_mut(0) {
        root.children = Some([first, second]);
    }

    let mut map = Map::new(11, 5);
    rasterize(&arena, &mut map);
    let mut adjacency = AdjacencyMatrix::new(arena.len());
    link_streets(&arena, &mut adjacency);
    place_doorways(&mut arena, &mut adjacency, &mut map);
    let repaired = repair_connectivity(&mut arena, &mut adjacency, &mut map);
    assert!(repaired.is_ok());

    assert!(arena.get(first).is_some_and(|area| area.connected));
    assert!(arena.get(second).is_some_and(|area| area.connected));
    assert!(adjacency.adjacent(first, second));
    // The doorway sits on the shared wall column
    let structures = map.layer_ref(grid::STRUCTURES);
    assert!(structures.is_some_and(|layer| layer.get(5, 1) == tiles::DOOR));
    // The second room reroutes through its repair partner
    assert!(
        arena
            .get(second)
            .is_some_and(|area| area.route_parent == Some(first))
    );
}

#[test]
fn test_repair_reports_unreachable_rooms() {
    // Two rooms with a gap between them can never be repaired
    let mut arena = Arena::default();
    arena.push(Area::root(20, 5));
    let first = arena.push(Area::child(Rect::new(0, 0, 5, 5), 0, 1));
    let second = arena.push(Area::child(Rect::new(10, 0, 5, 5), 0, 1));
    if let Some(root) = arena.get_mut(0) {
        root.children = Some([first, second]);
    }

    let mut map = Map::new(20, 5);
    rasterize(&arena, &mut map);
    let mut adjacency = AdjacencyMatrix::new(arena.len());
    place_doorways(&mut arena, &mut adjacency, &mut map);
    let result = repair_connectivity(&mut arena, &mut adjacency, &mut map);
    assert!(matches!(
        result,
        Err(tilecarve::GenerationError::UnreachableRooms { count: 1 })
    ));
}
