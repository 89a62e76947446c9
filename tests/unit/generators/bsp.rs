//! Tests for the plain BSP dungeon generator

use rand::SeedableRng;
use rand::rngs::StdRng;

use tilecarve::generators::bsp::generate;
use tilecarve::spatial::tiles;

#[test]
fn test_dungeon_contains_walled_rooms() {
    let mut rng = StdRng::seed_from_u64(17);
    let result = generate(32, 32, 4, &mut rng);
    assert!(result.is_ok());
    let Ok(map) = result else { return };
    assert!(map.count_symbol(tiles::WALL2) > 0, "rooms carry wall outlines");
    assert!(map.count_symbol(tiles::ROOM) > 0, "rooms carry floor interiors");
}

#[test]
fn test_single_iteration_keeps_one_cell() {
    // One iteration stops before any split, leaving a single room
    let mut rng = StdRng::seed_from_u64(5);
    let Ok(map) = generate(12, 10, 1, &mut rng) else {
        unreachable!("dungeon generation must succeed");
    };
    assert!(map.count_symbol(tiles::WALL2) > 0);
}

#[test]
fn test_dungeon_is_deterministic() {
    let mut first_rng = StdRng::seed_from_u64(8);
    let mut second_rng = StdRng::seed_from_u64(8);
    let (Ok(a), Ok(b)) = (
        generate(28, 20, 4, &mut first_rng),
        generate(28, 20, 4, &mut second_rng),
    ) else {
        unreachable!("dungeon generation must succeed");
    };
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn test_tiny_map_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    assert!(generate(2, 8, 3, &mut rng).is_err());
}
