//! Tests for the layered tile grid and its compositing rules

use tilecarve::spatial::grid;
use tilecarve::spatial::tiles;
use tilecarve::spatial::{Layer, Map, Rect};

#[test]
fn test_layer_reads_and_writes() {
    let mut layer = Layer::new("Test", 4, 3);
    assert_eq!(layer.get(1, 1), tiles::NOTHING);
    layer.set(1, 1, tiles::WALL);
    assert_eq!(layer.get(1, 1), tiles::WALL);

    // Out-of-bounds access is inert
    layer.set(-1, 0, tiles::WALL);
    layer.set(4, 0, tiles::WALL);
    assert_eq!(layer.get(-1, 0), tiles::NOTHING);
    assert_eq!(layer.get(4, 0), tiles::NOTHING);
}

#[test]
fn test_layer_fill_and_clear_check() {
    let mut layer = Layer::new("Test", 3, 3);
    assert!(layer.is_clear(0, 0, 3, 3));
    layer.fill(tiles::FLOOR);
    assert!(!layer.is_clear(0, 0, 1, 1));
    // Regions reaching outside the layer are never clear
    let empty = Layer::new("Empty", 3, 3);
    assert!(!empty.is_clear(2, 2, 2, 2));
}

#[test]
fn test_rectangle_outline_leaves_interior() {
    let mut layer = Layer::new("Test", 5, 5);
    layer.rectangle(Rect::new(0, 0, 5, 5), tiles::WALL, false);
    assert_eq!(layer.get(0, 0), tiles::WALL);
    assert_eq!(layer.get(4, 4), tiles::WALL);
    assert_eq!(layer.get(2, 0), tiles::WALL);
    assert_eq!(layer.get(2, 2), tiles::NOTHING);

    layer.rectangle(Rect::new(1, 1, 3, 3), tiles::ROOM, true);
    assert_eq!(layer.get(2, 2), tiles::ROOM);
    assert_eq!(layer.get(1, 1), tiles::ROOM);
}

#[test]
fn test_count_tiles_treats_borders_as_matches() {
    let layer = Layer::new("Test", 3, 3);
    // The 3x3 neighbourhood of a corner holds five off-map positions
    assert_eq!(layer.count_tiles(0, 0, 1, tiles::WALL), 5);
    // Interior neighbourhood of an empty layer holds no walls
    assert_eq!(layer.count_tiles(1, 1, 1, tiles::WALL), 0);
}

#[test]
fn test_standard_layer_stack_composites_top_down() {
    let mut map = Map::new(3, 3);
    // Ground is the fallback even while empty
    assert_eq!(map.composite(1, 1), tiles::NOTHING);

    map.layer(grid::GROUND).fill(tiles::FLOOR);
    assert_eq!(map.composite(1, 1), tiles::FLOOR);

    map.layer(grid::STRUCTURES).set(1, 1, tiles::WALL);
    assert_eq!(map.composite(1, 1), tiles::WALL);

    map.layer(grid::CHARACTERS).set(1, 1, tiles::PERSON);
    assert_eq!(map.composite(1, 1), tiles::PERSON);
}

#[test]
fn test_layer_lookup_creates_missing_layers() {
    let mut map = Map::new(2, 2);
    assert!(map.layer_ref("Scratch").is_none());
    map.layer("Scratch").set(0, 0, tiles::TREE);
    let created = map.layer_ref("Scratch");
    assert!(created.is_some_and(|layer| layer.get(0, 0) == tiles::TREE));
}

#[test]
fn test_symbol_counting_spans_all_layers() {
    let mut map = Map::new(3, 3);
    map.layer(grid::GROUND).set(0, 0, tiles::KEY);
    map.layer(grid::FURNITURE).set(2, 2, tiles::KEY);
    assert_eq!(map.count_symbol(tiles::KEY), 2);
}

#[test]
fn test_render_frames_the_composite() {
    let mut map = Map::new(3, 2);
    map.layer(grid::GROUND).fill(tiles::FLOOR);
    map.layer(grid::STRUCTURES).set(1, 0, tiles::WALL);
    let rendered = map.to_string();
    assert_eq!(rendered, "+---+\n|fwf|\n|fff|\n+---+\n");
}
