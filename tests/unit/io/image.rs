//! Tests for PNG export of composited maps

use tilecarve::io::configuration::TILE_PIXELS;
use tilecarve::io::image::{export_map_as_png, tile_color};
use tilecarve::spatial::grid;
use tilecarve::spatial::tiles;
use tilecarve::spatial::Map;

#[test]
fn test_empty_tiles_are_transparent() {
    assert_eq!(tile_color(tiles::NOTHING), [0, 0, 0, 0]);
}

#[test]
fn test_known_tiles_are_opaque_and_distinct_from_gaps() {
    for tile in [tiles::ROOM, tiles::WALL, tiles::DOOR, tiles::KEY] {
        let color = tile_color(tile);
        assert_eq!(color[3], 255, "{tile:?} must be opaque");
    }
    // Symbols outside the vocabulary glow magenta instead of vanishing
    assert_eq!(tile_color('?'), [255, 0, 255, 255]);
}

#[test]
fn test_export_writes_a_scaled_png() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temporary directory must be creatable");
    };
    let path = dir.path().join("map.png");
    let mut map = Map::new(4, 3);
    map.layer(grid::GROUND).fill(tiles::FLOOR);

    let path_str = path.to_string_lossy();
    let result = export_map_as_png(&map, path_str.as_ref());
    assert!(result.is_ok());
    assert!(path.exists());

    let Ok(read_back) = image::open(&path) else {
        unreachable!("the exported PNG must load");
    };
    assert_eq!(read_back.width(), 4 * TILE_PIXELS);
    assert_eq!(read_back.height(), 3 * TILE_PIXELS);
}

#[test]
fn test_export_creates_missing_directories() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temporary directory must be creatable");
    };
    let path = dir.path().join("nested").join("deep").join("map.png");
    let map = Map::new(2, 2);

    let path_str = path.to_string_lossy();
    assert!(export_map_as_png(&map, path_str.as_ref()).is_ok());
    assert!(path.exists());
}
