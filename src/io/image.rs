//! PNG export of composited tile maps

use image::{ImageBuffer, Rgba};

use crate::io::configuration::TILE_PIXELS;
use crate::io::error::GenerationError;
use crate::spatial::Map;
use crate::spatial::tiles;

/// Display colour of a tile symbol
///
/// Unknown symbols render as magenta so vocabulary gaps stay visible in
/// the output rather than silently disappearing.
pub const fn tile_color(tile: char) -> [u8; 4] {
    match tile {
        tiles::NOTHING => [0, 0, 0, 0],
        tiles::FLOOR => [120, 110, 100, 255],
        tiles::FLOOR2 => [150, 140, 120, 255],
        tiles::ROOM => [190, 170, 140, 255],
        tiles::STREET => [110, 110, 115, 255],
        tiles::WALL | tiles::WALL2 => [60, 55, 50, 255],
        tiles::DOOR => [160, 110, 50, 255],
        tiles::DOOR_LOCKED => [160, 50, 40, 255],
        tiles::KEY => [230, 200, 60, 255],
        tiles::STAIRS_UP => [240, 240, 240, 255],
        tiles::STAIRS_DOWN => [40, 40, 45, 255],
        tiles::GRASS => [80, 140, 70, 255],
        tiles::ROAD => [140, 130, 120, 255],
        tiles::TREE => [40, 90, 45, 255],
        tiles::SIGN | tiles::HANGING => [180, 150, 90, 255],
        tiles::WINDOW => [150, 200, 220, 255],
        tiles::COUNTER | tiles::SHELF | tiles::TABLE => [130, 90, 50, 255],
        tiles::STOCK => [200, 120, 160, 255],
        tiles::RUG => [150, 60, 60, 255],
        tiles::CHAIR => [110, 75, 45, 255],
        tiles::POT => [100, 100, 60, 255],
        tiles::SHOPKEEPER | tiles::ASSISTANT => [60, 90, 170, 255],
        tiles::PERSON => [200, 170, 120, 255],
        _ => [255, 0, 255, 255],
    }
}

/// Export the composited map as a PNG image
///
/// Every tile becomes a square of [`TILE_PIXELS`] pixels using the
/// top-most non-empty symbol of the layer stack.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be saved to the specified path.
pub fn export_map_as_png(map: &Map, output_path: &str) -> crate::io::error::Result<()> {
    let width = map.width().max(0) as u32 * TILE_PIXELS;
    let height = map.height().max(0) as u32 * TILE_PIXELS;
    let mut img = ImageBuffer::new(width, height);

    for y in 0..map.height() {
        for x in 0..map.width() {
            let color = tile_color(map.composite(x, y));
            let pixel = Rgba(color);
            for py in 0..TILE_PIXELS {
                for px in 0..TILE_PIXELS {
                    img.put_pixel(
                        x as u32 * TILE_PIXELS + px,
                        y as u32 * TILE_PIXELS + py,
                        pixel,
                    );
                }
            }
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
