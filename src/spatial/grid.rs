//! Layered tile grid shared by every generation strategy
//!
//! A [`Map`] is an ordered stack of equally sized [`Layer`]s compositing
//! top-to-bottom: the first layer holding a non-[`tiles::NOTHING`] symbol
//! at a coordinate wins, and the final layer acts as the background. Each
//! layer holds at most one symbol per coordinate.

use std::fmt;

use ndarray::Array2;

use crate::spatial::rect::Rect;
use crate::spatial::tiles;

/// Name of the top-most layer, holding people
pub const CHARACTERS: &str = "Characters";
/// Name of the layer holding carried or shelved items
pub const INVENTORY: &str = "Inventory";
/// Name of the layer holding furnishings
pub const FURNITURE: &str = "Furniture";
/// Name of the layer holding walls, doors and stairs
pub const STRUCTURES: &str = "Structures";
/// Name of the background layer
pub const GROUND: &str = "Ground";

/// A single named plane of tile symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Layer name used for lookup within a [`Map`]
    pub name: String,
    width: i32,
    height: i32,
    tiles: Array2<char>,
}

impl Layer {
    /// Create a layer filled with [`tiles::NOTHING`]
    pub fn new(name: &str, width: i32, height: i32) -> Self {
        let rows = usize::try_from(height).unwrap_or(0);
        let cols = usize::try_from(width).unwrap_or(0);
        Self {
            name: name.to_owned(),
            width,
            height,
            tiles: Array2::from_elem((rows, cols), tiles::NOTHING),
        }
    }

    /// Width in tiles
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Whether a coordinate lies within the layer bounds
    pub const fn is_in(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Symbol at a coordinate; out-of-bounds reads yield [`tiles::NOTHING`]
    pub fn get(&self, x: i32, y: i32) -> char {
        if !self.is_in(x, y) {
            return tiles::NOTHING;
        }
        self.tiles
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(tiles::NOTHING)
    }

    /// Place a symbol at a coordinate; out-of-bounds writes are dropped
    pub fn set(&mut self, x: i32, y: i32, tile: char) {
        if !self.is_in(x, y) {
            return;
        }
        if let Some(cell) = self.tiles.get_mut((y as usize, x as usize)) {
            *cell = tile;
        }
    }

    /// Fill the whole layer with one symbol
    pub fn fill(&mut self, tile: char) {
        self.tiles.fill(tile);
    }

    /// Draw a rectangle, either filled or as a one-tile outline
    pub fn rectangle(&mut self, rect: Rect, tile: char, filled: bool) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if filled
                    || x == rect.x
                    || x == rect.right() - 1
                    || y == rect.y
                    || y == rect.bottom() - 1
                {
                    self.set(x, y, tile);
                }
            }
        }
    }

    /// Whether a rectangular region holds only [`tiles::NOTHING`]
    ///
    /// Regions reaching outside the layer are not clear.
    pub fn is_clear(&self, x: i32, y: i32, w: i32, h: i32) -> bool {
        for yi in y..y + h {
            for xi in x..x + w {
                if !self.is_in(xi, yi) || self.get(xi, yi) != tiles::NOTHING {
                    return false;
                }
            }
        }
        true
    }

    /// Count matching symbols within a square radius of a coordinate
    ///
    /// Positions outside the layer count as matches, so map borders behave
    /// like solid tiles for neighbourhood rules.
    pub fn count_tiles(&self, x: i32, y: i32, radius: i32, tile: char) -> usize {
        let mut count = 0;
        for yi in y - radius..=y + radius {
            for xi in x - radius..=x + radius {
                if !self.is_in(xi, yi) || self.get(xi, yi) == tile {
                    count += 1;
                }
            }
        }
        count
    }
}

/// An ordered stack of equally sized tile layers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    layers: Vec<Layer>,
    width: i32,
    height: i32,
}

impl Map {
    /// Create a map with the standard layer stack
    ///
    /// Layers are ordered front-to-back: Characters, Inventory, Furniture,
    /// Structures, Ground. Ground is the fallback shown where every other
    /// layer is empty.
    pub fn new(width: i32, height: i32) -> Self {
        let layers = [CHARACTERS, INVENTORY, FURNITURE, STRUCTURES, GROUND]
            .iter()
            .map(|name| Layer::new(name, width, height))
            .collect();
        Self {
            layers,
            width,
            height,
        }
    }

    /// Width in tiles
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in tiles
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Whether a coordinate lies within the map bounds
    pub const fn is_in(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get a layer by name, creating it as a new background layer if absent
    ///
    /// # Panics
    ///
    /// Never panics in practice: the looked-up index always refers to a
    /// found or freshly appended layer.
    pub fn layer(&mut self, name: &str) -> &mut Layer {
        let idx = match self.layers.iter().position(|l| l.name == name) {
            Some(idx) => idx,
            None => {
                self.layers.push(Layer::new(name, self.width, self.height));
                self.layers.len() - 1
            }
        };
        match self.layers.get_mut(idx) {
            Some(layer) => layer,
            None => unreachable!("layer lookup after insertion"),
        }
    }

    /// Borrow a layer by name without creating it
    pub fn layer_ref(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name == name)
    }

    /// Top-most non-empty symbol at a coordinate
    ///
    /// The last layer supplies the symbol when every other layer is empty.
    pub fn composite(&self, x: i32, y: i32) -> char {
        let last = self.layers.len().saturating_sub(1);
        for (index, layer) in self.layers.iter().enumerate() {
            let tile = layer.get(x, y);
            if index == last || tile != tiles::NOTHING {
                return tile;
            }
        }
        tiles::NOTHING
    }

    /// Count occurrences of a symbol across all layers
    pub fn count_symbol(&self, tile: char) -> usize {
        let mut count = 0;
        for layer in &self.layers {
            for y in 0..self.height {
                for x in 0..self.width {
                    if layer.get(x, y) == tile {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

impl fmt::Display for Map {
    /// Composite the layer stack into framed ASCII art
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let horizontal: String = std::iter::repeat_n('-', self.width.max(0) as usize).collect();
        writeln!(f, "+{horizontal}+")?;
        for y in 0..self.height {
            write!(f, "|")?;
            for x in 0..self.width {
                write!(f, "{}", self.composite(x, y))?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+{horizontal}+")
    }
}
