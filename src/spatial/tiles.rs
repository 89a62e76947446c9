//! Tile symbol vocabulary shared by all layers
//!
//! Every layer stores plain `char` symbols; generators agree on this
//! vocabulary so that rendering and export stay strategy-independent.
//! `NOTHING` marks the absence of a tile and lets lower layers show
//! through when compositing.

/// Absence of a tile
pub const NOTHING: char = ' ';
/// Generic floor
pub const FLOOR: char = 'f';
/// Floor worn down by walking
pub const FLOOR2: char = 'F';
/// Room floor
pub const ROOM: char = '.';
/// Street or corridor floor
pub const STREET: char = '#';
/// Exterior wall
pub const WALL: char = 'w';
/// Interior wall
pub const WALL2: char = 'W';
/// Ordinary doorway
pub const DOOR: char = '+';
/// Locked doorway
pub const DOOR_LOCKED: char = 'D';
/// Key opening a locked doorway
pub const KEY: char = 'k';
/// Ascending staircase
pub const STAIRS_UP: char = '<';
/// Descending staircase
pub const STAIRS_DOWN: char = '>';
/// Grass
pub const GRASS: char = ',';
/// Road
pub const ROAD: char = 'r';
/// Tree
pub const TREE: char = 't';
/// Sign
pub const SIGN: char = 'S';
/// Window
pub const WINDOW: char = 'o';
/// Wall hanging
pub const HANGING: char = 'n';
/// Shop counter
pub const COUNTER: char = 'c';
/// Shelf
pub const SHELF: char = 'T';
/// Stock sitting on a shelf
pub const STOCK: char = 'i';
/// Rug
pub const RUG: char = '~';
/// Table
pub const TABLE: char = 'm';
/// Chair
pub const CHAIR: char = 'h';
/// Pot
pub const POT: char = 'u';
/// Shopkeeper
pub const SHOPKEEPER: char = '@';
/// Shop assistant
pub const ASSISTANT: char = 'a';
/// Generic person, also used as the population marker
pub const PERSON: char = 'p';

/// Whether a symbol is a wall variant
pub const fn is_wall(tile: char) -> bool {
    matches!(tile, WALL | WALL2)
}

/// Whether a symbol is a doorway variant
pub const fn is_door(tile: char) -> bool {
    matches!(tile, DOOR | DOOR_LOCKED)
}
