//! Spatial data structures for layered tile maps
//!
//! This module contains the spatial primitives every generation strategy
//! builds on:
//! - Integer rectangle arithmetic
//! - The layered tile grid and its compositing rules
//! - The shared tile symbol vocabulary

/// Layered tile grid and compositing
pub mod grid;
/// Integer rectangle arithmetic
pub mod rect;
/// Tile symbol vocabulary
pub mod tiles;

pub use grid::{Layer, Map};
pub use rect::Rect;
