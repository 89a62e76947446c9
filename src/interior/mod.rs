//! Building interior generation by recursive space partitioning
//!
//! The generator runs a strict phase pipeline over a shared area arena
//! and tile grid: partition with corridor reservation, leaf subdivision,
//! rasterization, doorway placement with connectivity repair, critical
//! path analysis, lock-and-key gating, and population scattering. Every
//! phase finishes before the next starts, and all randomness flows
//! through one seeded generator, so identical configurations reproduce
//! identical maps.

/// Adjacency, rasterization, doorways and connectivity repair
pub mod connect;
/// Progression endpoints, critical path and distance labeling
pub mod critical;
/// Street gating and key placement
pub mod locks;
/// Space partitioning, street carving and leaf subdivision
pub mod partition;
/// Population scattering
pub mod populate;

pub use connect::AdjacencyMatrix;
pub use partition::{Area, Arena, Axis};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::io::configuration::{
    DEFAULT_CORRIDOR_WIDTH, DEFAULT_HEIGHT, DEFAULT_LOCK_DEPTH_THRESHOLD, DEFAULT_MIN_ROOM_SIZE,
    DEFAULT_SEED, DEFAULT_SPLIT_COUNT, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::Map;

/// Configuration for the building interior generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteriorConfig {
    /// Map width in tiles
    pub width: i32,
    /// Map height in tiles
    pub height: i32,
    /// Number of partition depth levels to grow
    pub split_count: usize,
    /// Smallest allowed room extent after all carving
    pub min_room_size: i32,
    /// Corridor width reserved at every split
    pub corridor_width: i32,
    /// Ancestor depth difference beyond which a street end is sealed
    pub lock_depth_threshold: usize,
    /// Seed for the deterministic random generator
    pub seed: u64,
}

impl Default for InteriorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            split_count: DEFAULT_SPLIT_COUNT,
            min_room_size: DEFAULT_MIN_ROOM_SIZE,
            corridor_width: DEFAULT_CORRIDOR_WIDTH,
            lock_depth_threshold: DEFAULT_LOCK_DEPTH_THRESHOLD,
            seed: DEFAULT_SEED,
        }
    }
}

fn validate(config: &InteriorConfig) -> Result<()> {
    if config.min_room_size < 3 {
        return Err(invalid_parameter(
            "min_room_size",
            &config.min_room_size,
            &"rooms need at least a one-tile interior inside their walls",
        ));
    }
    if config.corridor_width < 1 {
        return Err(invalid_parameter(
            "corridor_width",
            &config.corridor_width,
            &"streets need at least one walkable tile",
        ));
    }
    if config.split_count < 1 {
        return Err(invalid_parameter(
            "split_count",
            &config.split_count,
            &"at least one partition level is required",
        ));
    }
    if config.width < config.min_room_size || config.height < config.min_room_size {
        return Err(invalid_parameter(
            "width/height",
            &format!("{}x{}", config.width, config.height),
            &"the map must be able to hold a single minimum-size room",
        ));
    }
    Ok(())
}

/// Generate a building interior map
///
/// Returns the populated tile grid and performs no other side effects;
/// printing and export belong to the caller.
///
/// # Errors
///
/// Returns [`crate::io::error::GenerationError::InvalidParameter`] for a
/// configuration that cannot produce a map, and surfaces the fatal
/// invariant violations of the connectivity and key phases
/// ([`crate::io::error::GenerationError::UnreachableRooms`],
/// [`crate::io::error::GenerationError::NoKeyBranch`]).
pub fn generate(config: &InteriorConfig) -> Result<Map> {
    validate(config)?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut arena = partition::build_tree(
        config.width,
        config.height,
        config.split_count,
        config.min_room_size,
        config.corridor_width,
        &mut rng,
    );
    partition::subdivide_leaves(&mut arena, config.min_room_size, &mut rng);

    let mut map = Map::new(config.width, config.height);
    connect::rasterize(&arena, &mut map);

    let mut adjacency = AdjacencyMatrix::new(arena.len());
    connect::link_streets(&arena, &mut adjacency);
    connect::place_doorways(&mut arena, &mut adjacency, &mut map);
    connect::repair_connectivity(&mut arena, &mut adjacency, &mut map)?;

    critical::mark_critical_path(&mut arena, &mut map);
    let distance = critical::distance_from_path(&arena, &adjacency);

    let lock_sites = locks::cap_streets(&arena, &mut map, config.lock_depth_threshold);
    locks::place_keys(&arena, &adjacency, &distance, &mut map, &lock_sites)?;

    populate::scatter_population(&arena, &distance, &mut map, &mut rng);
    Ok(map)
}
