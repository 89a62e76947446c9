//! Command-line interface for generating and exporting tile maps

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::generators;
use crate::generators::lobby::LobbyPlacement;
use crate::interior::{self, InteriorConfig};
use crate::io::configuration::{
    BATCH_SUFFIX, DEFAULT_CORRIDOR_WIDTH, DEFAULT_FILL_PERCENT, DEFAULT_GRID_CELLS,
    DEFAULT_HEIGHT, DEFAULT_LOCK_DEPTH_THRESHOLD, DEFAULT_MAX_ROOM_PERCENT,
    DEFAULT_MAX_ROOM_SIZE, DEFAULT_MIN_ROOM_PERCENT, DEFAULT_MIN_ROOM_SIZE, DEFAULT_REPETITIONS,
    DEFAULT_RULE_ONE, DEFAULT_RULE_TWO, DEFAULT_SEED, DEFAULT_SPLIT_COUNT,
    DEFAULT_WALK_ITERATIONS, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_map_as_png;
use crate::io::progress::ProgressManager;
use crate::spatial::Map;

/// Generation strategy selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Partitioned building interior with locks and keys
    Interior,
    /// Plain BSP dungeon
    Bsp,
    /// Cellular-automata cave
    Cellular,
    /// Drunken-walk floor
    Walk,
    /// Grid rooms joined by tunnels
    Rogue,
    /// Lobby-based building layout
    Lobby,
    /// Grass field with walled buildings
    Village,
    /// Furnished single shop
    Shop,
}

/// Lobby placement preference selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LobbyMode {
    /// Lobby touches the outer wall
    Edge,
    /// Lobby sits clear of the outer wall
    Interior,
    /// No preference
    Any,
}

impl From<LobbyMode> for LobbyPlacement {
    fn from(mode: LobbyMode) -> Self {
        match mode {
            LobbyMode::Edge => Self::Edge,
            LobbyMode::Interior => Self::Interior,
            LobbyMode::Any => Self::Anywhere,
        }
    }
}

#[derive(Parser)]
#[command(name = "tilecarve")]
#[command(
    author,
    version,
    about = "Generate 2-D tile map layouts for games"
)]
/// Command-line arguments for the map generation tool
pub struct Cli {
    /// Generation strategy
    #[arg(value_enum, default_value = "interior")]
    pub strategy: Strategy,

    /// Map width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: i32,

    /// Map height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of maps to generate, with consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    pub count: usize,

    /// PNG output path; batches add a numbered suffix
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress and map output
    #[arg(short, long)]
    pub quiet: bool,

    /// Partition depth levels (interior, bsp)
    #[arg(long, default_value_t = DEFAULT_SPLIT_COUNT)]
    pub split_count: usize,

    /// Smallest room extent (interior, lobby)
    #[arg(long, default_value_t = DEFAULT_MIN_ROOM_SIZE)]
    pub min_room_size: i32,

    /// Largest room extent (lobby)
    #[arg(long, default_value_t = DEFAULT_MAX_ROOM_SIZE)]
    pub max_room_size: i32,

    /// Corridor width reserved at splits (interior)
    #[arg(long, default_value_t = DEFAULT_CORRIDOR_WIDTH)]
    pub corridor_width: i32,

    /// Ancestor depth difference that seals a street end (interior)
    #[arg(long, default_value_t = DEFAULT_LOCK_DEPTH_THRESHOLD)]
    pub lock_depth_threshold: usize,

    /// Percentage of tiles seeded as stone (cellular)
    #[arg(long, default_value_t = DEFAULT_FILL_PERCENT)]
    pub fill_percent: i32,

    /// Smoothing repetitions (cellular)
    #[arg(long, default_value_t = DEFAULT_REPETITIONS)]
    pub repetitions: usize,

    /// Walk steps (walk)
    #[arg(long, default_value_t = DEFAULT_WALK_ITERATIONS)]
    pub iterations: usize,

    /// Grid cells per axis (rogue)
    #[arg(long, default_value_t = DEFAULT_GRID_CELLS)]
    pub cells: i32,

    /// Smallest percentage of cells promoted to rooms (rogue)
    #[arg(long, default_value_t = DEFAULT_MIN_ROOM_PERCENT)]
    pub min_room_percent: i32,

    /// Largest percentage of cells promoted to rooms (rogue)
    #[arg(long, default_value_t = DEFAULT_MAX_ROOM_PERCENT)]
    pub max_room_percent: i32,

    /// Lobby placement preference (lobby)
    #[arg(long, value_enum, default_value = "any")]
    pub lobby: LobbyMode,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates map generation, printing and export
pub struct MapProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MapProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);
        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate, print and export the requested maps
    ///
    /// # Errors
    ///
    /// Returns an error when a generator rejects its parameters or an
    /// export fails.
    pub fn process(&mut self) -> Result<()> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        for index in 0..self.cli.count {
            let seed = self.cli.seed.wrapping_add(index as u64);
            let map = self.generate_one(seed)?;

            if let Some(ref output) = self.cli.output {
                let path = Self::batch_output_path(output, index, self.cli.count);
                let path_str = path.to_string_lossy();
                export_map_as_png(&map, path_str.as_ref())?;
            } else if !self.cli.quiet {
                // The composited map is the tool's primary output
                #[allow(clippy::print_stdout)]
                {
                    println!("{map}");
                }
            }

            if let Some(ref pm) = self.progress_manager {
                pm.complete_map();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(())
    }

    fn generate_one(&self, seed: u64) -> Result<Map> {
        let cli = &self.cli;
        let mut rng = StdRng::seed_from_u64(seed);
        match cli.strategy {
            Strategy::Interior => interior::generate(&InteriorConfig {
                width: cli.width,
                height: cli.height,
                split_count: cli.split_count,
                min_room_size: cli.min_room_size,
                corridor_width: cli.corridor_width,
                lock_depth_threshold: cli.lock_depth_threshold,
                seed,
            }),
            Strategy::Bsp => {
                generators::bsp::generate(cli.width, cli.height, cli.split_count, &mut rng)
            }
            Strategy::Cellular => generators::cellular::generate(
                cli.width,
                cli.height,
                cli.fill_percent,
                cli.repetitions,
                DEFAULT_RULE_ONE,
                DEFAULT_RULE_TWO,
                &mut rng,
            ),
            Strategy::Walk => {
                generators::walk::generate(cli.width, cli.height, cli.iterations, &mut rng)
            }
            Strategy::Rogue => generators::rogue::generate(
                cli.width,
                cli.height,
                cli.cells,
                cli.min_room_percent,
                cli.max_room_percent,
                &mut rng,
            ),
            Strategy::Lobby => generators::lobby::generate(
                cli.width,
                cli.height,
                cli.min_room_size,
                cli.max_room_size,
                cli.lobby.into(),
                &mut rng,
            ),
            Strategy::Village => generators::village::generate(cli.width, cli.height, &mut rng),
            Strategy::Shop => generators::shop::generate(cli.width, cli.height, &mut rng),
        }
    }

    /// Output path for one map of a batch
    ///
    /// Single maps keep the path untouched; batches append a numbered
    /// suffix before the extension.
    fn batch_output_path(output: &Path, index: usize, count: usize) -> PathBuf {
        if count <= 1 {
            return output.to_path_buf();
        }
        let stem = output.file_stem().unwrap_or_default();
        let extension = output.extension().unwrap_or_default();
        let name = format!(
            "{}{}{}.{}",
            stem.to_string_lossy(),
            BATCH_SUFFIX,
            index,
            extension.to_string_lossy()
        );
        output
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}
