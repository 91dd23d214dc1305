//! Deterministic maze generation domain split into coherent submodules.

pub mod model;

mod carver;
mod corners;
mod emit;
mod features;
mod generator;
mod grid;
mod seed;

pub use generator::MazeGenerator;
pub use grid::Grid;
pub use model::{FeatureSpawn, GeneratedMaze, MazeConfig, Orientation, Placement, PlacementKind};
pub use seed::{resolve_seed, rng_for};

use crate::types::ConfigError;

pub fn generate_maze(config: &MazeConfig) -> Result<GeneratedMaze, ConfigError> {
    Ok(MazeGenerator::new(config.clone())?.generate())
}
