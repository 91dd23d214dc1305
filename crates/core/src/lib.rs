pub mod mazegen;
pub mod types;

pub use mazegen::{
    FeatureSpawn, GeneratedMaze, Grid, MazeConfig, MazeGenerator, Orientation, Placement,
    PlacementKind, generate_maze, resolve_seed, rng_for,
};
pub use types::*;
