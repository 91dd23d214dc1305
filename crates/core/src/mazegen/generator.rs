//! Generation pipeline that composes carving, emission, and feature placement.

use crate::types::ConfigError;

use super::carver::carve;
use super::emit::emit_placements;
use super::features::place_features;
use super::grid::Grid;
use super::model::{GeneratedMaze, MazeConfig, Orientation, Placement, PlacementKind};
use super::seed;

/// Owns a validated configuration and runs the full carve-and-emit pipeline.
/// Every call to [`generate`](Self::generate) is a complete re-run over a
/// fresh grid; nothing is patched incrementally and nothing escapes the call
/// except the returned value.
pub struct MazeGenerator {
    config: MazeConfig,
}

impl MazeGenerator {
    pub fn new(config: MazeConfig) -> Result<MazeGenerator, ConfigError> {
        config.validate()?;
        Ok(MazeGenerator { config })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn generate(&self) -> GeneratedMaze {
        let seed = seed::resolve_seed(self.config.seed, self.config.use_random_seed);
        let mut rng = seed::rng_for(seed);

        let start = self.config.start();
        let end = self.config.end();
        let mut grid = Grid::sealed(self.config.width, self.config.height);
        carve(&mut grid, start, &mut rng);

        let mut placements = emit_placements(&grid, start, end);
        let features = place_features(
            self.config.width,
            self.config.height,
            start,
            end,
            self.config.feature_count,
            &self.config.feature_kinds,
            &mut rng,
        );
        placements.extend(features.iter().map(|spawn| Placement {
            kind: PlacementKind::Feature(spawn.kind),
            x: spawn.cell.x as f32,
            y: spawn.cell.y as f32,
            orientation: Orientation::Identity,
        }));

        GeneratedMaze {
            width: self.config.width,
            height: self.config.height,
            seed,
            start,
            end,
            grid,
            placements,
            features,
        }
    }
}
