//! Configuration and output value types for maze generation.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{ConfigError, Direction, FeatureKind, GridPos, MazeLevel};

use super::grid::Grid;

/// Inputs for one generation run. Validated once by
/// [`MazeGenerator::new`](super::MazeGenerator::new); every later stage can
/// assume a well-formed configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    pub use_random_seed: bool,
    pub feature_count: usize,
    pub feature_kinds: Vec<FeatureKind>,
}

impl MazeConfig {
    pub fn new(width: usize, height: usize) -> MazeConfig {
        MazeConfig {
            width,
            height,
            seed: 0,
            use_random_seed: true,
            feature_count: 0,
            feature_kinds: Vec::new(),
        }
    }

    /// Builds the configuration a saved level regenerates under: the
    /// recorded dimensions and seed, with randomness disabled.
    pub fn from_level(level: &MazeLevel) -> MazeConfig {
        MazeConfig {
            width: level.width,
            height: level.height,
            seed: level.seed,
            use_random_seed: false,
            feature_count: 0,
            feature_kinds: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.feature_count > 0 {
            if self.feature_kinds.is_empty() {
                return Err(ConfigError::EmptyFeatureKinds);
            }
            let available = self.eligible_feature_cells();
            if self.feature_count > available {
                return Err(ConfigError::FeatureCountExceedsCells {
                    requested: self.feature_count,
                    available,
                });
            }
        }
        Ok(())
    }

    /// Cells open to feature placement: everything except the terminals,
    /// which collapse to a single cell on a 1x1 grid.
    pub fn eligible_feature_cells(&self) -> usize {
        let terminals = if self.start() == self.end() { 1 } else { 2 };
        (self.width * self.height).saturating_sub(terminals)
    }

    pub(super) fn start(&self) -> GridPos {
        GridPos { x: 0, y: 0 }
    }

    pub(super) fn end(&self) -> GridPos {
        GridPos { x: self.width as i32 - 1, y: self.height as i32 - 1 }
    }
}

/// Yaw applied when a placement is instantiated. Wall segments on a cell's
/// east or west edge are turned a quarter around the vertical axis; every
/// other placement keeps the identity rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Identity,
    QuarterTurn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementKind {
    Floor,
    Wall,
    Corner,
    Start,
    End,
    Feature(FeatureKind),
}

/// One renderer-agnostic placement record. Positions are in cell units: cell
/// `(x, y)` is centered at `(x, y)`, edge midpoints sit at half offsets and
/// vertex `(vx, vy)` at `(vx - 0.5, vy - 0.5)`. Scaling to world units is the
/// consumer's concern.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: PlacementKind,
    pub x: f32,
    pub y: f32,
    pub orientation: Orientation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureSpawn {
    pub kind: FeatureKind,
    pub cell: GridPos,
}

/// The value a generation run returns. Produced whole, never patched; a new
/// run replaces the previous value outright.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedMaze {
    pub width: usize,
    pub height: usize,
    /// The seed the run actually used, after resolution. Feeding it back with
    /// randomness disabled reproduces this maze byte for byte.
    pub seed: u64,
    pub start: GridPos,
    pub end: GridPos,
    pub grid: Grid,
    pub placements: Vec<Placement>,
    pub features: Vec<FeatureSpawn>,
}

impl GeneratedMaze {
    /// Wall query for movement and collision consumers. Out-of-bounds is
    /// walled.
    pub fn is_wall(&self, x: i32, y: i32, direction: Direction) -> bool {
        self.grid.wall(GridPos { x, y }, direction)
    }

    /// Captures this run as a persistable level record.
    pub fn to_level(&self, name: impl Into<String>) -> MazeLevel {
        MazeLevel { seed: self.seed, width: self.width, height: self.height, name: name.into() }
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.seed.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.end.x.to_le_bytes());
        bytes.extend(self.end.y.to_le_bytes());

        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let pos = GridPos { x, y };
                let mut wall_bits = 0_u8;
                for (bit, direction) in Direction::PROBE_ORDER.into_iter().enumerate() {
                    if self.grid.wall(pos, direction) {
                        wall_bits |= 1 << bit;
                    }
                }
                bytes.push(wall_bits);
            }
        }

        bytes.extend((self.placements.len() as u32).to_le_bytes());
        for placement in &self.placements {
            let (kind_code, feature_code) = match placement.kind {
                PlacementKind::Floor => (0, 0),
                PlacementKind::Wall => (1, 0),
                PlacementKind::Corner => (2, 0),
                PlacementKind::Start => (3, 0),
                PlacementKind::End => (4, 0),
                PlacementKind::Feature(kind) => (5, feature_kind_code(kind)),
            };
            bytes.push(kind_code);
            bytes.push(feature_code);
            bytes.extend(placement.x.to_le_bytes());
            bytes.extend(placement.y.to_le_bytes());
            bytes.push(match placement.orientation {
                Orientation::Identity => 0,
                Orientation::QuarterTurn => 1,
            });
        }

        bytes.extend((self.features.len() as u32).to_le_bytes());
        for spawn in &self.features {
            bytes.push(feature_kind_code(spawn.kind));
            bytes.extend(spawn.cell.x.to_le_bytes());
            bytes.extend(spawn.cell.y.to_le_bytes());
        }

        bytes
    }
}

fn feature_kind_code(kind: FeatureKind) -> u8 {
    match kind {
        FeatureKind::Trap => 0,
        FeatureKind::Checkpoint => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            MazeConfig::new(0, 10).validate(),
            Err(ConfigError::InvalidDimensions { width: 0, height: 10 })
        );
        assert_eq!(
            MazeConfig::new(10, 0).validate(),
            Err(ConfigError::InvalidDimensions { width: 10, height: 0 })
        );
    }

    #[test]
    fn feature_count_beyond_non_terminal_cells_is_rejected() {
        let mut config = MazeConfig::new(3, 3);
        config.feature_count = 8;
        config.feature_kinds = vec![FeatureKind::Trap];
        assert_eq!(
            config.validate(),
            Err(ConfigError::FeatureCountExceedsCells { requested: 8, available: 7 })
        );

        config.feature_count = 7;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn features_without_kinds_are_rejected() {
        let mut config = MazeConfig::new(3, 3);
        config.feature_count = 1;
        assert_eq!(config.validate(), Err(ConfigError::EmptyFeatureKinds));
    }

    #[test]
    fn single_cell_grid_has_no_eligible_feature_cells() {
        let config = MazeConfig::new(1, 1);
        assert_eq!(config.eligible_feature_cells(), 0);
    }

    #[test]
    fn level_config_regenerates_with_the_recorded_seed() {
        let level = MazeLevel { seed: 555, width: 8, height: 6, name: "Crypt".to_string() };
        let config = MazeConfig::from_level(&level);
        assert_eq!(config.seed, 555);
        assert_eq!((config.width, config.height), (8, 6));
        assert!(!config.use_random_seed);
    }
}
