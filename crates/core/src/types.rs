use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub fn step(self, direction: Direction) -> GridPos {
        let (dx, dy) = direction.delta();
        GridPos { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Fixed probe order for neighbor scans. Candidates are filtered in this
    /// order so a given draw sequence reproduces the same maze.
    pub const PROBE_ORDER: [Direction; 4] =
        [Direction::North, Direction::East, Direction::South, Direction::West];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// Variants a caller can supply for secondary feature placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Trap,
    Checkpoint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidDimensions { width: usize, height: usize },
    FeatureCountExceedsCells { requested: usize, available: usize },
    EmptyFeatureKinds,
}

/// Persisted capture of a generation input, owned by the levels collaborator.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MazeLevel {
    pub seed: u64,
    pub width: usize,
    pub height: usize,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_in_a_direction_and_back_returns_to_the_origin() {
        let origin = GridPos { x: 3, y: 5 };
        for direction in Direction::PROBE_ORDER {
            assert_eq!(origin.step(direction).step(direction.opposite()), origin);
        }
    }

    #[test]
    fn probe_order_is_north_east_south_west() {
        assert_eq!(
            Direction::PROBE_ORDER,
            [Direction::North, Direction::East, Direction::South, Direction::West]
        );
    }

    #[test]
    fn level_record_round_trips_through_json() {
        let level = MazeLevel { seed: 42, width: 15, height: 15, name: "Catacombs".to_string() };
        let json = serde_json::to_string(&level).unwrap();
        let decoded: MazeLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(level, decoded);
    }
}
