use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use maze_core::MazeLevel;
use serde::{Deserialize, Serialize};

/// Named level records persisted as one JSON collection file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct LevelCollection {
    pub levels: Vec<MazeLevel>,
}

impl LevelCollection {
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "DungeonMaze").map(|proj_dirs| {
            let mut path = proj_dirs.data_dir().to_path_buf();
            path.push("mazelevels.json");
            path
        })
    }

    /// A missing file is an empty collection, not an error.
    pub fn load_or_default(path: &Path) -> io::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn write_atomic(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;

        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, path)?;

        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&MazeLevel> {
        self.levels.iter().find(|level| level.name == name)
    }

    pub fn add(&mut self, level: MazeLevel) {
        self.levels.push(level);
    }

    pub fn delete(&mut self, name: &str) -> bool {
        match self.levels.iter().position(|level| level.name == name) {
            Some(index) => {
                self.levels.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_level(name: &str, seed: u64) -> MazeLevel {
        MazeLevel { seed, width: 15, height: 15, name: name.to_string() }
    }

    #[test]
    fn test_atomic_write_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mazelevels.json");

        let mut collection = LevelCollection::default();
        collection.add(sample_level("Catacombs", 42));
        collection.add(sample_level("Cistern", 7));

        collection.write_atomic(&path).unwrap();
        assert!(path.exists());

        let loaded = LevelCollection::load_or_default(&path).unwrap();
        assert_eq!(collection, loaded);

        // Verify tmp file is gone
        let tmp_path = path.with_extension("json.tmp");
        assert!(!tmp_path.exists());
    }

    #[test]
    fn missing_file_loads_as_an_empty_collection() {
        let dir = tempdir().unwrap();
        let loaded = LevelCollection::load_or_default(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.levels.is_empty());
    }

    #[test]
    fn find_returns_the_first_record_with_a_name() {
        let mut collection = LevelCollection::default();
        collection.add(sample_level("Catacombs", 1));
        collection.add(sample_level("Catacombs", 2));

        assert_eq!(collection.find("Catacombs").map(|level| level.seed), Some(1));
        assert!(collection.find("Oubliette").is_none());
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let mut collection = LevelCollection::default();
        collection.add(sample_level("Catacombs", 1));
        collection.add(sample_level("Cistern", 2));

        assert!(collection.delete("Catacombs"));
        assert!(!collection.delete("Catacombs"));
        assert_eq!(collection.levels.len(), 1);
    }
}
