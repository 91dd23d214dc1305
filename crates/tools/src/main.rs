use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use maze_core::{FeatureKind, MazeConfig, generate_maze};

mod ascii;
mod levels;

use levels::LevelCollection;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze width in cells
    #[arg(long, default_value_t = 15)]
    width: usize,
    /// Maze height in cells
    #[arg(long, default_value_t = 15)]
    height: usize,
    /// Fixed seed; omit to draw a fresh one
    #[arg(short, long)]
    seed: Option<u64>,
    /// Number of feature cells to place
    #[arg(long, default_value_t = 0)]
    feature_count: usize,
    /// Feature variants to draw from (trap, checkpoint)
    #[arg(long, value_delimiter = ',', default_value = "trap")]
    feature_kinds: Vec<String>,
    /// Regenerate a saved level by name instead of using width/height/seed
    #[arg(long)]
    level: Option<String>,
    /// Save the generated maze to the level collection under this name
    #[arg(long)]
    save_as: Option<String>,
    /// Delete a saved level by name and exit
    #[arg(long)]
    delete_level: Option<String>,
    /// Level collection file (defaults to the platform data directory)
    #[arg(long)]
    levels_file: Option<PathBuf>,
    /// Write the placement list as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let levels_path = match args.levels_file.clone() {
        Some(path) => path,
        None => LevelCollection::default_path()
            .context("could not determine a level collection path; pass --levels-file")?,
    };

    if let Some(name) = args.delete_level.as_deref() {
        let mut collection = load_collection(&levels_path)?;
        if !collection.delete(name) {
            bail!("no saved level named '{name}'");
        }
        write_collection(&collection, &levels_path)?;
        println!("Deleted level '{name}'.");
        return Ok(());
    }

    let config = build_config(&args, &levels_path)?;
    let maze = generate_maze(&config)
        .map_err(|e| anyhow::anyhow!("invalid maze configuration: {:?}", e))?;

    print!("{}", ascii::render(&maze));
    println!("Seed: {}", maze.seed);
    println!("Size: {}x{}", maze.width, maze.height);
    println!("Placements: {} ({} features)", maze.placements.len(), maze.features.len());

    if let Some(path) = args.json.as_deref() {
        let json = serde_json::to_string_pretty(&maze.placements)
            .context("failed to serialize the placement list")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write placement list: {}", path.display()))?;
        println!("Placement list written to {}", path.display());
    }

    if let Some(name) = args.save_as.as_deref() {
        let mut collection = load_collection(&levels_path)?;
        collection.add(maze.to_level(name));
        write_collection(&collection, &levels_path)?;
        println!("Saved level '{}' (seed {}).", name, maze.seed);
    }

    Ok(())
}

fn build_config(args: &Args, levels_path: &Path) -> Result<MazeConfig> {
    let mut config = match args.level.as_deref() {
        Some(name) => {
            let collection = load_collection(levels_path)?;
            let level = collection
                .find(name)
                .with_context(|| format!("no saved level named '{name}'"))?;
            MazeConfig::from_level(level)
        }
        None => {
            let mut config = MazeConfig::new(args.width, args.height);
            if let Some(seed) = args.seed {
                config.seed = seed;
                config.use_random_seed = false;
            }
            config
        }
    };

    config.feature_count = args.feature_count;
    config.feature_kinds = args
        .feature_kinds
        .iter()
        .map(|raw| parse_feature_kind(raw))
        .collect::<Result<Vec<_>>>()?;
    Ok(config)
}

fn parse_feature_kind(raw: &str) -> Result<FeatureKind> {
    match raw {
        "trap" => Ok(FeatureKind::Trap),
        "checkpoint" => Ok(FeatureKind::Checkpoint),
        other => bail!("unknown feature kind '{other}' (expected trap or checkpoint)"),
    }
}

fn load_collection(path: &Path) -> Result<LevelCollection> {
    LevelCollection::load_or_default(path)
        .with_context(|| format!("failed to read level collection: {}", path.display()))
}

fn write_collection(collection: &LevelCollection, path: &Path) -> Result<()> {
    collection
        .write_atomic(path)
        .with_context(|| format!("failed to write level collection: {}", path.display()))
}
