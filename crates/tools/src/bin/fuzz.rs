use std::collections::{BTreeSet, VecDeque};

use anyhow::Result;
use clap::Parser;
use maze_core::{Direction, FeatureKind, GeneratedMaze, MazeConfig, MazeGenerator};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    cases: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} cases...", args.seed, args.cases);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for case in 0..args.cases {
        let width = 1 + (rng.next_u64() as usize % 20);
        let height = 1 + (rng.next_u64() as usize % 20);

        let mut config = MazeConfig::new(width, height);
        config.seed = rng.next_u64();
        config.use_random_seed = false;
        config.feature_kinds = vec![FeatureKind::Trap, FeatureKind::Checkpoint];
        let eligible = config.eligible_feature_cells();
        config.feature_count =
            if eligible == 0 { 0 } else { rng.next_u64() as usize % (eligible + 1) };

        let generator = MazeGenerator::new(config).expect("fuzz produced an invalid config");
        let maze = generator.generate();
        let replay = generator.generate();

        // Assert invariants
        assert_eq!(
            maze.fingerprint(),
            replay.fingerprint(),
            "Invariant failed: generation not deterministic for seed {}",
            maze.seed
        );
        assert_eq!(
            maze.grid.open_passages(),
            width * height - 1,
            "Invariant failed: passage count off for seed {}",
            maze.seed
        );
        assert!(
            bfs_visits_every_cell(&maze),
            "Invariant failed: unreachable cells for seed {}",
            maze.seed
        );
        assert!(
            walls_are_symmetric(&maze),
            "Invariant failed: asymmetric wall flags for seed {}",
            maze.seed
        );
        assert!(
            features_are_distinct_and_non_terminal(&maze),
            "Invariant failed: bad feature placement for seed {}",
            maze.seed
        );

        if case % 100 == 0 {
            println!("  case {case}: {width}x{height}, seed {}", maze.seed);
        }
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}

fn bfs_visits_every_cell(maze: &GeneratedMaze) -> bool {
    let mut open = VecDeque::from([maze.start]);
    let mut seen = BTreeSet::from([maze.start]);
    while let Some(pos) = open.pop_front() {
        for direction in Direction::PROBE_ORDER {
            if maze.is_wall(pos.x, pos.y, direction) {
                continue;
            }
            let next = pos.step(direction);
            if seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen.len() == maze.width * maze.height
}

fn walls_are_symmetric(maze: &GeneratedMaze) -> bool {
    for y in 0..maze.height as i32 {
        for x in 0..maze.width as i32 {
            for direction in Direction::PROBE_ORDER {
                let neighbor = maze_core::GridPos { x, y }.step(direction);
                if !maze.grid.in_bounds(neighbor) {
                    continue;
                }
                if maze.is_wall(x, y, direction)
                    != maze.is_wall(neighbor.x, neighbor.y, direction.opposite())
                {
                    return false;
                }
            }
        }
    }
    true
}

fn features_are_distinct_and_non_terminal(maze: &GeneratedMaze) -> bool {
    let cells: BTreeSet<_> = maze.features.iter().map(|spawn| spawn.cell).collect();
    cells.len() == maze.features.len()
        && !cells.contains(&maze.start)
        && !cells.contains(&maze.end)
}
