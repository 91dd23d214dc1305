//! Random placement of secondary features onto non-terminal cells.

use rand_chacha::ChaCha8Rng;

use crate::types::{FeatureKind, GridPos};

use super::model::FeatureSpawn;
use super::seed::draw_index;

/// Draws `count` distinct non-terminal cells by rejection sampling, then one
/// feature kind per accepted cell. Draw order per attempt is x, then y, then
/// (on acceptance) kind, so a fixed rng state maps to a fixed outcome. The
/// caller guarantees `count` never exceeds the eligible cells, which bounds
/// the rejection loop.
pub(super) fn place_features(
    width: usize,
    height: usize,
    start: GridPos,
    end: GridPos,
    count: usize,
    kinds: &[FeatureKind],
    rng: &mut ChaCha8Rng,
) -> Vec<FeatureSpawn> {
    debug_assert!(count == 0 || !kinds.is_empty());
    let mut spawns: Vec<FeatureSpawn> = Vec::with_capacity(count);

    while spawns.len() < count {
        let cell = GridPos {
            x: draw_index(rng, width) as i32,
            y: draw_index(rng, height) as i32,
        };
        if cell == start || cell == end {
            continue;
        }
        if spawns.iter().any(|spawn| spawn.cell == cell) {
            continue;
        }
        let kind = kinds[draw_index(rng, kinds.len())];
        spawns.push(FeatureSpawn { kind, cell });
    }

    spawns
}
