//! Randomized depth-first carving that turns a sealed grid into a perfect maze.

use rand_chacha::ChaCha8Rng;

use crate::types::{Direction, GridPos};

use super::grid::Grid;
use super::seed::draw_index;

/// Carves a spanning tree over the grid starting from `start`, using an
/// explicit stack so large grids cannot exhaust the call stack. A dead end
/// with an empty stack means every cell has been visited.
pub(super) fn carve(grid: &mut Grid, start: GridPos, rng: &mut ChaCha8Rng) {
    let mut stack: Vec<GridPos> = Vec::new();
    let mut current = start;
    grid.mark_visited(current);

    loop {
        let candidates = unvisited_directions(grid, current);
        if candidates.is_empty() {
            match stack.pop() {
                Some(previous) => current = previous,
                None => break,
            }
        } else {
            let direction = candidates[draw_index(rng, candidates.len())];
            grid.remove_wall_between(current, direction);
            stack.push(current);
            current = current.step(direction);
            grid.mark_visited(current);
        }
    }
}

fn unvisited_directions(grid: &Grid, from: GridPos) -> Vec<Direction> {
    Direction::PROBE_ORDER
        .into_iter()
        .filter(|&direction| {
            let neighbor = from.step(direction);
            grid.in_bounds(neighbor) && !grid.visited(neighbor)
        })
        .collect()
}
