//! Placement-list emission for carved mazes.

use crate::types::{Direction, GridPos};

use super::corners::should_place_corner;
use super::grid::Grid;
use super::model::{Orientation, Placement, PlacementKind};

/// Walks the carved grid and produces the placement list in a fixed total
/// order: floors, then per-cell present walls (north, east, south, west),
/// then inferred corners, then the start and end markers. Shared walls are
/// emitted once per adjacent cell, matching the per-cell flag representation.
pub(super) fn emit_placements(grid: &Grid, start: GridPos, end: GridPos) -> Vec<Placement> {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let mut placements = Vec::with_capacity(estimated_len(grid));

    for x in 0..width {
        for y in 0..height {
            placements.push(Placement {
                kind: PlacementKind::Floor,
                x: x as f32,
                y: y as f32,
                orientation: Orientation::Identity,
            });
        }
    }

    for x in 0..width {
        for y in 0..height {
            let pos = GridPos { x, y };
            for direction in Direction::PROBE_ORDER {
                if grid.wall(pos, direction) {
                    placements.push(wall_placement(pos, direction));
                }
            }
        }
    }

    for vx in 0..=width {
        for vy in 0..=height {
            if should_place_corner(grid, vx, vy) {
                placements.push(Placement {
                    kind: PlacementKind::Corner,
                    x: vx as f32 - 0.5,
                    y: vy as f32 - 0.5,
                    orientation: Orientation::Identity,
                });
            }
        }
    }

    placements.push(marker(PlacementKind::Start, start));
    placements.push(marker(PlacementKind::End, end));
    placements
}

fn wall_placement(pos: GridPos, direction: Direction) -> Placement {
    let (dx, dy) = direction.delta();
    Placement {
        kind: PlacementKind::Wall,
        x: pos.x as f32 + dx as f32 * 0.5,
        y: pos.y as f32 + dy as f32 * 0.5,
        orientation: match direction {
            Direction::North | Direction::South => Orientation::Identity,
            Direction::East | Direction::West => Orientation::QuarterTurn,
        },
    }
}

fn marker(kind: PlacementKind, cell: GridPos) -> Placement {
    Placement { kind, x: cell.x as f32, y: cell.y as f32, orientation: Orientation::Identity }
}

fn estimated_len(grid: &Grid) -> usize {
    let cells = grid.width() * grid.height();
    let vertices = (grid.width() + 1) * (grid.height() + 1);
    // Floors, a pessimistic four walls per cell, corners, two markers.
    cells * 5 + vertices + 2
}
