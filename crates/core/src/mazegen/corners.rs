//! Corner-column inference at grid-line intersections.
//!
//! A column belongs at a vertex only where wall segments would otherwise meet
//! or terminate without a cap: the four maze extremes, boundary vertices next
//! to a surviving boundary segment, and interior vertices where two adjacent
//! walls of some touching cell form an L ending exactly there. A straight
//! uninterrupted run needs no column.

use crate::types::{Direction, GridPos};

use super::grid::Grid;

/// Decides corner placement for vertex `(vx, vy)` on the
/// `(width + 1) x (height + 1)` lattice. Vertex `(vx, vy)` touches cells
/// `(vx-1, vy-1)`, `(vx, vy-1)`, `(vx-1, vy)` and `(vx, vy)`.
pub(super) fn should_place_corner(grid: &Grid, vx: i32, vy: i32) -> bool {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    debug_assert!((0..=width).contains(&vx) && (0..=height).contains(&vy));

    let on_boundary = vx == 0 || vx == width || vy == 0 || vy == height;
    if on_boundary {
        let extreme = (vx == 0 || vx == width) && (vy == 0 || vy == height);
        if extreme {
            return true;
        }
        // Boundary vertices cap a gap only when one of the two boundary
        // segments beside them survives.
        if vx == 0 {
            return cell_wall(grid, 0, vy - 1, Direction::West)
                || cell_wall(grid, 0, vy, Direction::West);
        }
        if vx == width {
            return cell_wall(grid, width - 1, vy - 1, Direction::East)
                || cell_wall(grid, width - 1, vy, Direction::East);
        }
        if vy == 0 {
            return cell_wall(grid, vx - 1, 0, Direction::South)
                || cell_wall(grid, vx, 0, Direction::South);
        }
        return cell_wall(grid, vx - 1, height - 1, Direction::North)
            || cell_wall(grid, vx, height - 1, Direction::North);
    }

    // Interior: any touching cell whose two walls form an L pointing at this
    // vertex terminates a wall run here.
    let below_left = cell_wall(grid, vx - 1, vy - 1, Direction::East)
        && cell_wall(grid, vx - 1, vy - 1, Direction::North);
    let below_right = cell_wall(grid, vx, vy - 1, Direction::West)
        && cell_wall(grid, vx, vy - 1, Direction::North);
    let above_left = cell_wall(grid, vx - 1, vy, Direction::East)
        && cell_wall(grid, vx - 1, vy, Direction::South);
    let above_right =
        cell_wall(grid, vx, vy, Direction::West) && cell_wall(grid, vx, vy, Direction::South);

    below_left || below_right || above_left || above_right
}

/// Guarded cell lookup for inference: a cell outside the grid contributes no
/// wall, unlike the public accessor which reports out-of-bounds as walled.
fn cell_wall(grid: &Grid, x: i32, y: i32, direction: Direction) -> bool {
    let pos = GridPos { x, y };
    grid.in_bounds(pos) && grid.wall(pos, direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mazegen::carver::carve;
    use crate::mazegen::seed::rng_for;

    #[test]
    fn extreme_lattice_corners_always_place() {
        let mut grid = Grid::sealed(4, 3);
        carve(&mut grid, GridPos { x: 0, y: 0 }, &mut rng_for(42));

        assert!(should_place_corner(&grid, 0, 0));
        assert!(should_place_corner(&grid, 4, 0));
        assert!(should_place_corner(&grid, 0, 3));
        assert!(should_place_corner(&grid, 4, 3));
    }

    #[test]
    fn every_vertex_of_a_sealed_grid_places_a_corner() {
        let grid = Grid::sealed(3, 3);
        for vy in 0..=3 {
            for vx in 0..=3 {
                assert!(should_place_corner(&grid, vx, vy), "vertex ({vx}, {vy})");
            }
        }
    }

    #[test]
    fn interior_vertex_inside_a_straight_run_places_no_corner() {
        // Open both north-south passages of a 2x2 grid: the vertical wall
        // between the columns runs straight through the center vertex.
        let mut grid = Grid::sealed(2, 2);
        grid.remove_wall_between(GridPos { x: 0, y: 0 }, Direction::North);
        grid.remove_wall_between(GridPos { x: 1, y: 0 }, Direction::North);

        assert!(!should_place_corner(&grid, 1, 1));
    }

    #[test]
    fn interior_vertex_where_two_walls_form_an_l_places_a_corner() {
        // Same grid, but the eastern passage stays sealed: cell (0, 0) keeps
        // both its north and east walls, whose L ends at the center vertex.
        let mut grid = Grid::sealed(2, 2);
        grid.remove_wall_between(GridPos { x: 1, y: 0 }, Direction::North);

        assert!(should_place_corner(&grid, 1, 1));
    }

    #[test]
    fn boundary_vertices_follow_the_surviving_boundary_segments() {
        // Boundary walls are never carved, so every non-extreme boundary
        // vertex of a carved maze still caps a segment.
        let mut grid = Grid::sealed(5, 4);
        carve(&mut grid, GridPos { x: 0, y: 0 }, &mut rng_for(7));

        for vx in 1..5 {
            assert!(should_place_corner(&grid, vx, 0));
            assert!(should_place_corner(&grid, vx, 4));
        }
        for vy in 1..4 {
            assert!(should_place_corner(&grid, 0, vy));
            assert!(should_place_corner(&grid, 5, vy));
        }
    }
}
