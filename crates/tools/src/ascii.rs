//! Text rendering of a generated maze, built only on the public wall accessor
//! and the start/end/feature outputs — the same surface any instantiation
//! layer consumes.

use maze_core::{Direction, FeatureKind, GeneratedMaze, GridPos};

pub fn render(maze: &GeneratedMaze) -> String {
    let width = maze.width as i32;
    let height = maze.height as i32;
    let mut out = String::new();

    // North is up, so rows print from the highest y down.
    for y in (0..height).rev() {
        for x in 0..width {
            out.push('+');
            out.push_str(if maze.is_wall(x, y, Direction::North) { "---" } else { "   " });
        }
        out.push_str("+\n");

        for x in 0..width {
            out.push(if maze.is_wall(x, y, Direction::West) { '|' } else { ' ' });
            out.push(' ');
            out.push(cell_glyph(maze, GridPos { x, y }));
            out.push(' ');
        }
        out.push(if maze.is_wall(width - 1, y, Direction::East) { '|' } else { ' ' });
        out.push('\n');
    }

    for x in 0..width {
        out.push('+');
        out.push_str(if maze.is_wall(x, 0, Direction::South) { "---" } else { "   " });
    }
    out.push_str("+\n");
    out
}

fn cell_glyph(maze: &GeneratedMaze, cell: GridPos) -> char {
    if cell == maze.start {
        return 'S';
    }
    if cell == maze.end {
        return 'E';
    }
    match maze.features.iter().find(|spawn| spawn.cell == cell).map(|spawn| spawn.kind) {
        Some(FeatureKind::Trap) => 'T',
        Some(FeatureKind::Checkpoint) => 'C',
        None => ' ',
    }
}
