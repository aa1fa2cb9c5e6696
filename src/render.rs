//! ASCII rendering of a maze grid
//!
//! Every cell takes four characters per line. Corners are always drawn
//! with [CORNER]; a present wall is drawn with the wall marker, a removed
//! one as blank space.

use itertools::Itertools;

use crate::grid::Grid;

const CORNER: char = 'X';
const ADDED: char = 'V';

/// Line ending of the current platform
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Render grid as text lines, without line endings
///
/// - `show_added`: mark cells that are already part of the maze.
pub fn lines(grid: &Grid, show_added: bool) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 * grid.depth() + 1);
    for row in 0..grid.depth() {
        lines.push(horizontal_line(grid, row));
        lines.push(cell_line(grid, row, show_added));
    }
    lines.push(horizontal_line(grid, grid.depth()));
    lines
}

/// Render grid as text, every line terminated with [LINE_ENDING]
pub fn render(grid: &Grid, show_added: bool) -> String {
    lines(grid, show_added)
        .iter()
        .map(|line| format!("{}{}", line, LINE_ENDING))
        .join("")
}

/// Wall segments above cell row `row`
fn horizontal_line(grid: &Grid, row: usize) -> String {
    let mut line = (0..grid.width())
        .map(|col| {
            let wall = if grid.horizontal_removed(row, col) {
                ' '
            } else {
                CORNER
            };
            format!("{} {} ", CORNER, wall)
        })
        .join("");
    line.push(CORNER);
    line
}

/// Side walls of cell row `row`
fn cell_line(grid: &Grid, row: usize, show_added: bool) -> String {
    let mut line = (0..grid.width())
        .map(|col| {
            let wall = if grid.vertical_removed(row, col) {
                ' '
            } else {
                CORNER
            };
            let mark = if show_added && grid.is_added(row, col) {
                ADDED
            } else {
                ' '
            };
            format!("{} {} ", wall, mark)
        })
        .join("");
    line.push(if grid.vertical_removed(row, grid.width()) {
        ' '
    } else {
        CORNER
    });
    line
}
