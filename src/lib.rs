//! Generate perfect mazes and draw them as ASCII art
//!
//! A perfect maze has exactly one path between any two cells. Mazes are
//! carved with randomized Prim's algorithm, see [maze_generator].
//!
//! # Examples
//! ## Random maze
//! ```
//! use prim_maze::Maze;
//!
//! let maze = Maze::new(8, 5, false).unwrap();
//! maze.display();
//! ```
//!
//! ## Reproducible maze
//! ```
//! use prim_maze::{maze_generator::MazeGenerator, Maze};
//!
//! let mut gen = MazeGenerator::new(Some(13));
//! let maze = Maze::with_generator(&mut gen, 4, 3, false).unwrap();
//! let again = Maze::with_generator(&mut MazeGenerator::new(Some(13)), 4, 3, false).unwrap();
//! assert_eq!(maze.render(), again.render());
//!
//! // Entrance on top left, exit on bottom right
//! let lines = maze.lines();
//! assert!(lines[0].starts_with("X   X"));
//! assert!(lines[6].ends_with("X   X"));
//! ```

pub mod grid;
pub mod maze_generator;
pub mod render;

use crate::grid::Grid;
use crate::maze_generator::MazeGenerator;

/// Finished maze
pub struct Maze {
    /// Carved grid
    grid: Grid,
    /// Mark added cells when rendering
    debug: bool,
}

impl Maze {
    /// Generate maze from an unseeded random source
    ///
    /// - `width`: Number of cell columns.
    /// - `depth`: Number of cell rows.
    /// - `debug`: Print the maze to the console before every frontier
    ///   draw, and mark added cells in renderings.
    ///
    /// Returns error, if either dimension is zero.
    pub fn new(width: usize, depth: usize, debug: bool) -> anyhow::Result<Self> {
        Self::with_generator(&mut MazeGenerator::new(None), width, depth, debug)
    }

    /// Generate maze with given generator
    ///
    /// Intermediate frames of debug mode are only observed, so a seeded
    /// generator produces the same maze with and without `debug`.
    pub fn with_generator(
        generator: &mut MazeGenerator,
        width: usize,
        depth: usize,
        debug: bool,
    ) -> anyhow::Result<Self> {
        let grid = if debug {
            generator.generate_observed(width, depth, |grid| {
                println!("{}", render::render(grid, true))
            })?
        } else {
            generator.generate(width, depth)?
        };
        Ok(Maze { grid, debug })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn lines(&self) -> Vec<String> {
        render::lines(&self.grid, self.debug)
    }

    pub fn render(&self) -> String {
        render::render(&self.grid, self.debug)
    }

    /// Print maze to console
    pub fn display(&self) {
        println!("{}", self.render());
    }
}
