//! Maze generation with randomized Prim's algorithm

use anyhow::ensure;
use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::grid::{Direction, Grid};

/// Wall on one side of an added cell, proposed for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WallPiece {
    row: usize,
    col: usize,
    direction: Direction,
}

/// Perfect maze generator.
///
/// Owns the random source, so that a seeded generator always produces
/// the same mazes.
pub struct MazeGenerator {
    random: StdRng,
}

impl MazeGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            random: if let Some(state) = seed {
                StdRng::seed_from_u64(state)
            } else {
                StdRng::from_entropy()
            },
        }
    }

    pub fn from_rng(random: StdRng) -> Self {
        Self { random }
    }

    /// Generate perfect maze of `width` columns and `depth` rows
    ///
    /// Returns error, if either dimension is zero.
    pub fn generate(&mut self, width: usize, depth: usize) -> anyhow::Result<Grid> {
        self.generate_observed(width, depth, |_| ())
    }

    /// Generate perfect maze, showing the grid to `observer` before every
    /// draw from the frontier.
    ///
    /// The observer only sees the grid, so the result is the same as with
    /// [Self::generate].
    ///
    /// Start from a random cell. Pick a random wall from the frontier; if
    /// the cell behind it is not yet in the maze, carve the wall, add the
    /// cell and push its walls towards unadded neighbors into the frontier.
    /// Walls leading to already added cells are dropped.
    pub fn generate_observed<F>(
        &mut self,
        width: usize,
        depth: usize,
        mut observer: F,
    ) -> anyhow::Result<Grid>
    where
        F: FnMut(&Grid),
    {
        ensure!(
            width >= 1 && depth >= 1,
            "Maze dimensions must be positive, got {}x{}",
            width,
            depth
        );
        let mut grid = Grid::new(width, depth)?;
        let mut frontier: Vec<WallPiece> = Vec::new();

        let start = (
            self.random.gen_range(0..depth),
            self.random.gen_range(0..width),
        );
        debug!("Starting {}x{} maze from cell {:?}", width, depth, start);
        grid.mark_added(start.0, start.1);
        Self::push_walls(&grid, start, &mut frontier);

        let mut cells_added = 1;
        let mut draws = 0;
        while !frontier.is_empty() {
            observer(&grid);

            let wall = frontier.swap_remove(self.random.gen_range(0..frontier.len()));
            draws += 1;

            // Frontier only holds walls between grid cells
            let Some(next) = grid.neighbor(wall.row, wall.col, wall.direction) else {
                continue;
            };
            if !grid.mark_added(next.0, next.1) {
                trace!("Dropping stale wall {:?}", wall);
                continue;
            }
            grid.remove_wall(wall.row, wall.col, wall.direction);
            cells_added += 1;
            trace!("Added cell {:?} through {:?}", next, wall);

            Self::push_walls(&grid, next, &mut frontier);
        }

        debug_assert_eq!(cells_added, grid.cell_count());
        debug!(
            "Maze complete: {} cells added in {} draws",
            cells_added, draws
        );
        Ok(grid)
    }

    /// Push walls of `cell` that lead to unadded neighbors
    fn push_walls(grid: &Grid, cell: (usize, usize), frontier: &mut Vec<WallPiece>) {
        let (row, col) = cell;
        for direction in Direction::ALL {
            if let Some((r, c)) = grid.neighbor(row, col, direction) {
                if !grid.is_added(r, c) {
                    frontier.push(WallPiece {
                        row,
                        col,
                        direction,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::grid::{Direction, Grid};
    use crate::maze_generator::{MazeGenerator, WallPiece};

    #[test]
    fn generate_covers_every_cell() {
        let mut gen = MazeGenerator::new(Some(0));
        let grid = gen.generate(15, 11).unwrap();

        assert!(grid.is_complete());
        assert_eq!(grid.removed_interior_walls(), 15 * 11 - 1);
        assert!(grid.horizontal_removed(0, 0));
        assert!(grid.horizontal_removed(11, 14));
    }

    #[test]
    fn single_cell_never_draws() {
        let mut gen = MazeGenerator::new(Some(3));
        let mut frames = 0;
        let grid = gen.generate_observed(1, 1, |_| frames += 1).unwrap();

        assert_eq!(frames, 0);
        assert!(grid.is_added(0, 0));
        assert_eq!(grid.removed_interior_walls(), 0);
        assert!(grid.horizontal_removed(0, 0));
        assert!(grid.horizontal_removed(1, 0));
    }

    #[test]
    fn two_cells_share_one_passage() {
        for seed in 0..20 {
            let grid = MazeGenerator::new(Some(seed)).generate(2, 1).unwrap();
            assert!(grid.vertical_removed(0, 1));
            assert!(!grid.vertical_removed(0, 0));
            assert!(!grid.vertical_removed(0, 2));
            assert_eq!(grid.removed_interior_walls(), 1);
        }
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        let mut gen = MazeGenerator::new(Some(0));
        assert!(gen.generate(0, 3).is_err());
        assert!(gen.generate(3, 0).is_err());
    }

    #[test]
    fn same_seed_same_maze() {
        let a = MazeGenerator::from_rng(StdRng::seed_from_u64(42))
            .generate(9, 7)
            .unwrap();
        let b = MazeGenerator::new(Some(42)).generate(9, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn observer_does_not_change_outcome() {
        let plain = MazeGenerator::new(Some(7)).generate(6, 5).unwrap();
        let mut frames = Vec::new();
        let observed = MazeGenerator::new(Some(7))
            .generate_observed(6, 5, |grid| frames.push(grid.clone()))
            .unwrap();

        assert_eq!(plain, observed);
        assert!(frames.len() >= 6 * 5 - 1);
    }

    #[test]
    fn push_walls_skips_added_and_outside_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.mark_added(0, 1);
        grid.mark_added(1, 0);

        let mut frontier = Vec::new();
        MazeGenerator::push_walls(&grid, (0, 0), &mut frontier);
        assert!(frontier.is_empty());

        MazeGenerator::push_walls(&grid, (1, 1), &mut frontier);
        assert_eq!(
            frontier,
            vec![
                WallPiece {
                    row: 1,
                    col: 1,
                    direction: Direction::East
                },
                WallPiece {
                    row: 1,
                    col: 1,
                    direction: Direction::South
                },
            ]
        );
    }
}
