//! Grid model: cell membership and removed wall segments

use anyhow::ensure;

/// Side of a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All directions, in the order candidates are proposed
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

/// One grid position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    /// Has this cell been incorporated into the maze
    added: bool,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            added: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_added(&self) -> bool {
        self.added
    }
}

/// Rectangular maze grid
///
/// Wall segments are kept in two boundary-indexed matrices. A wall is
/// only ever removed, never put back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    depth: usize,
    /// Cells, `depth` rows of `width` columns
    cells: Vec<Vec<Cell>>,
    /// `(depth + 1) × width`; entry `[r][c]` is the wall above cell `(r, c)`
    horizontal: Vec<Vec<bool>>,
    /// `depth × (width + 1)`; entry `[r][c]` is the wall left of cell `(r, c)`
    vertical: Vec<Vec<bool>>,
}

impl Grid {
    /// Create a grid with every cell unadded and every wall present,
    /// except for the entrance (top left) and exit (bottom right).
    ///
    /// Returns error, if either dimension is zero.
    pub fn new(width: usize, depth: usize) -> anyhow::Result<Self> {
        ensure!(width >= 1, "Maze width must be at least 1, got {}", width);
        ensure!(depth >= 1, "Maze depth must be at least 1, got {}", depth);

        let cells = (0..depth)
            .map(|r| (0..width).map(|c| Cell::new(r, c)).collect())
            .collect();
        let mut horizontal: Vec<Vec<bool>> =
            (0..=depth).map(|_| vec![false; width]).collect();
        let vertical = (0..depth).map(|_| vec![false; width + 1]).collect();

        horizontal[0][0] = true;
        horizontal[depth][width - 1] = true;

        Ok(Self {
            width,
            depth,
            cells,
            horizontal,
            vertical,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.depth
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    pub fn is_added(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].added
    }

    /// Mark cell as part of the maze.
    ///
    /// Returns `false` and leaves the grid untouched, if the cell was
    /// already added.
    pub fn mark_added(&mut self, row: usize, col: usize) -> bool {
        let cell = &mut self.cells[row][col];
        if cell.added {
            return false;
        }
        cell.added = true;
        true
    }

    /// Are all cells part of the maze
    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Cell::is_added)
    }

    /// Cell next to `(row, col)` in `direction`, or `None` outside the grid
    pub fn neighbor(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Option<(usize, usize)> {
        match direction {
            Direction::North if row > 0 => Some((row - 1, col)),
            Direction::South if row + 1 < self.depth => Some((row + 1, col)),
            Direction::West if col > 0 => Some((row, col - 1)),
            Direction::East if col + 1 < self.width => Some((row, col + 1)),
            _ => None,
        }
    }

    /// Matrix slot of the wall on the `direction` side of cell `(row, col)`
    fn wall_slot(&mut self, row: usize, col: usize, direction: Direction) -> &mut bool {
        match direction {
            Direction::North => &mut self.horizontal[row][col],
            Direction::South => &mut self.horizontal[row + 1][col],
            Direction::West => &mut self.vertical[row][col],
            Direction::East => &mut self.vertical[row][col + 1],
        }
    }

    /// Turn the wall on the `direction` side of cell `(row, col)` into a passage
    pub fn remove_wall(&mut self, row: usize, col: usize, direction: Direction) {
        *self.wall_slot(row, col, direction) = true;
    }

    pub fn is_wall_removed(&self, row: usize, col: usize, direction: Direction) -> bool {
        match direction {
            Direction::North => self.horizontal[row][col],
            Direction::South => self.horizontal[row + 1][col],
            Direction::West => self.vertical[row][col],
            Direction::East => self.vertical[row][col + 1],
        }
    }

    /// Is the horizontal wall segment above cell row `row` removed.
    /// `row == depth` is the bottom boundary.
    pub fn horizontal_removed(&self, row: usize, col: usize) -> bool {
        self.horizontal[row][col]
    }

    /// Is the vertical wall segment left of cell column `col` removed.
    /// `col == width` is the right boundary.
    pub fn vertical_removed(&self, row: usize, col: usize) -> bool {
        self.vertical[row][col]
    }

    /// Removed interior walls, as pairs of the cells they connect
    pub fn passages(&self) -> impl Iterator<Item = ((usize, usize), (usize, usize))> + '_ {
        let vertical = (0..self.depth).flat_map(move |r| {
            (1..self.width)
                .filter(move |&c| self.vertical[r][c])
                .map(move |c| ((r, c - 1), (r, c)))
        });
        let horizontal = (1..self.depth).flat_map(move |r| {
            (0..self.width)
                .filter(move |&c| self.horizontal[r][c])
                .map(move |c| ((r - 1, c), (r, c)))
        });
        vertical.chain(horizontal)
    }

    pub fn removed_interior_walls(&self) -> usize {
        self.passages().count()
    }
}
