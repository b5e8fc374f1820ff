//! Board cells and movement directions.
//!
//! Cells are addressed by `(row, col)` with row 0 at the top edge. All
//! arithmetic that can leave the board goes through `Cell::step`, which
//! returns `None` instead of wrapping.

use serde::{Deserialize, Serialize};

/// A single square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Creates a cell at the given coordinates.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the cell lies on a board of side `size`.
    #[inline]
    pub const fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Row-major index of the cell on a board of side `size`.
    #[inline]
    pub const fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Returns the neighboring cell in `dir`, or `None` if it falls off the board.
    pub fn step(self, dir: Direction, size: usize) -> Option<Cell> {
        let (row, col) = match dir {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
        };
        let next = Cell::new(row, col);
        next.in_bounds(size).then_some(next)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// One of the four orthogonal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// All directions in a fixed order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// The two directions at right angles to this one.
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::Up | Direction::Down => [Direction::Left, Direction::Right],
            Direction::Left | Direction::Right => [Direction::Up, Direction::Down],
        }
    }
}
