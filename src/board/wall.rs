//! Wall slots and the placed-wall bitmap.
//!
//! A board of side N has (N-1)x(N-1) junctions. A wall anchored at junction
//! `(row, col)` spans two cell-boundary segments:
//!
//! - `Horizontal` lies between rows `row` and `row + 1`, covering columns
//!   `col` and `col + 1`. It blocks vertical movement.
//! - `Vertical` lies between columns `col` and `col + 1`, covering rows
//!   `row` and `row + 1`. It blocks horizontal movement.

use serde::{Deserialize, Serialize, Serializer};

use super::cell::{Cell, Direction};

/// Orientation of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Returns the single-character protocol abbreviation.
    pub const fn as_char(self) -> char {
        match self {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        }
    }

    /// Parses an orientation from its single-character abbreviation.
    pub fn from_char(c: char) -> Option<Orientation> {
        match c {
            'h' | 'H' => Some(Orientation::Horizontal),
            'v' | 'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// The crossing orientation.
    pub const fn other(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A wall anchored at a junction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Wall {
    pub const fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self { row, col, orientation }
    }

    pub const fn horizontal(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    pub const fn vertical(row: usize, col: usize) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }

    /// Returns true if the junction exists on a board of side `size`.
    #[inline]
    pub const fn in_bounds(self, size: usize) -> bool {
        let junctions = size.saturating_sub(1);
        self.row < junctions && self.col < junctions
    }

    /// The same-orientation walls that would share a segment with this one.
    pub fn overlapping(self) -> impl Iterator<Item = Wall> {
        let (row, col, o) = (self.row, self.col, self.orientation);
        let neighbors = match o {
            Orientation::Horizontal => [
                col.checked_sub(1).map(|c| Wall::new(row, c, o)),
                Some(Wall::new(row, col + 1, o)),
            ],
            Orientation::Vertical => [
                row.checked_sub(1).map(|r| Wall::new(r, col, o)),
                Some(Wall::new(row + 1, col, o)),
            ],
        };
        neighbors.into_iter().flatten()
    }
}

impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}{}", self.row, self.col, self.orientation.as_char())
    }
}

/// Presence bitmap over every wall slot of a board.
///
/// Slots are only ever set, never cleared, during a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WallGrid {
    size: usize,
    slots: Vec<bool>,
}

impl WallGrid {
    /// Creates an empty grid for a board of side `size`.
    pub fn empty(size: usize) -> Self {
        let junctions = size.saturating_sub(1);
        WallGrid {
            size,
            slots: vec![false; junctions * junctions * 2],
        }
    }

    /// Side length of the board this grid belongs to.
    pub fn board_size(&self) -> usize {
        self.size
    }

    #[inline]
    fn slot(&self, wall: Wall) -> usize {
        let orient = match wall.orientation {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 1,
        };
        (wall.row * (self.size - 1) + wall.col) * 2 + orient
    }

    /// Returns true if the wall is placed. Out-of-range slots are never placed.
    #[inline]
    pub fn contains(&self, wall: Wall) -> bool {
        wall.in_bounds(self.size) && self.slots[self.slot(wall)]
    }

    /// Marks a slot as occupied. Returns false if the slot is out of range
    /// or already set.
    pub fn insert(&mut self, wall: Wall) -> bool {
        if !wall.in_bounds(self.size) {
            return false;
        }
        let idx = self.slot(wall);
        if self.slots[idx] {
            return false;
        }
        self.slots[idx] = true;
        true
    }

    /// Returns a copy of this grid with `wall` added.
    pub fn with(&self, wall: Wall) -> WallGrid {
        let mut next = self.clone();
        next.insert(wall);
        next
    }

    /// Number of placed walls.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| **s).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.slots.iter().any(|s| *s)
    }

    /// Every slot on the board, placed or not, in row-major order.
    pub fn all_slots(size: usize) -> impl Iterator<Item = Wall> {
        let junctions = size.saturating_sub(1);
        (0..junctions).flat_map(move |row| {
            (0..junctions).flat_map(move |col| {
                [Wall::horizontal(row, col), Wall::vertical(row, col)]
            })
        })
    }

    /// Iterates over placed walls in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Wall> + '_ {
        Self::all_slots(self.size).filter(move |w| self.contains(*w))
    }

    /// Returns true if a wall segment closes the edge leaving `from` in `dir`.
    ///
    /// Edges on the board boundary are not considered blocked here; use
    /// `open_step` to also account for the boundary.
    pub fn blocks(&self, from: Cell, dir: Direction) -> bool {
        let (r, c) = (from.row, from.col);
        let (anchor_fixed, perpendicular, orientation) = match dir {
            Direction::Up => match r.checked_sub(1) {
                Some(above) => (above, c, Orientation::Horizontal),
                None => return false,
            },
            Direction::Down => (r, c, Orientation::Horizontal),
            Direction::Left => match c.checked_sub(1) {
                Some(left) => (left, r, Orientation::Vertical),
                None => return false,
            },
            Direction::Right => (c, r, Orientation::Vertical),
        };
        // A segment is covered by the wall anchored at its own index or the one before it.
        [Some(perpendicular), perpendicular.checked_sub(1)]
            .into_iter()
            .flatten()
            .any(|p| {
                let wall = match orientation {
                    Orientation::Horizontal => Wall::horizontal(anchor_fixed, p),
                    Orientation::Vertical => Wall::vertical(p, anchor_fixed),
                };
                self.contains(wall)
            })
    }

    /// Returns the neighbor of `from` in `dir` if the shared edge is open
    /// and the neighbor is on the board.
    #[inline]
    pub fn open_step(&self, from: Cell, dir: Direction) -> Option<Cell> {
        let to = from.step(dir, self.size)?;
        (!self.blocks(from, dir)).then_some(to)
    }
}

impl Serialize for WallGrid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
