//! Player seats: where a pawn starts and which edge it must reach.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// A boundary of the board. A player wins by standing on any cell of
/// their goal edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalEdge {
    /// Row 0.
    North,
    /// Row N-1.
    South,
    /// Column N-1.
    East,
    /// Column 0.
    West,
}

impl GoalEdge {
    /// Returns true if `cell` lies on this edge of a board of side `size`.
    #[inline]
    pub fn contains(self, cell: Cell, size: usize) -> bool {
        match self {
            GoalEdge::North => cell.row == 0,
            GoalEdge::South => cell.row + 1 == size,
            GoalEdge::East => cell.col + 1 == size,
            GoalEdge::West => cell.col == 0,
        }
    }

    pub const fn opposite(self) -> GoalEdge {
        match self {
            GoalEdge::North => GoalEdge::South,
            GoalEdge::South => GoalEdge::North,
            GoalEdge::East => GoalEdge::West,
            GoalEdge::West => GoalEdge::East,
        }
    }

    /// Center cell of this edge on a board of side `size`.
    pub fn center(self, size: usize) -> Cell {
        let mid = size / 2;
        match self {
            GoalEdge::North => Cell::new(0, mid),
            GoalEdge::South => Cell::new(size.saturating_sub(1), mid),
            GoalEdge::East => Cell::new(mid, size.saturating_sub(1)),
            GoalEdge::West => Cell::new(mid, 0),
        }
    }
}

/// Start cell and goal edge of one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat {
    pub start: Cell,
    pub goal: GoalEdge,
}

impl Seat {
    /// A seat starting at the center of the edge opposite `goal`.
    pub fn facing(goal: GoalEdge, size: usize) -> Self {
        Seat {
            start: goal.opposite().center(size),
            goal,
        }
    }
}
