//! Player actions.
//!
//! On each turn the player to act either moves their pawn or places a
//! wall. The text form matches the protocol: `move <row> <col>` and
//! `wall <row> <col> <h|v>`.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::wall::Wall;

/// A single turn's action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the pawn to the given cell.
    Move(Cell),
    /// Place a wall.
    Wall(Wall),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move(cell) => write!(f, "move {} {}", cell.row, cell.col),
            Action::Wall(wall) => write!(
                f,
                "wall {} {} {}",
                wall.row,
                wall.col,
                wall.orientation.as_char()
            ),
        }
    }
}
