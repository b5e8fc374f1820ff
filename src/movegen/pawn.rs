//! Pawn move generation.
//!
//! Enumerates the cells a pawn standing on a given cell may move to:
//! plain steps, straight jumps over an adjacent pawn, and diagonal
//! side-steps when the straight jump is closed off.

use crate::board::{Cell, Direction, GameState, ALL_DIRECTIONS};

/// Reasons a pawn move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("the game is over")]
    GameOver,

    #[error("cell {0} is off the board")]
    OutOfBounds(Cell),

    #[error("cell {0} cannot be reached this turn")]
    Unreachable(Cell),
}

/// Generates every legal destination for a pawn standing on `from`.
///
/// The result is sorted and free of duplicates, so two calls on the same
/// state always return identical vectors. An off-board `from` yields no
/// destinations.
pub fn legal_destinations(state: &GameState, from: Cell) -> Vec<Cell> {
    let walls = state.walls();
    let size = state.board_size();
    let mut dests = Vec::with_capacity(8);
    if !from.in_bounds(size) {
        return dests;
    }

    for dir in ALL_DIRECTIONS {
        let Some(mid) = walls.open_step(from, dir) else {
            continue;
        };
        if state.is_free(mid) {
            dests.push(mid);
            continue;
        }
        // Off the board behind `mid` is neither a jump nor a side-step.
        let Some(beyond) = mid.step(dir, size) else {
            continue;
        };
        if walls.blocks(mid, dir) {
            side_steps(state, mid, dir, &mut dests);
        } else if state.is_free(beyond) {
            dests.push(beyond);
        }
    }

    dests.sort_unstable();
    dests.dedup();
    dests
}

/// Adds the diagonal cells beside the occupied cell `mid`, reached by
/// turning off the `dir` axis through an open edge.
///
/// Only called when a wall closes the edge beyond `mid` in `dir`.
fn side_steps(state: &GameState, mid: Cell, dir: Direction, dests: &mut Vec<Cell>) {
    for side in dir.perpendicular() {
        if let Some(diag) = state.walls().open_step(mid, side) {
            if state.is_free(diag) {
                dests.push(diag);
            }
        }
    }
}

/// Validates moving the pawn on `from` to `to`.
pub fn validate_move(state: &GameState, from: Cell, to: Cell) -> Result<(), MoveError> {
    if !to.in_bounds(state.board_size()) {
        return Err(MoveError::OutOfBounds(to));
    }
    if !legal_destinations(state, from).contains(&to) {
        return Err(MoveError::Unreachable(to));
    }
    Ok(())
}

/// Returns true if a pawn on `from` may move to `to`.
pub fn is_legal_destination(state: &GameState, from: Cell, to: Cell) -> bool {
    validate_move(state, from, to).is_ok()
}
