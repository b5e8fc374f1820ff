//! Wall placement validation.
//!
//! A placement is checked in two stages: structural legality against the
//! walls already on the board, then the connectivity rule that every
//! player must keep an open path to their goal edge. The connectivity
//! check runs against a copy of the wall grid, so a rejected placement
//! never touches the live state.

use rayon::prelude::*;

use crate::board::{GameState, Wall, WallGrid};
use crate::search::reaches_goal;

/// Reasons a wall placement is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WallError {
    #[error("the game is over")]
    GameOver,

    #[error("no walls left")]
    NoWallsLeft,

    #[error("wall {0} is off the board")]
    OutOfBounds(Wall),

    #[error("wall {0} is already placed")]
    Occupied(Wall),

    #[error("wall {0} crosses a wall at the same junction")]
    Crosses(Wall),

    #[error("wall {0} overlaps a parallel wall")]
    Overlaps(Wall),

    #[error("wall would cut player {0} off from their goal")]
    BlocksPlayer(usize),
}

/// Checks that `wall` fits among the walls already placed: on the board,
/// not already present, not crossing the perpendicular wall at the same
/// junction, and not sharing a segment with a parallel neighbor.
///
/// Parallel walls two junctions apart touch end to end and are allowed.
pub fn check_structure(walls: &WallGrid, wall: Wall) -> Result<(), WallError> {
    if !wall.in_bounds(walls.board_size()) {
        return Err(WallError::OutOfBounds(wall));
    }
    if walls.contains(wall) {
        return Err(WallError::Occupied(wall));
    }
    let crossing = Wall::new(wall.row, wall.col, wall.orientation.other());
    if walls.contains(crossing) {
        return Err(WallError::Crosses(wall));
    }
    if wall.overlapping().any(|w| walls.contains(w)) {
        return Err(WallError::Overlaps(wall));
    }
    Ok(())
}

/// Returns the first player who could no longer reach their goal edge if
/// `walls` were the placed walls.
pub fn first_blocked_player(state: &GameState, walls: &WallGrid) -> Option<usize> {
    state
        .positions()
        .iter()
        .zip(state.seats())
        .position(|(&cell, seat)| !reaches_goal(walls, cell, seat.goal))
}

/// Validates placing `wall` in `state`, ignoring whose turn it is and
/// their budget.
pub fn validate_wall(state: &GameState, wall: Wall) -> Result<(), WallError> {
    check_structure(state.walls(), wall)?;
    let proposed = state.walls().with(wall);
    match first_blocked_player(state, &proposed) {
        Some(player) => Err(WallError::BlocksPlayer(player)),
        None => Ok(()),
    }
}

/// Generates every wall slot that `validate_wall` accepts, in slot order.
///
/// Candidates are checked in parallel; the state is only read.
pub fn legal_walls(state: &GameState) -> Vec<Wall> {
    let slots: Vec<Wall> = WallGrid::all_slots(state.board_size()).collect();
    slots
        .into_par_iter()
        .filter(|&w| validate_wall(state, w).is_ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn opening() -> GameState {
        GameState::new(&GameConfig::default()).unwrap()
    }

    fn placed(walls: &[Wall]) -> GameState {
        let mut state = opening();
        for &w in walls {
            state.commit_wall(0, w);
        }
        state
    }

    #[test]
    fn open_board_accepts_every_slot() {
        assert_eq!(legal_walls(&opening()).len(), 128);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let state = opening();
        assert_eq!(
            validate_wall(&state, Wall::horizontal(8, 0)),
            Err(WallError::OutOfBounds(Wall::horizontal(8, 0)))
        );
        assert_eq!(
            validate_wall(&state, Wall::vertical(0, 8)),
            Err(WallError::OutOfBounds(Wall::vertical(0, 8)))
        );
    }

    #[test]
    fn rejects_duplicate() {
        let state = placed(&[Wall::vertical(4, 4)]);
        assert_eq!(
            validate_wall(&state, Wall::vertical(4, 4)),
            Err(WallError::Occupied(Wall::vertical(4, 4)))
        );
    }

    #[test]
    fn rejects_crossing_at_same_junction() {
        let state = placed(&[Wall::horizontal(4, 4)]);
        assert_eq!(
            validate_wall(&state, Wall::vertical(4, 4)),
            Err(WallError::Crosses(Wall::vertical(4, 4)))
        );
    }

    #[test]
    fn perpendicular_at_neighboring_junction_is_fine() {
        let state = placed(&[Wall::horizontal(4, 4)]);
        assert_eq!(validate_wall(&state, Wall::vertical(4, 5)), Ok(()));
        assert_eq!(validate_wall(&state, Wall::vertical(3, 4)), Ok(()));
    }

    #[test]
    fn rejects_parallel_overlap() {
        let state = placed(&[Wall::horizontal(4, 4)]);
        assert_eq!(
            validate_wall(&state, Wall::horizontal(4, 5)),
            Err(WallError::Overlaps(Wall::horizontal(4, 5)))
        );
        assert_eq!(
            validate_wall(&state, Wall::horizontal(4, 3)),
            Err(WallError::Overlaps(Wall::horizontal(4, 3)))
        );
        let state = placed(&[Wall::vertical(2, 2)]);
        assert_eq!(
            validate_wall(&state, Wall::vertical(3, 2)),
            Err(WallError::Overlaps(Wall::vertical(3, 2)))
        );
    }

    #[test]
    fn parallel_walls_may_extend_a_run() {
        let state = placed(&[Wall::horizontal(4, 2)]);
        assert_eq!(validate_wall(&state, Wall::horizontal(4, 4)), Ok(()));
        assert_eq!(validate_wall(&state, Wall::horizontal(4, 0)), Ok(()));
    }

    #[test]
    fn rejects_sealing_a_player_in() {
        // Player 0 on (8,4) sits in a one-wide corridor of (8,4) and (7,4).
        let state = placed(&[Wall::vertical(7, 3), Wall::vertical(7, 4)]);
        assert_eq!(
            validate_wall(&state, Wall::horizontal(6, 3)),
            Err(WallError::BlocksPlayer(0))
        );
        assert_eq!(
            validate_wall(&state, Wall::horizontal(6, 4)),
            Err(WallError::BlocksPlayer(0))
        );
        assert_eq!(validate_wall(&state, Wall::horizontal(5, 4)), Ok(()));
        assert!(!state.walls().contains(Wall::horizontal(6, 3)));
        assert_eq!(first_blocked_player(&state, state.walls()), None);
    }

    #[test]
    fn rejects_sealing_the_second_player() {
        // Mirror image around player 1 on (0,4).
        let state = placed(&[Wall::vertical(0, 3), Wall::vertical(0, 4)]);
        assert_eq!(
            validate_wall(&state, Wall::horizontal(1, 4)),
            Err(WallError::BlocksPlayer(1))
        );
        let legal = legal_walls(&state);
        assert!(!legal.contains(&Wall::horizontal(1, 3)));
        assert!(!legal.contains(&Wall::horizontal(1, 4)));
        assert!(legal.contains(&Wall::horizontal(2, 4)));
        assert!(legal.iter().all(|&w| !state.walls().contains(w)));
    }
}
