//! Legal move generation.
//!
//! Generates the legal pawn destinations and wall placements for the
//! player to act, and picks random legal actions for playouts.

pub mod pawn;
pub mod walls;

use rand::Rng;

use crate::board::{Action, GameState};

pub use pawn::{is_legal_destination, legal_destinations, validate_move, MoveError};
pub use walls::{check_structure, first_blocked_player, legal_walls, validate_wall, WallError};

/// Generates every legal action for the player to act.
///
/// Pawn moves come first, then walls in slot order. Empty once the game
/// is over. Walls are omitted when the player has none left.
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    if state.is_terminal() {
        return Vec::new();
    }
    let player = state.current_player();
    let from = state.positions()[player];
    let mut actions: Vec<Action> = legal_destinations(state, from)
        .into_iter()
        .map(Action::Move)
        .collect();
    if state.walls_left()[player] > 0 {
        actions.extend(legal_walls(state).into_iter().map(Action::Wall));
    }
    actions
}

/// Picks a uniformly random legal action for the player to act, or `None`
/// once the game is over.
///
/// With probability `wall_bias` the pick is drawn from wall placements
/// only (when any are legal); otherwise from pawn moves. A bias of 0.0
/// always moves the pawn, which guarantees progress in playouts.
pub fn random_action(state: &GameState, wall_bias: f64, rng: &mut impl Rng) -> Option<Action> {
    if state.is_terminal() {
        return None;
    }
    let player = state.current_player();
    if state.walls_left()[player] > 0 && rng.gen_bool(wall_bias.clamp(0.0, 1.0)) {
        let walls = legal_walls(state);
        if !walls.is_empty() {
            let idx = rng.gen_range(0..walls.len());
            return Some(Action::Wall(walls[idx]));
        }
    }
    let moves = legal_destinations(state, state.positions()[player]);
    if moves.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..moves.len());
    Some(Action::Move(moves[idx]))
}
