//! Board representation and game-state types.
//!
//! Contains the core data structures for cells, walls, seats, actions, and the
//! overall game state.

pub mod action;
pub mod cell;
pub mod seat;
pub mod state;
pub mod wall;

pub use action::Action;
pub use cell::{Cell, Direction, ALL_DIRECTIONS};
pub use seat::{GoalEdge, Seat};
pub use state::GameState;
pub use wall::{Orientation, Wall, WallGrid};
