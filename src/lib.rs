//! Quoridor rule engine library.
//!
//! Exposes the board representation, move and wall validation, the turn
//! controller, and the text protocol for use by integration tests and the
//! binary entry point.

pub mod board;
pub mod config;
pub mod game;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod session;

pub use board::{Action, Cell, GameState, GoalEdge, Orientation, Wall};
pub use config::{ConfigError, GameConfig};
pub use game::{ActionError, Game};
pub use movegen::{MoveError, WallError};
