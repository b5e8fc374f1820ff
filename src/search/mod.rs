//! Graph search over the board.
//!
//! Reachability and shortest-distance queries used by wall validation
//! and by the goal-distance query.

pub mod reach;

pub use reach::{goal_distance, reachable_cells, reaches_goal};
