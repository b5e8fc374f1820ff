//! Text protocol handling.
//!
//! This module implements parsing of the line-oriented command protocol
//! spoken by the binary, and the text and JSON renderings it replies with.

pub mod parser;
pub mod render;

pub use parser::{parse_command, Command};
pub use render::{encode_snapshot, render_board, Snapshot};
