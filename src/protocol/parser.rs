//! Text command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the session loop can dispatch on. Coordinates are zero-based.

use tracing::warn;

use crate::board::{Cell, Orientation, Wall};

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine replies `readyok`.
    IsReady,

    /// Start a fresh game: `newgame [size <n>] [players <p>]`.
    NewGame {
        board_size: Option<usize>,
        players: Option<usize>,
    },

    /// Move the active pawn: `move <row> <col>`.
    Move(Cell),

    /// Place a wall for the active player: `wall <row> <col> <h|v>`.
    Wall(Wall),

    /// List the active player's legal destinations.
    Moves,

    /// List the active player's legal wall placements.
    Walls,

    /// Print the board diagram.
    Board,

    /// Print a JSON snapshot of the game.
    State,

    /// Print whose turn it is, or the winner.
    Status,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines and unrecognized commands. Malformed
/// arguments for known commands also return `None` after a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&head, args) = tokens.split_first()?;

    match head {
        "isready" => Some(Command::IsReady),
        "moves" => Some(Command::Moves),
        "walls" => Some(Command::Walls),
        "board" => Some(Command::Board),
        "state" => Some(Command::State),
        "status" => Some(Command::Status),
        "quit" => Some(Command::Quit),

        "newgame" => parse_newgame(args),
        "move" => parse_move(args),
        "wall" => parse_wall(args),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

fn parse_coord(token: &str) -> Option<usize> {
    match token.parse::<usize>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(token, "invalid coordinate");
            None
        }
    }
}

/// Parses `newgame [size <n>] [players <p>]`.
fn parse_newgame(args: &[&str]) -> Option<Command> {
    let mut board_size = None;
    let mut players = None;
    let mut iter = args.iter();

    while let Some(&key) = iter.next() {
        let Some(&value) = iter.next() else {
            warn!(key, "newgame option is missing a value");
            return None;
        };
        let parsed = match value.parse::<usize>() {
            Ok(v) => v,
            Err(_) => {
                warn!(key, value, "invalid newgame value");
                return None;
            }
        };
        match key {
            "size" => board_size = Some(parsed),
            "players" => players = Some(parsed),
            other => {
                warn!(option = other, "unknown newgame option");
                return None;
            }
        }
    }

    Some(Command::NewGame { board_size, players })
}

/// Parses `move <row> <col>`.
fn parse_move(args: &[&str]) -> Option<Command> {
    let [row, col] = args else {
        warn!("malformed move: expected 'move <row> <col>'");
        return None;
    };
    Some(Command::Move(Cell::new(parse_coord(row)?, parse_coord(col)?)))
}

/// Parses `wall <row> <col> <h|v>`.
fn parse_wall(args: &[&str]) -> Option<Command> {
    let [row, col, orient] = args else {
        warn!("malformed wall: expected 'wall <row> <col> <h|v>'");
        return None;
    };
    let mut chars = orient.chars();
    let orientation = match (chars.next().and_then(Orientation::from_char), chars.next()) {
        (Some(o), None) => o,
        _ => {
            warn!(orientation = *orient, "invalid wall orientation");
            return None;
        }
    };
    Some(Command::Wall(Wall::new(parse_coord(row)?, parse_coord(col)?, orientation)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("isready"), Some(Command::IsReady));
        assert_eq!(parse_command("  board  "), Some(Command::Board));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("status"), Some(Command::Status));
    }

    #[test]
    fn parse_empty_and_unknown() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("castle"), None);
    }

    #[test]
    fn parse_newgame_defaults_and_options() {
        assert_eq!(
            parse_command("newgame"),
            Some(Command::NewGame { board_size: None, players: None })
        );
        assert_eq!(
            parse_command("newgame players 4 size 7"),
            Some(Command::NewGame { board_size: Some(7), players: Some(4) })
        );
        assert_eq!(parse_command("newgame size"), None);
        assert_eq!(parse_command("newgame size nine"), None);
        assert_eq!(parse_command("newgame colour red"), None);
    }

    #[test]
    fn parse_move_command() {
        assert_eq!(parse_command("move 7 4"), Some(Command::Move(Cell::new(7, 4))));
        assert_eq!(parse_command("move 7"), None);
        assert_eq!(parse_command("move -1 4"), None);
        assert_eq!(parse_command("move 7 4 1"), None);
    }

    #[test]
    fn parse_wall_command() {
        assert_eq!(parse_command("wall 3 2 h"), Some(Command::Wall(Wall::horizontal(3, 2))));
        assert_eq!(parse_command("wall 0 0 V"), Some(Command::Wall(Wall::vertical(0, 0))));
        assert_eq!(parse_command("wall 3 2 x"), None);
        assert_eq!(parse_command("wall 3 2 hv"), None);
        assert_eq!(parse_command("wall 3 h"), None);
    }
}
