//! Protocol session state.
//!
//! Holds the current game between commands and writes one response per
//! command. Illegal moves and walls are answered with `illegal <reason>`;
//! commands that need a game before one exists get `error no game`.

use std::io::{self, Write};

use crate::config::{GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_PLAYERS};
use crate::game::{ActionError, Game};
use crate::protocol::{encode_snapshot, render_board, Command};
use crate::board::Action;

/// Whether the main loop should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Holds the game being played, if any.
#[derive(Debug, Default)]
pub struct Session {
    game: Option<Game>,
}

impl Session {
    /// Creates a session with no game.
    pub fn new() -> Self {
        Session { game: None }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Dispatches one command and writes its response.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewGame { board_size, players } => {
                self.new_game(board_size.unwrap_or(DEFAULT_BOARD_SIZE), players.unwrap_or(DEFAULT_PLAYERS), out)?
            }
            Command::Move(cell) => self.apply(Action::Move(cell), out)?,
            Command::Wall(wall) => self.apply(Action::Wall(wall), out)?,
            Command::Moves => match &self.game {
                Some(game) => write_list(out, "moves", game.legal_destinations())?,
                None => no_game(out)?,
            },
            Command::Walls => match &self.game {
                Some(game) => write_list(out, "walls", game.legal_walls())?,
                None => no_game(out)?,
            },
            Command::Board => match &self.game {
                Some(game) => {
                    for line in render_board(game.state()) {
                        writeln!(out, "{}", line)?;
                    }
                    writeln!(out, "end")?;
                }
                None => no_game(out)?,
            },
            Command::State => match &self.game {
                Some(game) => {
                    let json = encode_snapshot(game).map_err(io::Error::other)?;
                    writeln!(out, "{}", json)?;
                }
                None => no_game(out)?,
            },
            Command::Status => match &self.game {
                Some(game) => write_status(game, out)?,
                None => no_game(out)?,
            },
            Command::Quit => return Ok(Flow::Quit),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    fn new_game<W: Write>(&mut self, board_size: usize, players: usize, out: &mut W) -> io::Result<()> {
        let created = GameConfig::standard(board_size, players).and_then(|c| Game::with_config(&c));
        match created {
            Ok(game) => {
                self.game = Some(game);
                writeln!(out, "ok")
            }
            Err(e) => writeln!(out, "error {}", e),
        }
    }

    fn apply<W: Write>(&mut self, action: Action, out: &mut W) -> io::Result<()> {
        let Some(game) = self.game.as_mut() else {
            return no_game(out);
        };
        match game.apply(action) {
            Ok(()) => {
                writeln!(out, "ok")?;
                if let Some(winner) = game.winner() {
                    writeln!(out, "winner {}", winner)?;
                }
                Ok(())
            }
            Err(ActionError::Move(e)) => writeln!(out, "illegal {}", e),
            Err(ActionError::Wall(e)) => writeln!(out, "illegal {}", e),
        }
    }
}

fn no_game<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "error no game")
}

/// Writes `keyword` followed by the items, space separated.
fn write_list<W: Write, T: std::fmt::Display>(out: &mut W, keyword: &str, items: Vec<T>) -> io::Result<()> {
    let mut line = String::from(keyword);
    for item in items {
        line.push(' ');
        line.push_str(&item.to_string());
    }
    writeln!(out, "{}", line)
}

fn write_status<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    match game.winner() {
        Some(winner) => writeln!(out, "winner {}", winner),
        None => writeln!(
            out,
            "turn {} walls {}",
            game.current_player(),
            game.walls_left()[game.current_player()]
        ),
    }
}
