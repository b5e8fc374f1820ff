//! Text rendering of a game.
//!
//! The board diagram puts cells on even lines and wall gaps on odd lines.
//! Pawns are shown by player index, empty cells by `.`, wall segments by
//! `|` and `-`. Trailing blanks are trimmed from every line.
//!
//! ```text
//! . . 1 . .
//!
//! . . . . .
//!     ---
//! . . .|. .
//!      |
//! . . .|. .
//!
//! . . 0 . .
//! ```

use serde::Serialize;

use crate::board::{Cell, Direction, GameState, Seat, Wall, WallGrid};
use crate::game::Game;

fn pawn_char(state: &GameState, cell: Cell) -> char {
    match state.occupant(cell) {
        Some(player) => char::from_digit(player as u32, 10).unwrap_or('?'),
        None => '.',
    }
}

fn junction_char(walls: &WallGrid, row: usize, col: usize) -> char {
    if walls.contains(Wall::horizontal(row, col)) {
        '-'
    } else if walls.contains(Wall::vertical(row, col)) {
        '|'
    } else {
        ' '
    }
}

/// Renders the board as lines of text.
pub fn render_board(state: &GameState) -> Vec<String> {
    let n = state.board_size();
    let walls = state.walls();
    let mut lines = Vec::with_capacity(2 * n);

    for row in 0..n {
        let mut cells = String::with_capacity(2 * n);
        let mut gaps = String::with_capacity(2 * n);
        for col in 0..n {
            let cell = Cell::new(row, col);
            cells.push(pawn_char(state, cell));
            gaps.push(if walls.blocks(cell, Direction::Down) { '-' } else { ' ' });
            if col + 1 < n {
                cells.push(if walls.blocks(cell, Direction::Right) { '|' } else { ' ' });
                gaps.push(junction_char(walls, row, col));
            }
        }
        lines.push(cells.trim_end().to_string());
        if row + 1 < n {
            lines.push(gaps.trim_end().to_string());
        }
    }
    lines
}

/// Serializable view of a game for the `state` command.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub board_size: usize,
    pub current_player: usize,
    pub terminal: bool,
    pub winner: Option<usize>,
    pub seats: &'a [Seat],
    pub positions: &'a [Cell],
    pub walls_left: &'a [usize],
    pub walls: &'a WallGrid,
    pub legal_moves: Vec<Cell>,
}

impl<'a> Snapshot<'a> {
    pub fn of(game: &'a Game) -> Self {
        Snapshot {
            board_size: game.board_size(),
            current_player: game.current_player(),
            terminal: game.is_terminal(),
            winner: game.winner(),
            seats: game.seats(),
            positions: game.positions(),
            walls_left: game.walls_left(),
            walls: game.walls(),
            legal_moves: game.legal_destinations(),
        }
    }
}

/// Encodes the game as a single JSON line.
pub fn encode_snapshot(game: &Game) -> serde_json::Result<String> {
    serde_json::to_string(&Snapshot::of(game))
}
