//! Game configuration.
//!
//! A `GameConfig` fixes the board size and, for every player, the start
//! cell and the goal edge. Seats are explicit rather than inferred from the
//! player count so that four-player goal edges are never ambiguous.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, GoalEdge, Seat};

/// Smallest supported board side.
pub const MIN_BOARD_SIZE: usize = 5;

/// Board side of the standard game.
pub const DEFAULT_BOARD_SIZE: usize = 9;

/// Player count of the standard game.
pub const DEFAULT_PLAYERS: usize = 2;

/// Errors that can occur when building a game from a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size must be odd, got {0}")]
    EvenBoardSize(usize),

    #[error("board size must be at least 5, got {0}")]
    BoardTooSmall(usize),

    #[error("player count must be 2 or 4, got {0}")]
    UnsupportedPlayerCount(usize),

    #[error("expected {expected} positions, got {got}")]
    SeatCountMismatch { expected: usize, got: usize },

    #[error("player {player} starts off the board at {cell}")]
    StartOutOfBounds { player: usize, cell: Cell },

    #[error("player {player} starts on their own goal edge at {cell}")]
    StartOnGoal { player: usize, cell: Cell },

    #[error("players {first} and {second} share the cell {cell}")]
    SharedStart { first: usize, second: usize, cell: Cell },
}

/// Board size plus one seat per player, in player order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: usize,
    pub seats: Vec<Seat>,
}

impl GameConfig {
    /// The standard layout for `players` players on a `board_size` board.
    ///
    /// Player 0 starts at the bottom center and races to row 0, player 1 the
    /// reverse. With four players, player 2 starts at the right edge and
    /// races to column 0, player 3 the reverse.
    ///
    /// Fails on an unsupported player count; the board size is checked by
    /// `validate`.
    pub fn standard(board_size: usize, players: usize) -> Result<Self, ConfigError> {
        let goals: &[GoalEdge] = match players {
            2 => &[GoalEdge::North, GoalEdge::South],
            4 => &[GoalEdge::North, GoalEdge::South, GoalEdge::West, GoalEdge::East],
            n => return Err(ConfigError::UnsupportedPlayerCount(n)),
        };
        Ok(GameConfig {
            board_size,
            seats: goals.iter().map(|&g| Seat::facing(g, board_size)).collect(),
        })
    }

    pub fn players(&self) -> usize {
        self.seats.len()
    }

    /// Starting wall budget of each player: floor(2 * (N + 1) / P).
    pub fn walls_per_player(&self) -> usize {
        2 * (self.board_size + 1) / self.players()
    }

    /// Checks the board size, the player count, and every seat.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.board_size;
        if size < MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(size));
        }
        if size % 2 == 0 {
            return Err(ConfigError::EvenBoardSize(size));
        }
        if !matches!(self.players(), 2 | 4) {
            return Err(ConfigError::UnsupportedPlayerCount(self.players()));
        }
        let starts: Vec<Cell> = self.seats.iter().map(|s| s.start).collect();
        self.check_positions(&starts)
    }

    /// Checks that `positions` is a valid placement of every player's pawn:
    /// one per seat, on the board, not on the owner's goal edge, no sharing.
    pub fn check_positions(&self, positions: &[Cell]) -> Result<(), ConfigError> {
        if positions.len() != self.players() {
            return Err(ConfigError::SeatCountMismatch {
                expected: self.players(),
                got: positions.len(),
            });
        }
        for (player, (&cell, seat)) in positions.iter().zip(&self.seats).enumerate() {
            if !cell.in_bounds(self.board_size) {
                return Err(ConfigError::StartOutOfBounds { player, cell });
            }
            if seat.goal.contains(cell, self.board_size) {
                return Err(ConfigError::StartOnGoal { player, cell });
            }
            if let Some(first) = positions[..player].iter().position(|&c| c == cell) {
                return Err(ConfigError::SharedStart { first, second: player, cell });
            }
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        let size = DEFAULT_BOARD_SIZE;
        GameConfig {
            board_size: size,
            seats: vec![
                Seat::facing(GoalEdge::North, size),
                Seat::facing(GoalEdge::South, size),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_two_player_layout() {
        let config = GameConfig::standard(9, 2).unwrap();
        assert_eq!(config.seats[0].start, Cell::new(8, 4));
        assert_eq!(config.seats[0].goal, GoalEdge::North);
        assert_eq!(config.seats[1].start, Cell::new(0, 4));
        assert_eq!(config.seats[1].goal, GoalEdge::South);
        assert_eq!(config.walls_per_player(), 10);
        assert!(config.validate().is_ok());
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn standard_four_player_layout() {
        let config = GameConfig::standard(9, 4).unwrap();
        assert_eq!(config.seats[2].start, Cell::new(4, 8));
        assert_eq!(config.seats[2].goal, GoalEdge::West);
        assert_eq!(config.seats[3].start, Cell::new(4, 0));
        assert_eq!(config.seats[3].goal, GoalEdge::East);
        assert_eq!(config.walls_per_player(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_sizes() {
        let even = GameConfig::standard(8, 2).unwrap();
        assert_eq!(even.validate(), Err(ConfigError::EvenBoardSize(8)));
        let small = GameConfig::standard(3, 2).unwrap();
        assert_eq!(small.validate(), Err(ConfigError::BoardTooSmall(3)));
    }

    #[test]
    fn rejects_bad_player_counts() {
        assert_eq!(GameConfig::standard(9, 3), Err(ConfigError::UnsupportedPlayerCount(3)));
        let mut config = GameConfig::default();
        config.seats.pop();
        assert_eq!(config.validate(), Err(ConfigError::UnsupportedPlayerCount(1)));
    }

    #[test]
    fn rejects_bad_positions() {
        let config = GameConfig::default();
        assert_eq!(
            config.check_positions(&[Cell::new(8, 4)]),
            Err(ConfigError::SeatCountMismatch { expected: 2, got: 1 })
        );
        assert_eq!(
            config.check_positions(&[Cell::new(9, 4), Cell::new(0, 4)]),
            Err(ConfigError::StartOutOfBounds { player: 0, cell: Cell::new(9, 4) })
        );
        assert_eq!(
            config.check_positions(&[Cell::new(0, 3), Cell::new(0, 4)]),
            Err(ConfigError::StartOnGoal { player: 0, cell: Cell::new(0, 3) })
        );
        assert_eq!(
            config.check_positions(&[Cell::new(4, 4), Cell::new(4, 4)]),
            Err(ConfigError::SharedStart { first: 0, second: 1, cell: Cell::new(4, 4) })
        );
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = GameConfig::standard(7, 4).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
