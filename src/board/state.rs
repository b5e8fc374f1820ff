//! Game state representation.
//!
//! Holds the complete snapshot of a game: board size, seats, pawn
//! positions, remaining wall budgets, placed walls, the player to act,
//! and the winner once the game is over.
//!
//! Fields are read-only outside the crate. The only write path is the
//! command interface on `Game`, so an illegal combination of positions
//! and walls is never observable.

use serde::Serialize;

use super::cell::Cell;
use super::seat::{GoalEdge, Seat};
use super::wall::{Wall, WallGrid};
use crate::config::{ConfigError, GameConfig};

/// Complete game state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    size: usize,
    seats: Vec<Seat>,
    positions: Vec<Cell>,
    walls_left: Vec<usize>,
    walls: WallGrid,
    current: usize,
    winner: Option<usize>,
}

impl GameState {
    /// Creates the opening state for a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let positions = config.seats.iter().map(|s| s.start).collect();
        Ok(Self::from_parts(config, positions))
    }

    /// Creates a state with pawns at arbitrary positions and no walls.
    ///
    /// Player 0 is to act. Positions are checked against the configuration
    /// but need not be the seat start cells.
    pub fn with_positions(config: &GameConfig, positions: &[Cell]) -> Result<Self, ConfigError> {
        config.validate()?;
        config.check_positions(positions)?;
        Ok(Self::from_parts(config, positions.to_vec()))
    }

    fn from_parts(config: &GameConfig, positions: Vec<Cell>) -> Self {
        let budget = config.walls_per_player();
        GameState {
            size: config.board_size,
            seats: config.seats.clone(),
            walls_left: vec![budget; positions.len()],
            positions,
            walls: WallGrid::empty(config.board_size),
            current: 0,
            winner: None,
        }
    }

    pub fn board_size(&self) -> usize {
        self.size
    }

    pub fn player_count(&self) -> usize {
        self.positions.len()
    }

    /// Pawn positions ordered by player index.
    pub fn positions(&self) -> &[Cell] {
        &self.positions
    }

    /// Remaining wall budgets ordered by player index.
    pub fn walls_left(&self) -> &[usize] {
        &self.walls_left
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn goal(&self, player: usize) -> Option<GoalEdge> {
        self.seats.get(player).map(|s| s.goal)
    }

    pub fn walls(&self) -> &WallGrid {
        &self.walls
    }

    /// Index of the player to act.
    pub fn current_player(&self) -> usize {
        self.current
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Returns true if no pawn stands on `cell`.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        !self.positions.contains(&cell)
    }

    /// Returns the player whose pawn stands on `cell`, if any.
    pub fn occupant(&self, cell: Cell) -> Option<usize> {
        self.positions.iter().position(|&c| c == cell)
    }

    /// Returns true if `player` stands on their goal edge.
    pub fn has_arrived(&self, player: usize) -> bool {
        match (self.positions.get(player), self.seats.get(player)) {
            (Some(&cell), Some(seat)) => seat.goal.contains(cell, self.size),
            _ => false,
        }
    }

    pub(crate) fn set_position(&mut self, player: usize, cell: Cell) {
        self.positions[player] = cell;
    }

    /// Commits a wall and charges it to `player`.
    pub(crate) fn commit_wall(&mut self, player: usize, wall: Wall) {
        self.walls.insert(wall);
        self.walls_left[player] -= 1;
    }

    pub(crate) fn advance_turn(&mut self) {
        self.current = (self.current + 1) % self.positions.len();
    }

    pub(crate) fn set_winner(&mut self, player: usize) {
        self.winner = Some(player);
    }
}
