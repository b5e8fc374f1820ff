//! Turn and end-of-game control.
//!
//! `Game` owns the state and is its only write path. Each command either
//! validates and fully commits, or is rejected with the state untouched.
//! Rejections are ordinary outcomes and are reported to the caller, never
//! logged here.

use tracing::{debug, info};

use crate::board::{Action, Cell, GameState, Orientation, Seat, Wall, WallGrid};
use crate::config::{ConfigError, GameConfig};
use crate::movegen::{self, MoveError, WallError};
use crate::search;

/// Reason an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("illegal wall: {0}")]
    Wall(#[from] WallError),
}

/// A game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Starts a standard game on a `board_size` board with `players` players.
    pub fn new(board_size: usize, players: usize) -> Result<Self, ConfigError> {
        Self::with_config(&GameConfig::standard(board_size, players)?)
    }

    /// Starts a game from an explicit configuration.
    pub fn with_config(config: &GameConfig) -> Result<Self, ConfigError> {
        let state = GameState::new(config)?;
        info!(
            board_size = config.board_size,
            players = config.players(),
            walls_each = config.walls_per_player(),
            "new game"
        );
        Ok(Game { state })
    }

    /// Starts a game with pawns on arbitrary cells, no walls placed, and
    /// player 0 to act.
    pub fn with_positions(config: &GameConfig, positions: &[Cell]) -> Result<Self, ConfigError> {
        Ok(Game {
            state: GameState::with_positions(config, positions)?,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board_size(&self) -> usize {
        self.state.board_size()
    }

    pub fn player_count(&self) -> usize {
        self.state.player_count()
    }

    /// Pawn positions ordered by player index.
    pub fn positions(&self) -> &[Cell] {
        self.state.positions()
    }

    /// Remaining wall budgets ordered by player index.
    pub fn walls_left(&self) -> &[usize] {
        self.state.walls_left()
    }

    pub fn walls(&self) -> &WallGrid {
        self.state.walls()
    }

    pub fn seats(&self) -> &[Seat] {
        self.state.seats()
    }

    pub fn current_player(&self) -> usize {
        self.state.current_player()
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// The winning player; `None` until the game is over.
    pub fn winner(&self) -> Option<usize> {
        self.state.winner()
    }

    /// Legal destinations of the player to act. Empty once the game is over.
    pub fn legal_destinations(&self) -> Vec<Cell> {
        if self.is_terminal() {
            return Vec::new();
        }
        let from = self.positions()[self.current_player()];
        movegen::legal_destinations(&self.state, from)
    }

    /// Legal destinations of whatever pawn stands on `from`.
    pub fn destinations_from(&self, from: Cell) -> Vec<Cell> {
        movegen::legal_destinations(&self.state, from)
    }

    /// Walls the player to act may place. Empty when their budget is spent
    /// or the game is over.
    pub fn legal_walls(&self) -> Vec<Wall> {
        if self.is_terminal() || self.walls_left()[self.current_player()] == 0 {
            return Vec::new();
        }
        movegen::legal_walls(&self.state)
    }

    pub fn legal_actions(&self) -> Vec<Action> {
        movegen::legal_actions(&self.state)
    }

    /// Shortest open-path distance from `player`'s pawn to their goal edge.
    pub fn goal_distance(&self, player: usize) -> Option<usize> {
        let from = *self.positions().get(player)?;
        let goal = self.state.goal(player)?;
        search::goal_distance(self.walls(), from, goal)
    }

    /// Moves the active player's pawn to `to`.
    ///
    /// On success the turn passes to the next player, and the game ends if
    /// the mover reached their goal edge.
    pub fn try_move(&mut self, to: Cell) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let player = self.current_player();
        let from = self.positions()[player];
        movegen::validate_move(&self.state, from, to)?;

        self.state.set_position(player, to);
        self.state.advance_turn();
        debug!(player, %from, %to, "pawn moved");

        if self.state.has_arrived(player) {
            self.state.set_winner(player);
            info!(winner = player, "game over");
        }
        Ok(())
    }

    /// Places `wall` for the active player, charging one wall from their budget.
    pub fn try_wall(&mut self, wall: Wall) -> Result<(), WallError> {
        if self.is_terminal() {
            return Err(WallError::GameOver);
        }
        let player = self.current_player();
        if self.walls_left()[player] == 0 {
            return Err(WallError::NoWallsLeft);
        }
        movegen::validate_wall(&self.state, wall)?;

        self.state.commit_wall(player, wall);
        self.state.advance_turn();
        debug!(player, %wall, walls_left = self.walls_left()[player], "wall placed");
        Ok(())
    }

    /// Applies either kind of action.
    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Move(to) => self.try_move(to)?,
            Action::Wall(wall) => self.try_wall(wall)?,
        }
        Ok(())
    }

    /// Moves the active pawn to `(row, col)`. Returns false, leaving the
    /// game unchanged, if the move is illegal.
    pub fn submit_move(&mut self, row: usize, col: usize) -> bool {
        self.try_move(Cell::new(row, col)).is_ok()
    }

    /// Places a wall for the active player. Returns false, leaving the game
    /// unchanged, if the placement is illegal or their budget is spent.
    pub fn submit_wall(&mut self, row: usize, col: usize, orientation: Orientation) -> bool {
        self.try_wall(Wall::new(row, col, orientation)).is_ok()
    }
}
