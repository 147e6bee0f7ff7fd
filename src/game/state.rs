use super::{Board, Player};
use crate::config::EngineConfig;
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// What a successful [`GameState::apply_move`] did: where the piece landed,
/// who placed it, and the game outcome after the move (if any). Everything a
/// presentation layer needs to render the placed piece and react to the end
/// of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub row: usize,
    pub col: usize,
    pub player: Player,
    pub outcome: Option<GameOutcome>,
}

/// The Connect Four engine: board plus turn state, advanced one move at a
/// time through [`apply_move`](GameState::apply_move).
///
/// All illegal moves are rejected before any mutation, so a failed call
/// leaves the state exactly as it was. Once the game is over the engine
/// freezes: the recorded current player is the winner (or, on a draw, the
/// player who filled the board) and every further move is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh game on a board of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        GameState {
            board: Board::new(width, height),
            current_player: Player::One, // Player 1 starts
            outcome: None,
        }
    }

    /// Create a fresh game on the default 7×6 board.
    pub fn initial() -> Self {
        GameState {
            board: Board::default(),
            current_player: Player::One,
            outcome: None,
        }
    }

    /// Create a fresh game from a validated configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.width, config.height)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// The row a piece dropped in `col` would land in. Pure query: does not
    /// consult turn state or mutate anything.
    pub fn legal_move_target(&self, col: usize) -> Result<usize, MoveError> {
        self.board.landing_row(col)
    }

    /// Get list of legal columns (not full); empty once the game is over.
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply the current player's move: drop a piece in `col`, check for a
    /// win, then for a tie, then hand the turn to the other player.
    ///
    /// The win check runs first so that a board filled by the winning piece
    /// counts as a win, not a tie. On a terminal move the current player is
    /// left unchanged, so `current_player` keeps naming the winner.
    pub fn apply_move(&mut self, col: usize) -> Result<MoveReport, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(col, player.to_cell())?;

        if self.board.check_win(row, col) {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = player.other();
        }

        Ok(MoveReport {
            row,
            col,
            player,
            outcome: self.outcome,
        })
    }

    /// Restart the game on the same dimensions: all cells empty, Player 1
    /// to move.
    pub fn reset(&mut self) {
        *self = Self::new(self.board.width(), self.board.height());
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
