//! Core Connect Four game logic: board representation, player types, and the
//! turn-based game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveReport};
