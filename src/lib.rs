//! # Connect Four Engine
//!
//! The rules engine and turn-based state machine for two-player Connect Four:
//! a rectangular grid into which players alternately drop pieces, with
//! automatic detection of a four-in-a-row win or a full-board tie.
//!
//! The engine exclusively owns the board and turn state. Presentation layers
//! (terminal, GUI, web) drive it through [`game::GameState::apply_move`] and
//! read it back through the snapshot accessors; they are never given direct
//! mutation access to board cells.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;

pub use config::EngineConfig;
pub use error::{ConfigError, MoveError};
pub use game::{Board, Cell, GameOutcome, GameState, MoveReport, Player};
