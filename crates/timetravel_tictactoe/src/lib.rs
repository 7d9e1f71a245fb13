//! Tic-tac-toe with move history and time travel.
//!
//! The crate is a small, synchronous game engine meant to sit behind a
//! presentation layer:
//!
//! - **Rules**: pure functions over a [`Board`] ([`evaluate`], [`is_draw`],
//!   [`is_valid_move`], [`apply_move`], [`current_player`])
//! - **History**: board snapshots with a cursor ([`History`])
//! - **Controller**: [`GameController`] turns clicks, jumps and resets into
//!   new [`GameState`] snapshots
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameController, Mark};
//!
//! let mut game = GameController::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.click(index);
//! }
//! assert_eq!(game.winner(), Some(Mark::X));
//!
//! // Go back to the board after X's first move.
//! game.jump_to_move(1);
//! assert_eq!(game.winner(), None);
//! assert_eq!(game.current_player(), Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod controller;
mod error;
mod history;
pub mod invariants;
mod memo;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::Move;
pub use config::{ConfigError, GameConfig};
pub use controller::GameController;
pub use error::{HistoryIndexError, MoveError};
pub use history::History;
pub use memo::{CacheStats, MemoCache};
pub use position::Position;
pub use rules::{
    Win, WinLine, WinnerResult, apply_move, current_player, evaluate, is_draw, is_valid_move,
};
pub use state::{GameState, GameStateRecord, GameStatus, StateError};
pub use types::{Board, Cell, Mark};
