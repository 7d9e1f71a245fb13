//! Error types for rejected moves and history jumps.
//!
//! The controller swallows these at its boundary and logs them; the strict
//! `try_*` entry points hand them to the caller instead.

use crate::position::Position;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell (negative or >= 9).
    #[display("Index {index} is outside the board (must be 0-8)")]
    OutOfRange {
        /// Index the caller supplied.
        index: isize,
    },

    /// The cell is already claimed.
    #[display("Cell {position} is already occupied")]
    Occupied {
        /// The occupied position.
        position: Position,
    },

    /// The displayed board already has a winner or is full.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// A history jump outside `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Move {index} is not in history (0..{len})")]
pub struct HistoryIndexError {
    /// Requested move number.
    pub index: isize,
    /// History length at the time of the request.
    pub len: usize,
}

impl std::error::Error for HistoryIndexError {}
