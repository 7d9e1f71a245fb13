//! Move validation, application and turn derivation.

use crate::error::MoveError;
use crate::{Board, Mark, Position};
use tracing::instrument;

/// True when `index` names an empty cell.
///
/// Out-of-range indices are simply invalid.
#[instrument(level = "trace")]
pub fn is_valid_move(board: &Board, index: isize) -> bool {
    Position::from_signed(index).is_some_and(|pos| board.is_empty(pos))
}

/// Returns a new board with `mark` placed at `index`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`MoveError::OutOfRange`] for an index outside 0-8 and
/// [`MoveError::Occupied`] when the cell is already claimed.
#[instrument(level = "trace")]
pub fn apply_move(board: &Board, index: isize, mark: Mark) -> Result<Board, MoveError> {
    let position = Position::from_signed(index).ok_or(MoveError::OutOfRange { index })?;
    if !board.is_empty(position) {
        return Err(MoveError::Occupied { position });
    }
    Ok(board.with_mark(position, mark))
}

/// Whose turn it is on `board`.
///
/// X moves first, so an even number of marks means X is up. This depends
/// only on the board, which keeps it correct after a history jump.
#[instrument(level = "trace")]
pub fn current_player(board: &Board) -> Mark {
    if board.mark_count() % 2 == 0 {
        Mark::X
    } else {
        Mark::O
    }
}
