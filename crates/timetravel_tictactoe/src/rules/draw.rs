//! Draw detection logic for tic-tac-toe.

use super::win::evaluate;
use crate::Board;
use tracing::instrument;

/// True when the board is full and nobody has a line.
///
/// A winner takes precedence: a full board with a completed line is a win.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    evaluate(board).winner().is_none() && board.is_full()
}
