//! Cursor invariant: the cursor names a snapshot and history starts empty.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: `0 <= cursor < len(history)` and snapshot 0 is the empty board.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        state.cursor() < history.len() && history.board_at(0) == Some(&Board::new())
    }

    fn description() -> &'static str {
        "Cursor lies within history, which starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::{Mark, Position};

    #[test]
    fn test_initial_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameState::initial()));
    }

    #[test]
    fn test_nonempty_start_violates() {
        let start = Board::new().with_mark(Position::Center, Mark::X);
        let history = History::from_parts(vec![start], 0).expect("cursor in range");
        assert!(!CursorInBoundsInvariant::holds(&GameState::from_history(history)));
    }
}
