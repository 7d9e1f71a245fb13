//! Status invariant: the stored status is the one the displayed board implies.

use super::Invariant;
use crate::GameState;
use crate::state::GameStatus;

/// Invariant: `status == GameStatus::of(board at cursor)`.
pub struct StatusMatchesBoardInvariant;

impl Invariant<GameState> for StatusMatchesBoardInvariant {
    fn holds(state: &GameState) -> bool {
        state.status() == GameStatus::of(state.board())
    }

    fn description() -> &'static str {
        "Winner and draw flags match the displayed board"
    }
}
