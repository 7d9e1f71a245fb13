//! Monotonic history invariant: each snapshot adds one mark for the player
//! whose turn it was.

use super::Invariant;
use crate::GameState;
use crate::rules::current_player;
use crate::state::GameStatus;

/// Invariant: snapshot `n` equals snapshot `n - 1` plus exactly one mark,
/// placed by `current_player(snapshot n - 1)`, and no snapshot follows a
/// finished board.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        (1..history.len()).all(|n| {
            let Some(before) = history.board_at(n - 1) else {
                return false;
            };
            let Some(step) = history.move_at(n) else {
                return false;
            };
            step.mark == current_player(before) && !GameStatus::of(before).is_over()
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player to move (X, O, X, ...)"
    }
}
