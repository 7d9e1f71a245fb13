//! Immutable game-state snapshots.

use crate::history::History;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::rules::{self, WinLine, WinnerResult};
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Where the displayed board sits in the game's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A mark completed a line.
    Won {
        /// Winning mark.
        mark: Mark,
        /// Completed line.
        line: WinLine,
    },
    /// Full board, no line.
    Draw,
}

impl GameStatus {
    /// Status of a board whose winner scan is already known.
    pub fn from_result(board: &Board, result: WinnerResult) -> Self {
        match result.win() {
            Some(win) => GameStatus::Won {
                mark: win.mark,
                line: win.line,
            },
            None if board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Status of `board`, scanning it directly.
    pub fn of(board: &Board) -> Self {
        Self::from_result(board, rules::evaluate(board))
    }

    /// True for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A complete snapshot: history, cursor and the status of the displayed board.
///
/// The status is derived when the snapshot is built and cannot be set
/// independently of the board it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "GameStateRecord", try_from = "GameStateRecord")]
pub struct GameState {
    history: History,
    status: GameStatus,
}

impl GameState {
    /// Fresh game: one empty board, cursor 0, in progress.
    pub fn initial() -> Self {
        Self {
            history: History::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Wraps a history whose current board has already been evaluated.
    pub(crate) fn from_evaluated(history: History, result: WinnerResult) -> Self {
        let status = GameStatus::from_result(history.current(), result);
        Self { history, status }
    }

    /// Wraps a history, scanning its current board.
    pub(crate) fn from_history(history: History) -> Self {
        let status = GameStatus::of(history.current());
        Self { history, status }
    }

    /// Full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed board.
    pub fn cursor(&self) -> usize {
        self.history.cursor()
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// Snapshot at move `n`.
    pub fn board_at(&self, n: usize) -> Option<&Board> {
        self.history.board_at(n)
    }

    /// Whose turn it is on the displayed board.
    pub fn current_player(&self) -> Mark {
        rules::current_player(self.board())
    }

    /// State-machine status of the displayed board.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winning mark on the displayed board.
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won { mark, .. } => Some(mark),
            _ => None,
        }
    }

    /// Winning line on the displayed board.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// True when the displayed board is a draw.
    pub fn is_draw(&self) -> bool {
        self.status == GameStatus::Draw
    }

    /// True when the displayed board accepts no more moves.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Serialized form of a [`GameState`].
///
/// The status is written for readers but ignored on the way back in; it is
/// recomputed and the result must satisfy every game invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStateRecord {
    /// Board snapshots, oldest first.
    pub history: Vec<Board>,
    /// Displayed snapshot.
    pub cursor: usize,
    /// Status of the displayed snapshot.
    #[serde(default)]
    pub status: Option<GameStatus>,
}

impl From<GameState> for GameStateRecord {
    fn from(state: GameState) -> Self {
        Self {
            cursor: state.cursor(),
            status: Some(state.status),
            history: state.history.snapshots().to_vec(),
        }
    }
}

/// Why a serialized game state was refused.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// History is empty or the cursor points past it.
    #[display("Cursor {cursor} is outside history of length {len}")]
    CursorOutOfBounds {
        /// Requested cursor.
        cursor: usize,
        /// Snapshot count.
        len: usize,
    },
    /// The snapshots do not describe a legal game.
    #[display("Invalid game state: {}", _0.join("; "))]
    Invalid(Vec<String>),
}

impl std::error::Error for StateError {}

impl StateError {
    pub(crate) fn from_violations(violations: Vec<InvariantViolation>) -> Self {
        StateError::Invalid(violations.into_iter().map(|v| v.description).collect())
    }
}

impl TryFrom<GameStateRecord> for GameState {
    type Error = StateError;

    fn try_from(record: GameStateRecord) -> Result<Self, Self::Error> {
        let len = record.history.len();
        let cursor = record.cursor;
        let history = History::from_parts(record.history, cursor)
            .ok_or(StateError::CursorOutOfBounds { cursor, len })?;
        let state = GameState::from_history(history);
        GameInvariants::check_all(&state).map_err(StateError::from_violations)?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Position};

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.cursor(), 0);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.winner(), None);
        assert!(!state.is_draw());
        assert_eq!(state.current_player(), Mark::X);
    }

    #[test]
    fn test_status_from_board() {
        let board = Board::from_cells([
            Cell::Marked(Mark::O),
            Cell::Marked(Mark::X),
            Cell::Empty,
            Cell::Marked(Mark::O),
            Cell::Marked(Mark::X),
            Cell::Empty,
            Cell::Marked(Mark::O),
            Cell::Marked(Mark::X),
            Cell::Marked(Mark::X),
        ]);
        assert_eq!(
            GameStatus::of(&board),
            GameStatus::Won {
                mark: Mark::O,
                line: WinLine::LeftColumn
            }
        );
        assert_eq!(GameStatus::of(&Board::new()), GameStatus::InProgress);
        assert!(!GameStatus::of(&Board::new().with_mark(Position::Center, Mark::X)).is_over());
    }

    #[test]
    fn test_record_rejects_bad_cursor() {
        let record = GameStateRecord {
            history: vec![Board::new()],
            cursor: 3,
            status: None,
        };
        assert_eq!(
            GameState::try_from(record),
            Err(StateError::CursorOutOfBounds { cursor: 3, len: 1 })
        );
    }

    #[test]
    fn test_record_rejects_skipped_turn() {
        let one = Board::new().with_mark(Position::Center, Mark::X);
        let two = one.with_mark(Position::TopLeft, Mark::X);
        let record = GameStateRecord {
            history: vec![Board::new(), one, two],
            cursor: 2,
            status: None,
        };
        assert!(matches!(
            GameState::try_from(record),
            Err(StateError::Invalid(_))
        ));
    }
}
