//! Board snapshots with a cursor for time travel.

use crate::action::Move;
use crate::error::HistoryIndexError;
use crate::{Board, Position};
use serde::Serialize;
use tracing::{debug, instrument};

/// Ordered board snapshots, starting from the empty board, plus a cursor
/// naming the displayed one.
///
/// Recording a board while the cursor sits before the end discards the
/// snapshots after the cursor first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct History {
    snapshots: Vec<Board>,
    cursor: usize,
}

impl History {
    /// A history holding only the empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Rebuilds a history from raw parts.
    ///
    /// Returns `None` if `snapshots` is empty or `cursor` is out of bounds.
    pub(crate) fn from_parts(snapshots: Vec<Board>, cursor: usize) -> Option<Self> {
        (cursor < snapshots.len()).then_some(Self { snapshots, cursor })
    }

    /// Number of snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the displayed snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The displayed board.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.cursor]
    }

    /// Snapshot at move `n`.
    pub fn board_at(&self, n: usize) -> Option<&Board> {
        self.snapshots.get(n)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Drops everything after the cursor, appends `board` and points the
    /// cursor at it.
    #[instrument(skip(self, board), fields(cursor = self.cursor, len = self.snapshots.len()))]
    pub fn record(&mut self, board: Board) {
        let discarded = self.snapshots.len() - (self.cursor + 1);
        if discarded > 0 {
            debug!(discarded, "Pruning redo branch");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(board);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Moves the cursor to snapshot `n` without touching the snapshots.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryIndexError`] if `n` is negative or past the end.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump(&mut self, n: isize) -> Result<(), HistoryIndexError> {
        let len = self.snapshots.len();
        let target = usize::try_from(n)
            .ok()
            .filter(|target| *target < len)
            .ok_or(HistoryIndexError { index: n, len })?;
        self.cursor = target;
        Ok(())
    }

    /// The move that turned snapshot `n - 1` into snapshot `n`.
    ///
    /// `None` for `n == 0`, for `n` past the end, or when the two snapshots
    /// do not differ by exactly one newly placed mark.
    pub fn move_at(&self, n: usize) -> Option<Move> {
        let before = self.snapshots.get(n.checked_sub(1)?)?;
        let after = self.snapshots.get(n)?;
        let mut added = Position::ALL
            .into_iter()
            .filter(|pos| before.get(*pos) != after.get(*pos));
        let position = added.next()?;
        if added.next().is_some() || !before.is_empty(position) {
            return None;
        }
        after.get(position).mark().map(|mark| Move::new(mark, position))
    }

    /// Every recorded move, in order; entry `i` produced snapshot `i + 1`.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.snapshots.len())
            .filter_map(|n| self.move_at(n))
            .collect()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    fn play(history: &mut History, pos: Position, mark: Mark) {
        let next = history.current().with_mark(pos, mark);
        history.record(next);
    }

    #[test]
    fn test_new_history() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), &Board::new());
    }

    #[test]
    fn test_record_advances_cursor() {
        let mut history = History::new();
        play(&mut history, Position::Center, Mark::X);
        assert_eq!(history.len(), 2);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_record_after_jump_prunes_future() {
        let mut history = History::new();
        play(&mut history, Position::TopLeft, Mark::X);
        play(&mut history, Position::TopCenter, Mark::O);
        play(&mut history, Position::TopRight, Mark::X);
        history.jump(1).expect("in range");
        play(&mut history, Position::Center, Mark::O);

        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert!(history.current().is_empty(Position::TopCenter));
        assert!(!history.current().is_empty(Position::Center));
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut history = History::new();
        assert_eq!(history.jump(-1), Err(HistoryIndexError { index: -1, len: 1 }));
        assert_eq!(history.jump(1), Err(HistoryIndexError { index: 1, len: 1 }));
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_move_at_recovers_moves() {
        let mut history = History::new();
        play(&mut history, Position::Center, Mark::X);
        play(&mut history, Position::BottomRight, Mark::O);

        assert_eq!(history.move_at(0), None);
        assert_eq!(history.move_at(1), Some(Move::new(Mark::X, Position::Center)));
        assert_eq!(
            history.moves(),
            vec![
                Move::new(Mark::X, Position::Center),
                Move::new(Mark::O, Position::BottomRight),
            ]
        );
        assert_eq!(history.move_at(3), None);
    }

    #[test]
    fn test_from_parts_checks_cursor() {
        assert!(History::from_parts(vec![], 0).is_none());
        assert!(History::from_parts(vec![Board::new()], 1).is_none());
        assert!(History::from_parts(vec![Board::new()], 0).is_some());
    }
}
