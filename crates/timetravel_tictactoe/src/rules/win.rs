//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines that wins the game.
///
/// Variant order is the canonical scan order: when a board holds two
/// complete lines, the earlier variant is reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum WinLine {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    MiddleColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinLine {
    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinLine::TopRow => [TopLeft, TopCenter, TopRight],
            WinLine::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinLine::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinLine::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinLine::MiddleColumn => [TopCenter, Center, BottomCenter],
            WinLine::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinLine::MainDiagonal => [TopLeft, Center, BottomRight],
            WinLine::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices on this line.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::index)
    }

    /// Returns the mark filling all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.positions();
        match board.get(a) {
            Cell::Marked(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(mark)
            }
            _ => None,
        }
    }
}

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// Winning mark.
    pub mark: Mark,
    /// Winning line.
    pub line: WinLine,
}

/// Outcome of scanning a board for a winner.
///
/// Winner and line are present together or absent together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct WinnerResult {
    win: Option<Win>,
}

impl WinnerResult {
    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.win.map(|win| win.mark)
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<WinLine> {
        self.win.map(|win| win.line)
    }

    /// Mark and line together.
    pub fn win(&self) -> Option<Win> {
        self.win
    }
}

/// Scans the eight lines in canonical order and reports the first complete one.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> WinnerResult {
    let win = WinLine::iter().find_map(|line| line.owner(board).map(|mark| Win { mark, line }));
    WinnerResult { win }
}
