//! The game controller: click, jump and reset over immutable snapshots.

use crate::config::GameConfig;
use crate::error::{HistoryIndexError, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::memo::{CacheStats, MemoCache};
use crate::rules::{self, WinLine, WinnerResult};
use crate::state::{GameState, GameStatus, StateError};
use crate::{Board, Mark};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Owns the current [`GameState`] and drives it through the game's state
/// machine.
///
/// Each accepted call swaps in a freshly built snapshot. Rejected calls leave
/// the snapshot in place, so `Arc::ptr_eq` on two returned states tells a
/// caller whether anything changed.
#[derive(Debug, Clone)]
pub struct GameController {
    state: Arc<GameState>,
    evaluations: MemoCache<Board, WinnerResult>,
}

impl GameController {
    /// Controller at the start of a game, with default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// Controller at the start of a game.
    #[instrument]
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            state: Arc::new(GameState::initial()),
            evaluations: MemoCache::new(*config.evaluation_cache_capacity()),
        }
    }

    /// Controller resuming from an existing snapshot.
    ///
    /// # Errors
    ///
    /// [`StateError::Invalid`] when the snapshot breaks a game invariant.
    #[instrument(skip(state), fields(cursor = state.cursor(), len = state.history().len()))]
    pub fn from_state(state: GameState, config: &GameConfig) -> Result<Self, StateError> {
        GameInvariants::check_all(&state).map_err(StateError::from_violations)?;
        Ok(Self {
            state: Arc::new(state),
            evaluations: MemoCache::new(*config.evaluation_cache_capacity()),
        })
    }

    /// The start-of-game snapshot.
    pub fn initial_state() -> GameState {
        GameState::initial()
    }

    /// Current snapshot.
    pub fn state(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    /// Plays the current player's mark at `index`.
    ///
    /// Rejected moves (game over, out of range, occupied) are logged and
    /// leave the state unchanged.
    #[instrument(skip(self))]
    pub fn click(&mut self, index: isize) -> Arc<GameState> {
        if let Err(error) = self.try_click(index) {
            warn!(index, %error, "Move rejected");
        }
        self.state()
    }

    /// Like [`click`](Self::click), but reports why a move was rejected.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] when the displayed board is finished, otherwise
    /// whatever [`rules::apply_move`] reports.
    #[instrument(skip(self))]
    pub fn try_click(&mut self, index: isize) -> Result<Arc<GameState>, MoveError> {
        let state = self.state();
        if state.is_over() {
            return Err(MoveError::GameOver);
        }
        let mark = state.current_player();
        let next = rules::apply_move(state.board(), index, mark)?;

        let mut history = state.history().clone();
        history.record(next);
        let result = self.evaluate(&next);
        self.commit(GameState::from_evaluated(history, result));
        debug!(index, %mark, status = ?self.state.status(), "Move accepted");
        Ok(self.state())
    }

    /// Shows snapshot `n`, recomputing winner and draw from it.
    ///
    /// Out-of-range requests are logged and leave the state unchanged.
    #[instrument(skip(self))]
    pub fn jump_to_move(&mut self, n: isize) -> Arc<GameState> {
        if let Err(error) = self.try_jump_to_move(n) {
            warn!(n, %error, "History jump rejected");
        }
        self.state()
    }

    /// Like [`jump_to_move`](Self::jump_to_move), but reports rejections.
    ///
    /// # Errors
    ///
    /// [`HistoryIndexError`] when `n` is negative or past the end of history.
    #[instrument(skip(self))]
    pub fn try_jump_to_move(&mut self, n: isize) -> Result<Arc<GameState>, HistoryIndexError> {
        let mut history = self.state.history().clone();
        history.jump(n)?;
        let board = *history.current();
        let result = self.evaluate(&board);
        self.commit(GameState::from_evaluated(history, result));
        debug!(cursor = n, status = ?self.state.status(), "Jumped in history");
        Ok(self.state())
    }

    /// Starts over. Always succeeds.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Arc<GameState> {
        self.commit(GameState::initial());
        debug!("Game reset");
        self.state()
    }

    /// Snapshot `n` of the current history.
    pub fn board_at(&self, n: usize) -> Option<Board> {
        self.state.board_at(n).copied()
    }

    /// The displayed board.
    pub fn board(&self) -> Board {
        *self.state.board()
    }

    /// Whose turn it is on the displayed board.
    pub fn current_player(&self) -> Mark {
        self.state.current_player()
    }

    /// Winner of the displayed board.
    pub fn winner(&self) -> Option<Mark> {
        self.state.winner()
    }

    /// Winning line of the displayed board.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.state.winning_line()
    }

    /// True when the displayed board is a draw.
    pub fn is_draw(&self) -> bool {
        self.state.is_draw()
    }

    /// State-machine status of the displayed board.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Evaluation cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.evaluations.stats()
    }

    fn evaluate(&mut self, board: &Board) -> WinnerResult {
        self.evaluations.get_or_insert_with(board, rules::evaluate)
    }

    fn commit(&mut self, next: GameState) {
        debug_assert!(
            GameInvariants::check_all(&next).is_ok(),
            "Game invariants violated: {:?}",
            GameInvariants::check_all(&next)
        );
        self.state = Arc::new(next);
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
