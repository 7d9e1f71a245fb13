//! First-class move events.
//!
//! History stores boards, not moves; a [`Move`] is recovered by comparing
//! two consecutive snapshots so a presentation layer can label each step.

use crate::{Mark, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Who moved.
    pub mark: Mark,
    /// Where.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
