//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`](crate::Board). Nothing here knows
//! about history; the controller composes these into transitions.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_draw;
pub use moves::{apply_move, current_player, is_valid_move};
pub use win::{Win, WinLine, WinnerResult, evaluate};
