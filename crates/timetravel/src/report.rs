//! Rendering the final game state.

use timetravel_tictactoe::{GameState, GameStatus};

/// Board grid followed by a short status summary.
pub fn render_text(state: &GameState) -> String {
    let status = match state.status() {
        GameStatus::InProgress => format!("Next player: {}", state.current_player()),
        GameStatus::Won { mark, line } => {
            let [a, b, c] = line.indices();
            format!("Winner: {} ({}, {}, {})", mark, a, b, c)
        }
        GameStatus::Draw => "Draw".to_string(),
    };
    format!(
        "{}\n\n{}\nMove {} of {}",
        state.board().display(),
        status,
        state.cursor(),
        state.history().len() - 1
    )
}

/// Pretty-printed JSON of the full state.
pub fn render_json(state: &GameState) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(state)
}
