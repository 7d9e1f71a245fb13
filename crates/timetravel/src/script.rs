//! Step scripts: parsing and execution.

use std::str::FromStr;
use std::sync::Arc;
use timetravel_tictactoe::{GameController, GameState};
use tracing::{debug, instrument};

/// One scripted interaction with the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Step {
    /// Click a cell.
    #[display("click:{_0}")]
    Click(isize),
    /// Jump to a history entry.
    #[display("jump:{_0}")]
    Jump(isize),
    /// Start over.
    #[display("reset")]
    Reset,
}

/// A step that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid step '{input}': {reason}")]
pub struct StepParseError {
    /// The offending text.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl std::error::Error for StepParseError {}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let error = |reason| StepParseError {
            input: input.to_string(),
            reason,
        };
        let number = |text: &str| {
            text.trim()
                .parse::<isize>()
                .map_err(|_| error("expected an integer"))
        };

        if input.eq_ignore_ascii_case("reset") {
            return Ok(Step::Reset);
        }
        match input.split_once(':') {
            Some((verb, arg)) if verb.eq_ignore_ascii_case("click") => number(arg).map(Step::Click),
            Some((verb, arg)) if verb.eq_ignore_ascii_case("jump") => number(arg).map(Step::Jump),
            Some(_) => Err(error("expected click, jump or reset")),
            None => number(input).map(Step::Click),
        }
    }
}

/// Runs every step in order and returns the final state.
///
/// Rejected steps are no-ops; the controller logs them.
#[instrument(skip(controller, steps), fields(steps = steps.len()))]
pub fn run_script(controller: &mut GameController, steps: &[Step]) -> Arc<GameState> {
    for step in steps {
        let state = match *step {
            Step::Click(index) => controller.click(index),
            Step::Jump(n) => controller.jump_to_move(n),
            Step::Reset => controller.reset(),
        };
        debug!(%step, cursor = state.cursor(), "Step applied");
    }
    controller.state()
}
