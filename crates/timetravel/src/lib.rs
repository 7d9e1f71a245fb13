//! Command-line driver for the time-travel tic-tac-toe engine.
//!
//! Runs a script of clicks, history jumps and resets through a
//! [`GameController`](timetravel_tictactoe::GameController) and reports the
//! final state.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod report;
mod script;

pub use cli::{Cli, Command, OutputFormat};
pub use report::{render_json, render_text};
pub use script::{Step, StepParseError, run_script};
