//! Timetravel - scripted tic-tac-toe runner.

use anyhow::Result;
use clap::Parser;
use timetravel::{Cli, Command, OutputFormat, render_json, render_text, run_script};
use timetravel_tictactoe::{GameConfig, GameController};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            steps,
            format,
            config,
        } => {
            let config = match config {
                Some(path) => GameConfig::from_file(path)?,
                None => GameConfig::default(),
            };
            let mut controller = GameController::with_config(&config);
            let state = run_script(&mut controller, &steps);
            info!(cursor = state.cursor(), status = ?state.status(), "Script finished");

            let output = match format {
                OutputFormat::Text => render_text(&state),
                OutputFormat::Json => render_json(&state)?,
            };
            println!("{}", output);
            Ok(())
        }
    }
}
