//! Strictly Timeline - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_timeline::{AppConfig, Console, GameHistory, GameView, render};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(config = ?cli.config, "Starting strictly_timeline");

    match cli.command {
        Command::Play => run_play(&config),
        Command::Replay { cells, jump, json } => run_replay(&config, &cells, jump, json),
    }
}

/// Run the interactive console on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &AppConfig) -> Result<()> {
    let mut console = Console::new(config);
    let stdin = std::io::stdin();
    console
        .run(stdin.lock(), std::io::stdout())
        .context("Console I/O failed")
}

/// Replay `cells` from the empty board and print the resulting view
#[instrument(skip(config))]
fn run_replay(config: &AppConfig, cells: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    let mut history = GameHistory::new();
    for (step, cell) in cells.iter().enumerate() {
        history = history
            .apply_move_at_index(history.current_position(), *cell)
            .with_context(|| format!("Move {} (cell {}) rejected", step + 1, cell))?;
    }

    if let Some(target) = jump {
        history = history
            .jump_to(target)
            .with_context(|| format!("Cannot jump to position {}", target))?;
    }

    let view = GameView::new(&history, *config.history_order());
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render(&view, *config.show_coordinates()));
    }

    Ok(())
}
