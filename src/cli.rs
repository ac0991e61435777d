//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};

/// Strictly Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with a time-travelling move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Play a fixed sequence of cells and print the result
    Replay {
        /// Cells to play in order (0-8), comma or space separated
        #[arg(value_delimiter = ',', num_args = 1..)]
        cells: Vec<usize>,

        /// History position to jump to after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
