//! Command-line interface for Gang War.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gang War - adversarial search agents for a territory game
#[derive(Parser, Debug)]
#[command(name = "gang-war")]
#[command(about = "Minimax and alpha-beta agents for the Gang War board game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read a position file, choose the best move, write the result
    Solve {
        /// Position file to read
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,

        /// File to write the chosen move and resulting board to
        #[arg(short, long, default_value = "output.txt")]
        output: PathBuf,
    },

    /// Play interactively against the alpha-beta agent in a terminal UI
    Play {
        /// Search depth for the agent
        #[arg(long, default_value = "4")]
        depth: u32,

        /// Seed for the generated board (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate a random position file for testing
    Random {
        /// File to write the position to
        #[arg(short, long, default_value = "input.txt")]
        output: PathBuf,

        /// Leave the whole board unowned
        #[arg(long)]
        blank: bool,

        /// Search mode to embed in the file
        #[arg(long, default_value = "ALPHABETA")]
        mode: String,

        /// Search depth to embed in the file
        #[arg(long, default_value = "3")]
        depth: u32,

        /// Seed for reproducible boards (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}
