//! Gang War command-line entry point.
//!
//! `solve` reads a position file, picks the best move with the requested
//! engine, and writes the move plus resulting board. `play` runs an
//! interactive terminal game against the alpha-beta agent. `random`
//! generates position files for testing.

mod cli;
mod loader;
mod random;
mod report;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { input, output } => {
            init_tracing();
            run_solve(&input, &output)
        }
        Command::Play { depth, seed } => tui::run_play(depth, seed),
        Command::Random {
            output,
            blank,
            mode,
            depth,
            seed,
        } => {
            init_tracing();
            run_random(&output, blank, &mode, depth, seed)
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn run_solve(input: &Path, output: &Path) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("reading position file {}", input.display()))?;
    let problem = loader::parse(&text)?;

    let strategy = problem
        .mode
        .strategy(problem.player, problem.depth)
        .context("COMPETITION mode is not supported")?;

    let action = strategy.choose(&problem.state)?;
    let result = problem.state.transition(&action)?;
    info!(
        action = %action,
        x_score = result.scores().get(gang_war::Player::X),
        o_score = result.scores().get(gang_war::Player::O),
        "chose move"
    );

    fs::write(output, report::render(&action, &result))
        .with_context(|| format!("writing result to {}", output.display()))?;
    Ok(())
}

fn run_random(output: &Path, blank: bool, mode: &str, depth: u32, seed: Option<u64>) -> Result<()> {
    // Validate the mode token before embedding it in the file.
    gang_war::Mode::from_str(mode).map_err(|_| anyhow::anyhow!("unknown mode '{mode}'"))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let board = random::generate(&mut rng, blank);
    let player = gang_war::Player::X;
    let text = random::render_position(&board, mode, player, depth);
    fs::write(output, text)
        .with_context(|| format!("writing position to {}", output.display()))?;
    info!(n = board.n, blank, "generated random board");
    Ok(())
}
