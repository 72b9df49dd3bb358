//! Interactive terminal play: human (X) against the alpha-beta agent (O).

mod ui;

use crate::random;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gang_war::{
    Action, ActionKind, AlphaBeta, GameState, OwnershipGrid, Player, Position, SearchStrategy,
    ValueGrid,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tracing::{info, instrument};

pub(crate) struct App {
    pub(crate) state: GameState,
    pub(crate) input: String,
    pub(crate) status: String,
}

/// Runs the interactive game loop on a fresh random blank board.
pub fn run_play(depth: u32, seed: Option<u64>) -> Result<()> {
    // Log to a file; the terminal belongs to the UI.
    let log_file = std::fs::File::create("gang_war_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(depth, ?seed, "starting Gang War TUI");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let board = random::generate(&mut rng, true);
    let values = Arc::new(ValueGrid::from_rows(board.values)?);
    let ownership = OwnershipGrid::from_rows(board.cells)?;
    let state = GameState::new(values, ownership, Player::X)?;
    let agent = AlphaBeta::new(Player::O, depth);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, state, &agent);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

#[instrument(skip_all)]
fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: GameState,
    agent: &AlphaBeta,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut app = App {
        state,
        input: String::new(),
        status: "Your move: position and kind, e.g. B2 S (stake) or B2 R (raid)".to_string(),
    };

    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if app.state.terminal() {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press
                    && matches!(key.code, KeyCode::Esc | KeyCode::Char('q'))
                {
                    return Ok(());
                }
            }
            continue;
        }

        if app.state.turn() == agent.player() {
            app.status = "O is thinking...".to_string();
            terminal.draw(|f| ui::render(f, &app))?;
            let action = agent.choose(&app.state)?;
            info!(action = %action, "agent move");
            app.state = app.state.transition(&action)?;
            app.status = format!("O played {action}");
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Backspace => {
                    app.input.pop();
                }
                KeyCode::Enter => submit(&mut app),
                KeyCode::Char(c) => app.input.push(c),
                _ => {}
            }
        }
    }
}

fn submit(app: &mut App) {
    let text = app.input.trim().to_uppercase();
    app.input.clear();
    let Some(action) = parse_move(&text, app.state.turn()) else {
        app.status = format!("Could not read '{text}'; use e.g. B2 S or B2 R");
        return;
    };
    if !app.state.actions().contains(&action) {
        app.status = format!("{action} is not legal here");
        return;
    }
    match app.state.transition(&action) {
        Ok(next) => {
            info!(action = %action, "human move");
            app.state = next;
            app.status = format!("You played {action}");
        }
        Err(err) => app.status = err.to_string(),
    }
}

fn parse_move(text: &str, player: Player) -> Option<Action> {
    let mut parts = text.split_whitespace();
    let position = Position::parse(parts.next()?)?;
    let kind_token = parts.next()?;
    if parts.next().is_some() || kind_token.len() != 1 {
        return None;
    }
    let kind = ActionKind::from_code(kind_token.chars().next()?)?;
    Some(Action::new(position, kind, player))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stake_and_raid_moves() {
        let stake = parse_move("B2 S", Player::X).unwrap();
        assert_eq!(stake.position(), Position::new(1, 1));
        assert_eq!(stake.kind(), ActionKind::Stake);

        let raid = parse_move("A1 R", Player::O).unwrap();
        assert_eq!(raid.position(), Position::new(0, 0));
        assert_eq!(raid.kind(), ActionKind::Raid);
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!(parse_move("", Player::X).is_none());
        assert!(parse_move("B2", Player::X).is_none());
        assert!(parse_move("B2 Q", Player::X).is_none());
        assert!(parse_move("B2 SS", Player::X).is_none());
        assert!(parse_move("B2 S extra", Player::X).is_none());
    }
}
