//! Board and status rendering.

use super::App;
use gang_war::{Cell, GameState, Player, Position};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_scores(f, chunks[0], &app.state);
    render_board(f, chunks[1], &app.state);

    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your move (Enter submits, Esc quits)"),
    );
    f.render_widget(input, chunks[2]);

    let status = Paragraph::new(app.status.as_str()).style(Style::default().fg(Color::Yellow));
    f.render_widget(status, chunks[3]);
}

fn render_scores(f: &mut Frame, area: ratatui::layout::Rect, state: &GameState) {
    let scores = state.scores();
    let line = Line::from(vec![
        Span::styled(
            format!(" X: {} ", scores.get(Player::X)),
            player_style(Player::X),
        ),
        Span::raw("  "),
        Span::styled(
            format!(" O: {} ", scores.get(Player::O)),
            player_style(Player::O),
        ),
        Span::raw(if state.terminal() {
            format!("   Game over - {}", outcome(state))
        } else {
            format!("   {}'s turn", state.turn())
        }),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Gang War"),
    );
    f.render_widget(widget, area);
}

fn render_board(f: &mut Frame, area: ratatui::layout::Rect, state: &GameState) {
    let n = state.size();
    let mut lines = Vec::with_capacity(n + 1);

    let mut header = vec![Span::raw("     ")];
    for col in 0..n {
        let letter = (b'A' + col as u8) as char;
        header.push(Span::styled(
            format!("{letter:>4}"),
            Style::default().add_modifier(Modifier::UNDERLINED),
        ));
    }
    lines.push(Line::from(header));

    for row in 0..n {
        let mut spans = vec![Span::raw(format!("{:>4} ", row + 1))];
        for col in 0..n {
            let pos = Position::new(row, col);
            let value = state.values().value(pos);
            let style = match state.ownership().get(pos) {
                Cell::Unowned => Style::default().fg(Color::DarkGray),
                Cell::Owned(player) => player_style(player),
            };
            spans.push(Span::styled(format!("{value:>4}"), style));
        }
        lines.push(Line::from(spans));
    }

    let widget = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("Board"));
    f.render_widget(widget, area);
}

fn player_style(player: Player) -> Style {
    let bg = match player {
        Player::X => Color::Green,
        Player::O => Color::Red,
    };
    Style::default()
        .fg(Color::White)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn outcome(state: &GameState) -> String {
    let scores = state.scores();
    let x = scores.get(Player::X);
    let o = scores.get(Player::O);
    if x > o {
        format!("X wins {x} to {o}")
    } else if o > x {
        format!("O wins {o} to {x}")
    } else {
        format!("draw at {x}")
    }
}
