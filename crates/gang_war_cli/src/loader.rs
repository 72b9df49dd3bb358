//! Position loader for the text input format.
//!
//! ```text
//! <N>
//! <MODE>          MINIMAX | ALPHABETA | COMPETITION
//! <YOUPLAY>       X | O
//! <DEPTH>         max search depth (a time budget in COMPETITION mode)
//! <N lines of N space-separated positive integers>   cell values
//! <N lines of N characters from {X,O,.}>             ownership
//! ```

use gang_war::{Cell, GameError, GameState, Mode, OwnershipGrid, Player, ValueGrid};
use std::str::FromStr;
use std::sync::Arc;

/// Errors produced while parsing a position file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    /// The file ended before the expected line.
    #[display("line {line} is missing")]
    MissingLine {
        /// 1-based line number.
        line: usize,
    },
    /// A numeric field failed to parse.
    #[display("line {line}: '{token}' is not a valid number")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The mode line is not one of the known modes.
    #[display("unknown mode '{token}'")]
    InvalidMode {
        /// The offending token.
        token: String,
    },
    /// The player line is not `X` or `O`.
    #[display("unknown player '{token}'")]
    InvalidPlayer {
        /// The offending token.
        token: String,
    },
    /// A board row contains a character outside `{X, O, .}`.
    #[display("line {line}: board rows may only contain X, O, and .")]
    InvalidCell {
        /// 1-based line number.
        line: usize,
    },
    /// The parsed grids violate the game model's constraints.
    #[display("invalid position: {_0}")]
    Game(GameError),
}

impl From<GameError> for LoadError {
    fn from(err: GameError) -> Self {
        LoadError::Game(err)
    }
}

/// A fully parsed position file.
#[derive(Debug)]
pub struct Problem {
    /// Which engine the file asks for.
    pub mode: Mode,
    /// The player the agent plays as.
    pub player: Player,
    /// Maximum search depth (zero in competition mode).
    pub depth: u32,
    /// Remaining time budget, only present in competition mode.
    pub time_budget: Option<f64>,
    /// The initial game state, with derived scores and remaining count.
    pub state: GameState,
}

fn get<'a>(lines: &[&'a str], index: usize) -> Result<&'a str, LoadError> {
    lines
        .get(index)
        .map(|s| s.trim())
        .ok_or(LoadError::MissingLine { line: index + 1 })
}

/// Parses a position file.
pub fn parse(text: &str) -> Result<Problem, LoadError> {
    let lines: Vec<&str> = text.lines().collect();

    let n_token = get(&lines, 0)?;
    let n: usize = n_token.parse().map_err(|_| LoadError::InvalidNumber {
        line: 1,
        token: n_token.to_string(),
    })?;

    let mode_token = get(&lines, 1)?;
    let mode = Mode::from_str(mode_token).map_err(|_| LoadError::InvalidMode {
        token: mode_token.to_string(),
    })?;

    let player_token = get(&lines, 2)?;
    let player = match player_token {
        "X" => Player::X,
        "O" => Player::O,
        other => {
            return Err(LoadError::InvalidPlayer {
                token: other.to_string(),
            });
        }
    };

    let limit_token = get(&lines, 3)?;
    let (depth, time_budget) = if mode == Mode::Competition {
        let budget: f64 = limit_token.parse().map_err(|_| LoadError::InvalidNumber {
            line: 4,
            token: limit_token.to_string(),
        })?;
        (0, Some(budget))
    } else {
        let depth: u32 = limit_token.parse().map_err(|_| LoadError::InvalidNumber {
            line: 4,
            token: limit_token.to_string(),
        })?;
        (depth, None)
    };

    let mut value_rows = Vec::with_capacity(n);
    for row in 0..n {
        let index = 4 + row;
        let text = get(&lines, index)?;
        let mut values = Vec::with_capacity(n);
        for token in text.split_whitespace() {
            let value: u32 = token.parse().map_err(|_| LoadError::InvalidNumber {
                line: index + 1,
                token: token.to_string(),
            })?;
            values.push(value);
        }
        value_rows.push(values);
    }

    let mut cell_rows = Vec::with_capacity(n);
    for row in 0..n {
        let index = 4 + n + row;
        let text = get(&lines, index)?;
        let mut cells = Vec::with_capacity(n);
        for c in text.chars() {
            cells.push(Cell::from_char(c).ok_or(LoadError::InvalidCell { line: index + 1 })?);
        }
        cell_rows.push(cells);
    }

    let values = Arc::new(ValueGrid::from_rows(value_rows)?);
    let ownership = OwnershipGrid::from_rows(cell_rows)?;
    let state = GameState::new(values, ownership, player)?;

    Ok(Problem {
        mode,
        player,
        depth,
        time_budget,
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gang_war::Position;

    const SAMPLE: &str = "2\nALPHABETA\nO\n3\n2 3\n5 7\nX.\n..\n";

    #[test]
    fn parses_a_well_formed_position() {
        let problem = parse(SAMPLE).unwrap();
        assert_eq!(problem.mode, Mode::AlphaBeta);
        assert_eq!(problem.player, Player::O);
        assert_eq!(problem.depth, 3);
        assert_eq!(problem.time_budget, None);
        assert_eq!(problem.state.size(), 2);
        assert_eq!(problem.state.turn(), Player::O);
        assert_eq!(problem.state.remaining_spaces(), 3);
        assert_eq!(problem.state.scores().get(Player::X), 2);
        assert_eq!(problem.state.values().value(Position::new(1, 1)), 7);
    }

    #[test]
    fn competition_limit_is_a_time_budget() {
        let text = "2\nCOMPETITION\nX\n98.5\n1 1\n1 1\n..\n..\n";
        let problem = parse(text).unwrap();
        assert_eq!(problem.mode, Mode::Competition);
        assert_eq!(problem.time_budget, Some(98.5));
    }

    #[test]
    fn rejects_unknown_mode() {
        let text = SAMPLE.replace("ALPHABETA", "GREEDY");
        assert!(matches!(
            parse(&text),
            Err(LoadError::InvalidMode { .. })
        ));
    }

    #[test]
    fn rejects_unknown_player() {
        let text = SAMPLE.replace("\nO\n", "\nZ\n");
        assert!(matches!(parse(&text), Err(LoadError::InvalidPlayer { .. })));
    }

    #[test]
    fn rejects_truncated_board() {
        let text = "2\nMINIMAX\nX\n1\n1 1\n1 1\nX.\n";
        assert!(matches!(parse(&text), Err(LoadError::MissingLine { line: 8 })));
    }

    #[test]
    fn rejects_ragged_value_rows() {
        let text = "2\nMINIMAX\nX\n1\n1 1 1\n1 1\n..\n..\n";
        assert!(matches!(parse(&text), Err(LoadError::Game(_))));
    }

    #[test]
    fn rejects_bad_board_characters() {
        let text = SAMPLE.replace("X.", "X?");
        assert!(matches!(parse(&text), Err(LoadError::InvalidCell { line: 7 })));
    }
}
