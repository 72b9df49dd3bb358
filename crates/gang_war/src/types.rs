//! Core domain types for Gang War.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Parses a player from its board character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Player::X),
            'O' => Some(Player::O),
            _ => None,
        }
    }

    /// Returns the board character for this player.
    pub fn as_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A cell coordinate on the board, 0-indexed row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0-based from the top.
    pub row: usize,
    /// Column index, 0-based from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parses the reporting form, e.g. `B2` is column B (index 1), row 2
    /// (index 1). Case-insensitive on the column letter.
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let col = (letter as u8 - b'A') as usize;
        let row: usize = chars.as_str().parse().ok()?;
        if row == 0 {
            return None;
        }
        Some(Self { row: row - 1, col })
    }
}

impl std::fmt::Display for Position {
    /// Renders as `<ColumnLetter><RowNumber>`, 1-indexed row.
    /// Only meaningful for columns below 26.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

/// The two kinds of move a player can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Claim an unowned cell anywhere on the board.
    Stake,
    /// Claim an unowned cell adjacent to the mover's territory,
    /// capturing adjacent opponent cells.
    Raid,
}

impl ActionKind {
    /// Parses the single-letter code used in move input (`S` or `R`).
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'S' => Some(ActionKind::Stake),
            'R' => Some(ActionKind::Raid),
            _ => None,
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Stake => write!(f, "Stake"),
            ActionKind::Raid => write!(f, "Raid"),
        }
    }
}

/// A candidate move: a target cell, a kind, and the player making it.
///
/// Equality is structural over all three fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    position: Position,
    kind: ActionKind,
    player: Player,
}

impl Action {
    /// Creates a new action.
    pub fn new(position: Position, kind: ActionKind, player: Player) -> Self {
        Self {
            position,
            kind,
            player,
        }
    }

    /// Returns the target cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the action kind.
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Returns the player making the move.
    pub fn player(&self) -> Player {
        self.player
    }
}

impl std::fmt::Display for Action {
    /// Renders in the reporting form, e.g. `F2 Stake`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.position, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involutive() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }

    #[test]
    fn position_display_is_column_letter_then_one_indexed_row() {
        assert_eq!(Position::new(1, 5).to_string(), "F2");
        assert_eq!(Position::new(0, 0).to_string(), "A1");
    }

    #[test]
    fn position_parse_round_trips() {
        let pos = Position::parse("B2").unwrap();
        assert_eq!(pos, Position::new(1, 1));
        assert_eq!(pos.to_string(), "B2");
        assert_eq!(Position::parse("a10"), Some(Position::new(9, 0)));
        assert_eq!(Position::parse("A0"), None);
        assert_eq!(Position::parse("1A"), None);
        assert_eq!(Position::parse(""), None);
    }

    #[test]
    fn action_display_matches_reporting_format() {
        let action = Action::new(Position::new(1, 5), ActionKind::Stake, Player::X);
        assert_eq!(action.to_string(), "F2 Stake");
        let action = Action::new(Position::new(0, 1), ActionKind::Raid, Player::O);
        assert_eq!(action.to_string(), "B1 Raid");
    }
}
