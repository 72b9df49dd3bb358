//! Error types for the game model and the search engines.

use crate::types::Position;

/// Violations of the game model's contracts.
///
/// The rules treat move legality as a caller obligation, but conditions
/// that would corrupt a state are surfaced as explicit errors rather
/// than silently producing a bad board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Board size outside the supported range.
    #[display("board size {n} is outside the supported range 1..=26")]
    InvalidSize {
        /// The offending size.
        n: usize,
    },
    /// Grid dimensions do not agree.
    #[display("grid dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected row or grid length.
        expected: usize,
        /// Actual row or grid length.
        found: usize,
    },
    /// Cell values must be positive.
    #[display("cell value at {position} must be positive")]
    NonPositiveValue {
        /// The offending cell.
        position: Position,
    },
    /// A position lies outside the board.
    #[display("position {position} is outside the {n}x{n} board")]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Board side length.
        n: usize,
    },
    /// A transition targeted a cell that is already owned.
    #[display("cell {position} is already owned")]
    CellOccupied {
        /// The offending cell.
        position: Position,
    },
}

/// Failures surfaced by a search strategy.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SearchError {
    /// Search was invoked on a board with no moves left.
    #[display("search invoked on a terminal position")]
    TerminalRoot,
    /// The game model rejected a transition during exploration.
    #[display("game rules violated during search: {_0}")]
    #[from]
    Game(GameError),
}
