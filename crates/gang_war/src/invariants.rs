//! First-class bookkeeping invariants.
//!
//! Invariants are logical properties that must hold at every reachable
//! state. They are testable independently and checked by debug
//! assertions after every transition.

use crate::grid::Cell;
use crate::state::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The cached remaining-space count matches the grid.
///
/// `remaining_spaces` is maintained incrementally (minus one per
/// transition); recomputing it from the ownership grid must agree.
pub struct RemainingSpacesConsistent;

impl Invariant<GameState> for RemainingSpacesConsistent {
    fn holds(state: &GameState) -> bool {
        state.remaining_spaces() == state.ownership().count_unowned()
    }

    fn description() -> &'static str {
        "remaining_spaces equals the count of unowned cells"
    }
}

/// The combined score matches the board.
///
/// Raids transfer value between the players but never create or destroy
/// it, so the two scores must always sum to the total value of all
/// owned cells.
pub struct ScoresConsistent;

impl Invariant<GameState> for ScoresConsistent {
    fn holds(state: &GameState) -> bool {
        let owned_total: i64 = state
            .ownership()
            .iter()
            .filter(|(_, cell)| matches!(cell, Cell::Owned(_)))
            .map(|(pos, _)| i64::from(state.values().value(pos)))
            .sum();
        state.scores().total() == owned_total
    }

    fn description() -> &'static str {
        "scores sum to the total value of owned cells"
    }
}

/// Checks every game-state invariant at once.
pub fn check(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    <(RemainingSpacesConsistent, ScoresConsistent)>::check_all(state)
}
