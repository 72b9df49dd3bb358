//! Plain depth-limited minimax.

use super::{SearchStrategy, cutoff, evaluate};
use crate::error::SearchError;
use crate::state::GameState;
use crate::types::{Action, Player};
use tracing::{debug, instrument};

/// Depth-limited minimax over the full action set at every node.
#[derive(Debug, Clone, Copy)]
pub struct Minimax {
    player: Player,
    max_depth: u32,
}

impl Minimax {
    /// Creates a minimax strategy for the given player and depth limit.
    pub fn new(player: Player, max_depth: u32) -> Self {
        Self { player, max_depth }
    }

    fn max_value(&self, state: &GameState, depth: u32) -> Result<i64, SearchError> {
        if cutoff(state, depth, self.max_depth) {
            return Ok(evaluate(state, self.player));
        }
        let mut v = i64::MIN;
        for action in state.actions() {
            v = v.max(self.min_value(&state.transition(&action)?, depth + 1)?);
        }
        Ok(v)
    }

    fn min_value(&self, state: &GameState, depth: u32) -> Result<i64, SearchError> {
        if cutoff(state, depth, self.max_depth) {
            return Ok(evaluate(state, self.player));
        }
        let mut v = i64::MAX;
        for action in state.actions() {
            v = v.min(self.max_value(&state.transition(&action)?, depth + 1)?);
        }
        Ok(v)
    }
}

impl SearchStrategy for Minimax {
    /// Picks the root action whose backed-up value is strictly greatest.
    ///
    /// Strict comparison means the first action to reach the maximum
    /// wins ties; since [`GameState::actions`] yields every Stake before
    /// any Raid, ties break in favor of Stake.
    #[instrument(skip(self, state), fields(player = %self.player, max_depth = self.max_depth))]
    fn choose(&self, state: &GameState) -> Result<Action, SearchError> {
        let mut best: Option<(i64, Action)> = None;
        for action in state.actions() {
            let v = self.min_value(&state.transition(&action)?, 1)?;
            debug!(action = %action, value = v, "evaluated root action");
            if best.as_ref().is_none_or(|(best_value, _)| v > *best_value) {
                best = Some((v, action));
            }
        }
        best.map(|(_, action)| action)
            .ok_or(SearchError::TerminalRoot)
    }

    fn player(&self) -> Player {
        self.player
    }
}
