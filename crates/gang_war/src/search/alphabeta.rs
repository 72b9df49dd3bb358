//! Minimax with alpha-beta pruning.

use super::{SearchStrategy, cutoff, evaluate};
use crate::error::SearchError;
use crate::state::GameState;
use crate::types::{Action, Player};
use tracing::{debug, instrument};

/// Depth-limited minimax carrying an (alpha, beta) pruning window.
///
/// Chooses the same action as [`super::Minimax`] for any position and
/// depth; pruning only skips subtrees that cannot change the result.
#[derive(Debug, Clone, Copy)]
pub struct AlphaBeta {
    player: Player,
    max_depth: u32,
}

impl AlphaBeta {
    /// Creates an alpha-beta strategy for the given player and depth limit.
    pub fn new(player: Player, max_depth: u32) -> Self {
        Self { player, max_depth }
    }

    fn max_value(
        &self,
        state: &GameState,
        mut alpha: i64,
        beta: i64,
        depth: u32,
    ) -> Result<i64, SearchError> {
        if cutoff(state, depth, self.max_depth) {
            return Ok(evaluate(state, self.player));
        }
        let mut v = i64::MIN;
        for action in state.actions() {
            v = v.max(self.min_value(&state.transition(&action)?, alpha, beta, depth + 1)?);
            if v >= beta {
                return Ok(v);
            }
            alpha = alpha.max(v);
        }
        Ok(v)
    }

    fn min_value(
        &self,
        state: &GameState,
        alpha: i64,
        mut beta: i64,
        depth: u32,
    ) -> Result<i64, SearchError> {
        if cutoff(state, depth, self.max_depth) {
            return Ok(evaluate(state, self.player));
        }
        let mut v = i64::MAX;
        for action in state.actions() {
            v = v.min(self.max_value(&state.transition(&action)?, alpha, beta, depth + 1)?);
            if v <= alpha {
                return Ok(v);
            }
            beta = beta.min(v);
        }
        Ok(v)
    }
}

impl SearchStrategy for AlphaBeta {
    /// Same strict-`>` tie-break as plain minimax. Each top-level
    /// subtree is explored with a fresh full window; the root itself
    /// never prunes.
    #[instrument(skip(self, state), fields(player = %self.player, max_depth = self.max_depth))]
    fn choose(&self, state: &GameState) -> Result<Action, SearchError> {
        let mut best: Option<(i64, Action)> = None;
        for action in state.actions() {
            let v = self.min_value(&state.transition(&action)?, i64::MIN, i64::MAX, 1)?;
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
