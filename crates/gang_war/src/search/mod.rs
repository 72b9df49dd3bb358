//! Depth-limited adversarial search over Gang War positions.
//!
//! Two strategies implement one [`SearchStrategy`] trait: plain minimax
//! and alpha-beta-pruned minimax. Both must choose the same action for
//! the same position and depth; pruning changes which nodes are
//! visited, never the result.

mod alphabeta;
mod minimax;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

use crate::error::SearchError;
use crate::state::GameState;
use crate::types::{Action, Player};

/// Scores a position from one player's perspective: that player's score
/// minus the opponent's. Used only at cutoff.
pub fn evaluate(state: &GameState, perspective: Player) -> i64 {
    state.scores().margin(perspective)
}

/// True when search should stop expanding and evaluate instead.
pub(crate) fn cutoff(state: &GameState, depth: u32, max_depth: u32) -> bool {
    depth >= max_depth || state.terminal()
}

/// A move-selection strategy.
///
/// Strategies are configured at construction (perspective player and
/// depth limit) and choose the best single move from a position.
pub trait SearchStrategy {
    /// Chooses the best action from the given position.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TerminalRoot`] when the position has no
    /// moves left.
    fn choose(&self, state: &GameState) -> Result<Action, SearchError>;

    /// The player this strategy plays for.
    fn player(&self) -> Player;
}

/// Which engine drives move selection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString,
)]
pub enum Mode {
    /// Plain depth-limited minimax.
    #[strum(serialize = "MINIMAX")]
    Minimax,
    /// Minimax with alpha-beta pruning.
    #[strum(serialize = "ALPHABETA")]
    AlphaBeta,
    /// Time-budgeted competition play. Recognized in input but not
    /// implemented by any strategy here.
    #[strum(serialize = "COMPETITION")]
    Competition,
}

impl Mode {
    /// Instantiates the strategy this mode selects, or `None` for the
    /// unsupported competition mode.
    pub fn strategy(self, player: Player, max_depth: u32) -> Option<Box<dyn SearchStrategy>> {
        match self {
            Mode::Minimax => Some(Box::new(Minimax::new(player, max_depth))),
            Mode::AlphaBeta => Some(Box::new(AlphaBeta::new(player, max_depth))),
            Mode::Competition => None,
        }
    }
}
