//! Gang War - a deterministic two-player perfect-information board game
//! with depth-limited adversarial search agents.
//!
//! Two players take turns claiming cells of an N×N board of positive
//! values. A **Stake** claims any unowned cell; a **Raid** claims an
//! unowned cell adjacent to the mover's territory and captures every
//! adjacent opponent cell, transferring its value. The game ends when
//! the board is full; the higher score wins.
//!
//! # Architecture
//!
//! - **State**: [`GameState`] holds the board, scores, and turn, and
//!   owns the rules: [`GameState::actions`] and [`GameState::transition`].
//!   States are immutable; transitions return fresh successors.
//! - **Search**: [`Minimax`] and [`AlphaBeta`] both implement
//!   [`SearchStrategy`] and choose the best single move under a depth
//!   limit, scoring cutoff positions with [`evaluate`].
//!
//! # Example
//!
//! ```
//! use gang_war::{AlphaBeta, GameState, OwnershipGrid, Player, SearchStrategy, ValueGrid};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let values = Arc::new(ValueGrid::uniform(3, 1)?);
//! let state = GameState::new(values, OwnershipGrid::empty(3)?, Player::X)?;
//! let agent = AlphaBeta::new(Player::X, 2);
//! let action = agent.choose(&state)?;
//! let next = state.transition(&action)?;
//! assert_ne!(next.turn(), state.turn());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod grid;
pub mod invariants;
mod search;
mod state;
mod types;

pub use error::{GameError, SearchError};
pub use grid::{Cell, MAX_BOARD_SIZE, OwnershipGrid, ValueGrid};
pub use search::{AlphaBeta, Minimax, Mode, SearchStrategy, evaluate};
pub use state::{GameState, Scores};
pub use types::{Action, ActionKind, Player, Position};
