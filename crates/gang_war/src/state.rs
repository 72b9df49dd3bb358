//! Game state, legal-move generation, and transitions.

use crate::error::GameError;
use crate::grid::{Cell, OwnershipGrid, ValueGrid};
use crate::types::{Action, ActionKind, Player, Position};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// Both players' scores.
///
/// A plain value type, built fresh for every state. Raids move value
/// between the two sides, so neither field is monotonic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    x: i64,
    o: i64,
}

impl Scores {
    /// A player's score.
    pub fn get(self, player: Player) -> i64 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// A player's score minus the opponent's.
    pub fn margin(self, perspective: Player) -> i64 {
        self.get(perspective) - self.get(perspective.opponent())
    }

    /// Combined score of both players.
    pub fn total(self) -> i64 {
        self.x + self.o
    }

    pub(crate) fn add(&mut self, player: Player, amount: i64) {
        match player {
            Player::X => self.x += amount,
            Player::O => self.o += amount,
        }
    }
}

/// A complete game position.
///
/// Immutable: [`GameState::transition`] returns a fresh successor and
/// never touches the predecessor, so search can branch from the same
/// ancestor freely. The value grid is shared, the ownership grid and
/// scores are copied.
#[derive(Debug, Clone)]
pub struct GameState {
    ownership: OwnershipGrid,
    values: Arc<ValueGrid>,
    turn: Player,
    remaining_spaces: usize,
    scores: Scores,
}

impl GameState {
    /// Builds a state from its grids and the player to move.
    ///
    /// Remaining-space count and initial scores are derived by a single
    /// scan of the ownership grid.
    ///
    /// # Errors
    ///
    /// Rejects grids whose dimensions disagree.
    #[instrument(skip(values, ownership), fields(n = values.size()))]
    pub fn new(
        values: Arc<ValueGrid>,
        ownership: OwnershipGrid,
        turn: Player,
    ) -> Result<Self, GameError> {
        if values.size() != ownership.size() {
            return Err(GameError::DimensionMismatch {
                expected: values.size(),
                found: ownership.size(),
            });
        }
        let mut remaining_spaces = 0;
        let mut scores = Scores::default();
        for (pos, cell) in ownership.iter() {
            match cell {
                Cell::Unowned => remaining_spaces += 1,
                Cell::Owned(owner) => scores.add(owner, i64::from(values.value(pos))),
            }
        }
        Ok(Self {
            ownership,
            values,
            turn,
            remaining_spaces,
            scores,
        })
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.values.size()
    }

    /// The player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Both players' scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Number of unowned cells left.
    pub fn remaining_spaces(&self) -> usize {
        self.remaining_spaces
    }

    /// The ownership grid.
    pub fn ownership(&self) -> &OwnershipGrid {
        &self.ownership
    }

    /// The shared value grid.
    pub fn values(&self) -> &ValueGrid {
        &self.values
    }

    /// True once every cell is owned.
    pub fn terminal(&self) -> bool {
        self.remaining_spaces == 0
    }

    /// Every legal action for the player to move.
    ///
    /// All Stake actions come strictly before all Raid actions. Search
    /// breaks ties in favor of the first action seen, so this ordering
    /// is what makes a Stake win over an equal-valued Raid.
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        for (pos, cell) in self.ownership.iter() {
            if cell == Cell::Unowned {
                actions.push(Action::new(pos, ActionKind::Stake, self.turn));
            }
        }
        // One Raid per qualifying cell, however many owned neighbors it has.
        for (pos, cell) in self.ownership.iter() {
            if cell == Cell::Unowned && self.adjacent_to_own(pos) {
                actions.push(Action::new(pos, ActionKind::Raid, self.turn));
            }
        }
        actions
    }

    fn adjacent_to_own(&self, pos: Position) -> bool {
        self.ownership
            .adjacent(pos)
            .into_iter()
            .any(|p| self.ownership.get(p) == Cell::Owned(self.turn))
    }

    /// Applies an action, producing the successor state.
    ///
    /// The mover claims the target cell and scores its value; a Raid
    /// additionally flips every 4-adjacent opponent cell to the mover,
    /// transferring each flipped cell's value from the opponent. The
    /// turn passes to the opponent.
    ///
    /// Legality beyond the target cell being unowned is the caller's
    /// contract; [`GameState::actions`] only produces legal actions.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if the target lies outside the
    /// board, and [`GameError::CellOccupied`] if it is already owned.
    pub fn transition(&self, action: &Action) -> Result<GameState, GameError> {
        let target = action.position();
        let n = self.size();
        if target.row >= n || target.col >= n {
            return Err(GameError::OutOfBounds {
                position: target,
                n,
            });
        }
        if self.ownership.get(target) != Cell::Unowned {
            return Err(GameError::CellOccupied { position: target });
        }
        let mover = self.turn;
        let mut ownership = self.ownership.clone();
        let mut scores = self.scores;

        ownership.set(target, Cell::Owned(mover));
        scores.add(mover, i64::from(self.values.value(target)));

        if action.kind() == ActionKind::Raid {
            for neighbor in self.ownership.adjacent(target) {
                if ownership.get(neighbor) == Cell::Owned(mover.opponent()) {
                    ownership.set(neighbor, Cell::Owned(mover));
                    let value = i64::from(self.values.value(neighbor));
                    scores.add(mover, value);
                    scores.add(mover.opponent(), -value);
                }
            }
        }

        let next = GameState {
            ownership,
            values: Arc::clone(&self.values),
            turn: mover.opponent(),
            remaining_spaces: self.remaining_spaces - 1,
            scores,
        };
        debug_assert!(
            crate::invariants::check(&next).is_ok(),
            "transition produced an inconsistent state"
        );
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_state(n: usize) -> GameState {
        let values = Arc::new(ValueGrid::uniform(n, 1).unwrap());
        let ownership = OwnershipGrid::empty(n).unwrap();
        GameState::new(values, ownership, Player::X).unwrap()
    }

    #[test]
    fn new_derives_scores_and_remaining_from_the_grid() {
        let values = Arc::new(
            ValueGrid::from_rows(vec![vec![2, 3], vec![5, 7]]).unwrap(),
        );
        let ownership = OwnershipGrid::from_rows(vec![
            vec![Cell::Owned(Player::X), Cell::Unowned],
            vec![Cell::Owned(Player::O), Cell::Owned(Player::O)],
        ])
        .unwrap();
        let state = GameState::new(values, ownership, Player::O).unwrap();
        assert_eq!(state.remaining_spaces(), 1);
        assert_eq!(state.scores().get(Player::X), 2);
        assert_eq!(state.scores().get(Player::O), 12);
    }

    #[test]
    fn new_rejects_mismatched_grids() {
        let values = Arc::new(ValueGrid::uniform(3, 1).unwrap());
        let ownership = OwnershipGrid::empty(2).unwrap();
        assert!(matches!(
            GameState::new(values, ownership, Player::X),
            Err(GameError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn transition_rejects_occupied_target() {
        let state = empty_state(2);
        let stake = Action::new(Position::new(0, 0), ActionKind::Stake, Player::X);
        let next = state.transition(&stake).unwrap();
        let again = Action::new(Position::new(0, 0), ActionKind::Stake, Player::O);
        assert!(matches!(
            next.transition(&again),
            Err(GameError::CellOccupied {
                position: Position { row: 0, col: 0 }
            })
        ));
    }

    #[test]
    fn predecessor_is_untouched_by_transition() {
        let state = empty_state(2);
        let stake = Action::new(Position::new(1, 1), ActionKind::Stake, Player::X);
        let _next = state.transition(&stake).unwrap();
        assert_eq!(state.remaining_spaces(), 4);
        assert_eq!(state.ownership().get(Position::new(1, 1)), Cell::Unowned);
        assert_eq!(state.scores(), Scores::default());
    }
}
