//! Value and ownership grids.
//!
//! The value grid is fixed for the whole game and shared read-only by
//! every state derived from it; the ownership grid is copied on every
//! transition.

use crate::error::GameError;
use crate::types::{Player, Position};
use serde::{Deserialize, Serialize};

/// Largest supported board side. Columns are rendered as letters A-Z.
pub const MAX_BOARD_SIZE: usize = 26;

fn check_size(n: usize) -> Result<(), GameError> {
    if n == 0 || n > MAX_BOARD_SIZE {
        return Err(GameError::InvalidSize { n });
    }
    Ok(())
}

/// Ownership of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody owns the cell yet.
    Unowned,
    /// The cell is owned by a player.
    Owned(Player),
}

impl Cell {
    /// Parses a cell from its board character (`X`, `O`, or `.`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Unowned),
            _ => Player::from_char(c).map(Cell::Owned),
        }
    }

    /// Returns the board character for this cell.
    pub fn as_char(self) -> char {
        match self {
            Cell::Unowned => '.',
            Cell::Owned(p) => p.as_char(),
        }
    }
}

/// N×N grid of positive cell values, immutable for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueGrid {
    n: usize,
    cells: Vec<u32>,
}

impl ValueGrid {
    /// Builds a value grid from row-major rows.
    ///
    /// # Errors
    ///
    /// Rejects sizes outside 1..=26, ragged rows, and non-positive values.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, GameError> {
        let n = rows.len();
        check_size(n)?;
        let mut cells = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(GameError::DimensionMismatch {
                    expected: n,
                    found: values.len(),
                });
            }
            for (col, value) in values.into_iter().enumerate() {
                if value == 0 {
                    return Err(GameError::NonPositiveValue {
                        position: Position::new(row, col),
                    });
                }
                cells.push(value);
            }
        }
        Ok(Self { n, cells })
    }

    /// Builds a grid where every cell has the same value.
    pub fn uniform(n: usize, value: u32) -> Result<Self, GameError> {
        Self::from_rows(vec![vec![value; n]; n])
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// The value of a cell.
    pub fn value(&self, pos: Position) -> u32 {
        self.cells[pos.row * self.n + pos.col]
    }
}

/// N×N grid of cell ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnershipGrid {
    n: usize,
    cells: Vec<Cell>,
}

impl OwnershipGrid {
    /// Builds a fully unowned grid.
    pub fn empty(n: usize) -> Result<Self, GameError> {
        check_size(n)?;
        Ok(Self {
            n,
            cells: vec![Cell::Unowned; n * n],
        })
    }

    /// Builds an ownership grid from row-major rows.
    ///
    /// # Errors
    ///
    /// Rejects sizes outside 1..=26 and ragged rows.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GameError> {
        let n = rows.len();
        check_size(n)?;
        let mut cells = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(GameError::DimensionMismatch {
                    expected: n,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { n, cells })
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Ownership of a cell.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.n + pos.col]
    }

    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row * self.n + pos.col] = cell;
    }

    /// Iterates cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (Position::new(i / self.n, i % self.n), cell))
    }

    /// Counts cells nobody owns.
    pub fn count_unowned(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Unowned).count()
    }

    /// The up-to-four 4-directional neighbors of a cell, edge-clipped,
    /// no wraparound.
    pub fn adjacent(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        if pos.row + 1 < self.n {
            neighbors.push(Position::new(pos.row + 1, pos.col));
        }
        if pos.row > 0 {
            neighbors.push(Position::new(pos.row - 1, pos.col));
        }
        if pos.col + 1 < self.n {
            neighbors.push(Position::new(pos.row, pos.col + 1));
        }
        if pos.col > 0 {
            neighbors.push(Position::new(pos.row, pos.col - 1));
        }
        neighbors
    }

    /// Renders the grid as N rows of N characters from `{X, O, .}`,
    /// joined by newlines.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.n * (self.n + 1));
        for row in 0..self.n {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.n {
                out.push(self.get(Position::new(row, col)).as_char());
            }
        }
        out
    }
}
