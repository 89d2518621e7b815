//! Slot variables and the overlaps between them

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a slot in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Across,
    Down,
}

/// A slot in the puzzle that must be filled with exactly one word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Variable {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Variable {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Grid coordinates of the k-th letter of this slot
    #[inline]
    pub fn cell(&self, k: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + k),
            Direction::Down => (self.row + k, self.col),
        }
    }

    /// Coordinates of the last letter, or `None` if they do not fit in `usize`
    pub fn checked_end(&self) -> Option<(usize, usize)> {
        let offset = self.length.checked_sub(1)?;
        match self.direction {
            Direction::Across => Some((self.row, self.col.checked_add(offset)?)),
            Direction::Down => Some((self.row.checked_add(offset)?, self.col)),
        }
    }

    /// All cells covered by this slot, in letter order
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.length).map(|k| self.cell(k)).collect()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(f, "({}, {}) {} : {}", self.row, self.col, direction, self.length)
    }
}

/// Letter positions of a shared cell: `first` indexes the first variable's word,
/// `second` the other variable's word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Overlap {
    pub first: usize,
    pub second: usize,
}

impl Overlap {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }

    /// The same shared cell seen from the other variable
    pub fn reversed(self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }

    /// Whether two words agree on the shared cell. A word too short to reach the
    /// cell never agrees.
    pub fn agrees(&self, first_word: &str, second_word: &str) -> bool {
        match (
            first_word.chars().nth(self.first),
            second_word.chars().nth(self.second),
        ) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}
