//! Errors raised while building a puzzle definition

use super::Variable;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("structure has no rows or no columns")]
    EmptyStructure,

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedStructure {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("variable {0} has zero length")]
    ZeroLengthVariable(Variable),

    #[error("variable {variable} does not fit in a {height}x{width} grid")]
    VariableOutOfBounds {
        variable: Variable,
        height: usize,
        width: usize,
    },
}
