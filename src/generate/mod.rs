//! Puzzle filling, solve reports and solution validation

pub mod creator;
pub mod report;
pub mod validator;

pub use creator::CrosswordCreator;
pub use report::SolveReport;
pub use validator::{SolutionValidator, ValidationResult, Violation};
