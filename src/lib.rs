//! Crossword CSP Solver
//!
//! This library fills crossword grids from a word list by treating every slot as
//! a constraint satisfaction variable: node consistency and AC-3 prune the
//! candidate words, then a backtracking search finds a complete fill.

pub mod config;
pub mod csp;
pub mod generate;
pub mod logging;
pub mod puzzle;
pub mod utils;

pub use config::Settings;
pub use csp::Solution;
pub use generate::{CrosswordCreator, SolveReport};
pub use puzzle::Crossword;

use anyhow::Result;

/// Main entry point: load the puzzle named in `settings` and fill it
pub fn solve_crossword(settings: &Settings) -> Result<SolveReport> {
    let mut creator = CrosswordCreator::from_settings(settings)?;
    Ok(creator.solve_report())
}
