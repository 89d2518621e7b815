//! Puzzle definition: structure, slot variables, overlaps and the word list

pub mod crossword;
pub mod error;
pub mod io;
pub mod variable;

pub use crossword::Crossword;
pub use error::PuzzleError;
pub use io::{create_example_puzzles, load_crossword, parse_structure, parse_words};
pub use variable::{Direction, Overlap, Variable};
