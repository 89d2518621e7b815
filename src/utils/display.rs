//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::csp::Assignment;
use crate::generate::SolveReport;
use crate::puzzle::Crossword;
use super::GridImage;
use anyhow::{Context, Result};
use std::path::Path;

const BLOCKED: char = '█';

/// Format filled puzzles for display
pub struct SolutionFormatter;

impl SolutionFormatter {
    /// Letters of the assignment laid out on the grid. Cells with no letter are
    /// `None`, whether blocked or still empty.
    pub fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
        let mut letters = vec![vec![None; crossword.width]; crossword.height];
        for (variable, word) in assignment.iter() {
            for ((row, col), letter) in variable.cells().into_iter().zip(word.chars()) {
                if row < crossword.height && col < crossword.width {
                    letters[row][col] = Some(letter);
                }
            }
        }
        letters
    }

    /// Format the grid with one character per cell
    pub fn format_grid(crossword: &Crossword, assignment: &Assignment) -> String {
        let letters = Self::letter_grid(crossword, assignment);
        let mut output = String::new();
        for (row, cells) in letters.iter().enumerate() {
            for (col, letter) in cells.iter().enumerate() {
                output.push(Self::cell_char(crossword, row, col, *letter));
            }
            output.push('\n');
        }
        output
    }

    /// Format the grid with row and column numbers
    pub fn format_grid_with_coords(crossword: &Crossword, assignment: &Assignment) -> String {
        let letters = Self::letter_grid(crossword, assignment);
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..crossword.width {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for (row, cells) in letters.iter().enumerate() {
            output.push_str(&format!("{:2} ", row));
            for (col, letter) in cells.iter().enumerate() {
                output.push(' ');
                output.push(Self::cell_char(crossword, row, col, *letter));
            }
            output.push('\n');
        }

        output
    }

    /// Human-readable summary of a solve
    pub fn format_report(crossword: &Crossword, report: &SolveReport, show_coordinates: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Solve {} ===\n", report.id));
        output.push_str(&format!(
            "Grid: {}x{}, {} variables, {} overlaps\n",
            crossword.width,
            crossword.height,
            crossword.variables().len(),
            crossword.overlap_count()
        ));
        output.push_str(&format!("Solve Time: {}ms\n\n", report.solve_time_ms));

        match &report.assignment {
            Some(assignment) => {
                if show_coordinates {
                    output.push_str(&Self::format_grid_with_coords(crossword, assignment));
                } else {
                    output.push_str(&Self::format_grid(crossword, assignment));
                }
                output.push('\n');
                output.push_str("Words:\n");
                for (variable, word) in assignment.iter() {
                    output.push_str(&format!("  {:<20} {}\n", variable.to_string(), word));
                }
            }
            None => output.push_str("No solution.\n"),
        }

        output.push('\n');
        output.push_str(&report.statistics.to_string());
        output
    }

    /// Write a report to `path` in the requested format
    pub fn save_report<P: AsRef<Path>>(
        crossword: &Crossword,
        report: &SolveReport,
        path: P,
        format: OutputFormat,
        show_coordinates: bool,
    ) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        match format {
            OutputFormat::Text => {
                let content = Self::format_report(crossword, report, show_coordinates);
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write report: {}", path.display()))?;
            }
            OutputFormat::Json => report
                .save_to_file(path)
                .with_context(|| format!("Failed to write report: {}", path.display()))?,
            OutputFormat::Png => {
                let empty = Assignment::new();
                let assignment = report.assignment.as_ref().unwrap_or(&empty);
                GridImage::render(crossword, assignment).save(path)?;
            }
        }

        Ok(())
    }

    fn cell_char(crossword: &Crossword, row: usize, col: usize, letter: Option<char>) -> char {
        match letter {
            Some(letter) => letter,
            None if crossword.is_open(row, col) => ' ',
            None => BLOCKED,
        }
    }
}

/// Status lines for the CLI, wrapped in ANSI colors when the terminal allows it.
///
/// Color is skipped when `NO_COLOR` is set or `TERM=dumb`.
pub struct ColorOutput;

impl ColorOutput {
    pub fn colored(text: &str, color: Color) -> String {
        if Self::use_color() {
            format!("\x1b[{}m{}\x1b[0m", color.ansi_code(), text)
        } else {
            text.to_string()
        }
    }

    fn use_color() -> bool {
        let dumb_terminal = std::env::var("TERM").is_ok_and(|term| term == "dumb");
        std::env::var_os("NO_COLOR").is_none() && !dumb_terminal
    }

    /// A puzzle was filled or a fill checked out
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// An invalid fill or a failed step
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// No solution, or a fallback was taken
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Progress
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

/// Foreground colors used by [`ColorOutput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// SGR foreground code
    fn ansi_code(self) -> u8 {
        30 + match self {
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
        }
    }
}
