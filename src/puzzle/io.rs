//! File I/O for puzzle structures and word lists

use super::Crossword;
use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::Path;

/// Character marking an open cell in a structure file
pub const OPEN_CELL: char = '_';

/// Load a puzzle from a structure file and a word list file
pub fn load_crossword<P: AsRef<Path>, Q: AsRef<Path>>(structure_path: P, words_path: Q) -> Result<Crossword> {
    let structure = load_structure_from_file(&structure_path)?;
    let words = load_words_from_file(&words_path)?;

    Crossword::new(structure, words).with_context(|| {
        format!(
            "Failed to build crossword from {}",
            structure_path.as_ref().display()
        )
    })
}

/// Load a grid structure from a text file
/// Format: each line is a row, '_' marks an open cell and anything else is blocked
pub fn load_structure_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<bool>>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read structure file: {}", path.as_ref().display()))?;

    parse_structure(&content)
        .with_context(|| format!("Failed to parse structure file: {}", path.as_ref().display()))
}

/// Parse a structure from its string representation. Short lines are padded with
/// blocked cells up to the width of the longest line.
pub fn parse_structure(content: &str) -> Result<Vec<Vec<bool>>> {
    let lines: Vec<&str> = content.lines().collect();
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    if lines.is_empty() || width == 0 {
        anyhow::bail!("Structure is empty or contains no cells");
    }

    let structure = lines
        .iter()
        .map(|line| {
            let mut row: Vec<bool> = line.chars().map(|c| c == OPEN_CELL).collect();
            row.resize(width, false);
            row
        })
        .collect();

    Ok(structure)
}

/// Load a word list from a text file, one word per line
pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> Result<BTreeSet<String>> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read words file: {}", path.as_ref().display()))?;

    let words = parse_words(&content);
    log::debug!("Loaded {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

/// Parse a word list: trimmed, upper-cased, deduplicated, blank lines skipped
pub fn parse_words(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Convert a structure back to its file representation
pub fn structure_to_string(crossword: &Crossword) -> String {
    let mut result = String::with_capacity(crossword.height * (crossword.width + 1));

    for row in 0..crossword.height {
        for col in 0..crossword.width {
            result.push(if crossword.is_open(row, col) { OPEN_CELL } else { '#' });
        }
        result.push('\n');
    }

    result
}

/// Create example puzzle files for trying out the solver
pub fn create_example_puzzles<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let structure0 = "#___#\n#_##_\n#_##_\n#_##_\n#____\n";
    std::fs::write(dir.join("structure0.txt"), structure0)
        .context("Failed to write structure0.txt")?;

    let words0 = "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten\n";
    std::fs::write(dir.join("words0.txt"), words0)
        .context("Failed to write words0.txt")?;

    let structure1 = "##############\n############_#\n#____________#\n#_#####_####_#\n#_#####_####_#\n#_#####_######\n#_#####______#\n#_############\n#_____########\n";
    std::fs::write(dir.join("structure1.txt"), structure1)
        .context("Failed to write structure1.txt")?;

    let words1 = [
        "adversarial", "alpha", "arc", "artificial", "bayes", "beta", "bit", "breadth",
        "byte", "classification", "classify", "condition", "constraint", "create",
        "depth", "distribution", "end", "false", "graph", "heuristic", "infer",
        "inference", "initial", "intelligence", "knowledge", "language", "learning",
        "line", "logic", "loss", "markov", "minimax", "network", "neural", "node",
        "optimization", "probability", "proposition", "prune", "reason", "recurrent",
        "regression", "resolution", "resource", "risk", "search", "start", "state",
        "strong", "true", "truth", "uncertainty", "variable", "weak", "win",
    ]
    .join("\n");
    std::fs::write(dir.join("words1.txt"), words1)
        .context("Failed to write words1.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{Direction, Variable};
    use tempfile::tempdir;

    #[test]
    fn test_parse_structure() {
        let structure = parse_structure("#_\n__\n").unwrap();
        assert_eq!(structure, vec![vec![false, true], vec![true, true]]);
    }

    #[test]
    fn test_parse_structure_pads_short_lines() {
        let structure = parse_structure("___\n_\n").unwrap();
        assert_eq!(structure[1], vec![true, false, false]);
    }

    #[test]
    fn test_parse_empty_structure() {
        assert!(parse_structure("").is_err());
        assert!(parse_structure("\n\n").is_err());
    }

    #[test]
    fn test_parse_words() {
        let words = parse_words("cat\n  Dog \n\nCAT\n");
        let expected: BTreeSet<String> = ["CAT", "DOG"].iter().map(|w| w.to_string()).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_structure_round_trip() {
        let content = "#___#\n#_##_\n";
        let crossword = Crossword::new(parse_structure(content).unwrap(), BTreeSet::new()).unwrap();
        assert_eq!(structure_to_string(&crossword), content);
    }

    #[test]
    fn test_create_and_load_examples() {
        let temp_dir = tempdir().unwrap();
        create_example_puzzles(temp_dir.path()).unwrap();

        assert!(temp_dir.path().join("structure1.txt").exists());
        assert!(temp_dir.path().join("words1.txt").exists());

        let crossword = load_crossword(
            temp_dir.path().join("structure0.txt"),
            temp_dir.path().join("words0.txt"),
        )
        .unwrap();
        assert_eq!(crossword.variables().len(), 4);
        assert_eq!(crossword.words().len(), 10);
        assert!(crossword.words().contains("SEVEN"));
        assert!(crossword
            .variables()
            .contains(&Variable::new(0, 1, Direction::Down, 5)));

        let larger = load_crossword(
            temp_dir.path().join("structure1.txt"),
            temp_dir.path().join("words1.txt"),
        )
        .unwrap();
        assert_eq!(larger.variables().len(), 6);
        assert!(larger.variables().iter().all(|v| v.length > 2));
        assert!(larger
            .variables()
            .contains(&Variable::new(2, 1, Direction::Across, 12)));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempdir().unwrap();
        assert!(load_crossword(
            temp_dir.path().join("missing.txt"),
            temp_dir.path().join("words.txt"),
        )
        .is_err());
    }
}
