//! Independent check of a filled puzzle

use crate::csp::Assignment;
use crate::puzzle::{Crossword, Variable};
use std::collections::HashMap;
use std::fmt;

/// Checks an assignment against every constraint of a puzzle
pub struct SolutionValidator<'a> {
    crossword: &'a Crossword,
}

/// Result of solution validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
    pub violations: Vec<Violation>,
    pub details: ValidationDetails,
}

#[derive(Debug, Clone, Default)]
pub struct ValidationDetails {
    pub variables_checked: usize,
    pub overlaps_checked: usize,
}

/// A single broken constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Unassigned(Variable),
    WrongLength {
        variable: Variable,
        word: String,
    },
    DuplicateWord {
        word: String,
        first: Variable,
        second: Variable,
    },
    OverlapMismatch {
        first: Variable,
        second: Variable,
    },
    NotInWordList {
        variable: Variable,
        word: String,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Unassigned(variable) => write!(f, "{} has no word", variable),
            Violation::WrongLength { variable, word } => {
                write!(f, "{} does not fit {}", word, variable)
            }
            Violation::DuplicateWord { word, first, second } => {
                write!(f, "{} is used by both {} and {}", word, first, second)
            }
            Violation::OverlapMismatch { first, second } => {
                write!(f, "{} and {} disagree on their shared cell", first, second)
            }
            Violation::NotInWordList { variable, word } => {
                write!(f, "{} at {} is not in the word list", word, variable)
            }
        }
    }
}

impl<'a> SolutionValidator<'a> {
    /// Create a new solution validator
    pub fn new(crossword: &'a Crossword) -> Self {
        Self { crossword }
    }

    /// Validate that `assignment` is a complete fill of the puzzle
    pub fn validate(&self, assignment: &Assignment) -> ValidationResult {
        let mut violations = Vec::new();
        let mut details = ValidationDetails::default();
        let mut first_use: HashMap<&str, &Variable> = HashMap::new();

        for variable in self.crossword.variables() {
            details.variables_checked += 1;
            let Some(word) = assignment.get(variable) else {
                violations.push(Violation::Unassigned(variable.clone()));
                continue;
            };

            if word.chars().count() != variable.length {
                violations.push(Violation::WrongLength {
                    variable: variable.clone(),
                    word: word.to_string(),
                });
            }
            if !self.crossword.words().contains(word) {
                violations.push(Violation::NotInWordList {
                    variable: variable.clone(),
                    word: word.to_string(),
                });
            }
            let first = *first_use.entry(word).or_insert(variable);
            if first != variable {
                violations.push(Violation::DuplicateWord {
                    word: word.to_string(),
                    first: first.clone(),
                    second: variable.clone(),
                });
            }
        }

        // Each overlapping pair once.
        for (x, y) in self.crossword.arcs().into_iter().filter(|(x, y)| x < y) {
            details.overlaps_checked += 1;
            let (Some(wx), Some(wy), Some(overlap)) =
                (assignment.get(&x), assignment.get(&y), self.crossword.overlap(&x, &y))
            else {
                continue;
            };
            if !overlap.agrees(wx, wy) {
                violations.push(Violation::OverlapMismatch { first: x, second: y });
            }
        }

        let is_valid = violations.is_empty();
        let error_message = violations.first().map(|violation| {
            if violations.len() > 1 {
                format!("{} (and {} more)", violation, violations.len() - 1)
            } else {
                violation.to_string()
            }
        });

        ValidationResult {
            is_valid,
            error_message,
            violations,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{parse_structure, parse_words, Direction};

    fn sample_puzzle() -> Crossword {
        let structure = parse_structure("#___#\n#_##_\n#_##_\n#_##_\n#____\n").unwrap();
        let words = parse_words("one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten\n");
        Crossword::new(structure, words).unwrap()
    }

    fn fill(entries: &[(usize, usize, Direction, usize, &str)]) -> Assignment {
        let mut assignment = Assignment::new();
        for &(row, col, direction, length, word) in entries {
            assignment.assign(Variable::new(row, col, direction, length), word.to_string());
        }
        assignment
    }

    #[test]
    fn test_valid_fill() {
        let crossword = sample_puzzle();
        let assignment = fill(&[
            (0, 1, Direction::Across, 3, "SIX"),
            (0, 1, Direction::Down, 5, "SEVEN"),
            (1, 4, Direction::Down, 4, "FIVE"),
            (4, 1, Direction::Across, 4, "NINE"),
        ]);

        let result = SolutionValidator::new(&crossword).validate(&assignment);
        assert!(result.is_valid);
        assert!(result.error_message.is_none());
        assert_eq!(result.details.variables_checked, 4);
        assert_eq!(result.details.overlaps_checked, 3);
    }

    #[test]
    fn test_reports_each_violation() {
        let crossword = sample_puzzle();
        let assignment = fill(&[
            (0, 1, Direction::Across, 3, "TEN"),
            (0, 1, Direction::Down, 5, "SEVEN"),
            (4, 1, Direction::Across, 4, "ZERO"),
        ]);

        let result = SolutionValidator::new(&crossword).validate(&assignment);
        assert!(!result.is_valid);
        assert!(result
            .violations
            .contains(&Violation::Unassigned(Variable::new(1, 4, Direction::Down, 4))));
        assert!(result.violations.contains(&Violation::OverlapMismatch {
            first: Variable::new(0, 1, Direction::Across, 3),
            second: Variable::new(0, 1, Direction::Down, 5),
        }));
        assert!(result.violations.contains(&Violation::NotInWordList {
            variable: Variable::new(4, 1, Direction::Across, 4),
            word: "ZERO".to_string(),
        }));
        assert!(result.error_message.unwrap().contains("more"));
    }

    #[test]
    fn test_duplicate_and_length() {
        let crossword = Crossword::from_variables(
            1,
            7,
            vec![
                Variable::new(0, 0, Direction::Across, 3),
                Variable::new(0, 4, Direction::Across, 3),
            ],
            parse_words("cat\ncats\n"),
        )
        .unwrap();
        let assignment = fill(&[
            (0, 0, Direction::Across, 3, "CAT"),
            (0, 4, Direction::Across, 3, "CAT"),
        ]);

        let result = SolutionValidator::new(&crossword).validate(&assignment);
        assert_eq!(
            result.violations,
            vec![Violation::DuplicateWord {
                word: "CAT".to_string(),
                first: Variable::new(0, 0, Direction::Across, 3),
                second: Variable::new(0, 4, Direction::Across, 3),
            }]
        );

        let triple = Crossword::from_variables(
            1,
            11,
            vec![
                Variable::new(0, 0, Direction::Across, 3),
                Variable::new(0, 4, Direction::Across, 3),
                Variable::new(0, 8, Direction::Across, 3),
            ],
            parse_words("cat\n"),
        )
        .unwrap();
        let repeated = fill(&[
            (0, 0, Direction::Across, 3, "CAT"),
            (0, 4, Direction::Across, 3, "CAT"),
            (0, 8, Direction::Across, 3, "CAT"),
        ]);
        let result = SolutionValidator::new(&triple).validate(&repeated);
        let firsts: Vec<&Variable> = result
            .violations
            .iter()
            .filter_map(|violation| match violation {
                Violation::DuplicateWord { first, .. } => Some(first),
                _ => None,
            })
            .collect();
        assert_eq!(
            firsts,
            vec![
                &Variable::new(0, 0, Direction::Across, 3),
                &Variable::new(0, 0, Direction::Across, 3),
            ]
        );

        let stretched = fill(&[
            (0, 0, Direction::Across, 3, "CATS"),
            (0, 4, Direction::Across, 3, "CAT"),
        ]);
        let result = SolutionValidator::new(&crossword).validate(&stretched);
        assert_eq!(
            result.violations,
            vec![Violation::WrongLength {
                variable: Variable::new(0, 0, Direction::Across, 3),
                word: "CATS".to_string(),
            }]
        );
    }
}
