//! Result of a solve

use super::Assignment;

/// Either a word for every variable, or proof that none exists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Solved(Assignment),
    NoSolution,
}

impl Solution {
    pub fn is_solved(&self) -> bool {
        matches!(self, Solution::Solved(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            Solution::Solved(assignment) => Some(assignment),
            Solution::NoSolution => None,
        }
    }

    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            Solution::Solved(assignment) => Some(assignment),
            Solution::NoSolution => None,
        }
    }
}

impl From<Option<Assignment>> for Solution {
    fn from(assignment: Option<Assignment>) -> Self {
        assignment.map_or(Solution::NoSolution, Solution::Solved)
    }
}
