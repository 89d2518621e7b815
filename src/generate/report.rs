//! Serializable record of one solve

use crate::csp::{Assignment, Solution, SolveStatistics};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

/// Outcome of a solve together with the work it took
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// Identifier derived from the assignment
    pub id: String,
    pub solved: bool,
    /// `None` when the puzzle has no solution
    pub assignment: Option<Assignment>,
    pub statistics: SolveStatistics,
    pub solve_time_ms: u64,
}

impl SolveReport {
    /// Create a new report
    pub fn new(solution: Solution, statistics: SolveStatistics, solve_time: Duration) -> Self {
        let assignment = solution.into_assignment();

        Self {
            id: Self::generate_id(assignment.as_ref()),
            solved: assignment.is_some(),
            assignment,
            statistics,
            solve_time_ms: solve_time.as_millis() as u64,
        }
    }

    pub fn solution(&self) -> Solution {
        Solution::from(self.assignment.clone())
    }

    fn generate_id(assignment: Option<&Assignment>) -> String {
        let mut hasher = DefaultHasher::new();
        if let Some(assignment) = assignment {
            for (variable, word) in assignment.iter() {
                variable.hash(&mut hasher);
                word.hash(&mut hasher);
            }
        }
        format!("sol_{:x}", hasher.finish())
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Create from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}
