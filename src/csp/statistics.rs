//! Counters collected while solving

use crate::puzzle::Variable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Work done by the consistency engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationStatistics {
    pub node_removals: usize,
    pub revisions: usize,
    pub arc_removals: usize,
}

/// Work done by the backtracking search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    pub assignments_tried: usize,
    pub consistency_checks: usize,
    pub backtracks: usize,
    pub max_depth: usize,
}

/// Everything measured during one solve
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStatistics {
    pub variable_count: usize,
    pub word_count: usize,
    pub propagation: PropagationStatistics,
    /// Variable whose domain was emptied by propagation before search
    pub wiped_out: Option<Variable>,
    pub search_invoked: bool,
    pub search: SearchStatistics,
}

impl fmt::Display for SolveStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solve Statistics:")?;
        writeln!(f, "  Variables: {}", self.variable_count)?;
        writeln!(f, "  Words: {}", self.word_count)?;
        writeln!(f, "  Removed by node consistency: {}", self.propagation.node_removals)?;
        writeln!(f, "  Arc revisions: {}", self.propagation.revisions)?;
        writeln!(f, "  Removed by arc consistency: {}", self.propagation.arc_removals)?;
        if let Some(variable) = &self.wiped_out {
            writeln!(f, "  Domain wiped out: {}", variable)?;
        }
        if self.search_invoked {
            writeln!(f, "  Assignments tried: {}", self.search.assignments_tried)?;
            writeln!(f, "  Consistency checks: {}", self.search.consistency_checks)?;
            writeln!(f, "  Backtracks: {}", self.search.backtracks)?;
            writeln!(f, "  Max depth: {}", self.search.max_depth)?;
        } else {
            writeln!(f, "  Search: skipped")?;
        }
        Ok(())
    }
}
