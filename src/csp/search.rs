//! Backtracking search over partial assignments

use super::assignment::Trial;
use super::consistency::{ConsistencyEngine, DomainWipeout};
use super::statistics::SearchStatistics;
use super::{Assignment, DomainStore, Solution};
use crate::config::{Inference, SolverConfig, ValueOrdering, VariableOrdering};
use crate::puzzle::{Crossword, Variable};
use itertools::Itertools;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Heuristics and inference used by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub variable_ordering: VariableOrdering,
    pub value_ordering: ValueOrdering,
    pub inference: Inference,
}

impl From<&SolverConfig> for SearchOptions {
    fn from(config: &SolverConfig) -> Self {
        Self {
            variable_ordering: config.variable_ordering,
            value_ordering: config.value_ordering,
            inference: config.inference,
        }
    }
}

/// Depth-first search for a complete, consistent assignment.
///
/// Owns the (already propagated) domains of one solve.
pub struct BacktrackingSearch<'a> {
    crossword: &'a Crossword,
    domains: DomainStore,
    options: SearchOptions,
    statistics: SearchStatistics,
}

impl<'a> BacktrackingSearch<'a> {
    pub fn new(crossword: &'a Crossword, domains: DomainStore, options: SearchOptions) -> Self {
        Self {
            crossword,
            domains,
            options,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    /// Search from the empty assignment
    pub fn run(&mut self) -> Solution {
        let mut assignment = Assignment::new();
        if self.backtrack(&mut assignment) {
            Solution::Solved(assignment)
        } else {
            Solution::NoSolution
        }
    }

    /// Pick the next variable to fill.
    ///
    /// With [`VariableOrdering::MrvDegree`]: fewest remaining candidates first,
    /// then most neighbors, then puzzle order.
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<Variable> {
        let mut unassigned = self
            .crossword
            .variables()
            .iter()
            .filter(|v| !assignment.contains(v));

        match self.options.variable_ordering {
            VariableOrdering::Static => unassigned.next().cloned(),
            VariableOrdering::MrvDegree => unassigned
                .min_by_key(|v| {
                    (
                        self.domains.len(v),
                        Reverse(self.crossword.neighbors(v).len()),
                    )
                })
                .cloned(),
        }
    }

    /// Candidates for `variable` in the order they should be tried.
    ///
    /// With [`ValueOrdering::LeastConstraining`], values that rule out the fewest
    /// candidates of unassigned neighbors come first; ties stay alphabetical.
    pub fn order_domain_values(&self, variable: &Variable, assignment: &Assignment) -> Vec<String> {
        let domain = self.domains.get(variable);
        if self.options.value_ordering == ValueOrdering::Lexicographic {
            return domain.iter().cloned().collect();
        }

        let neighbors: Vec<&Variable> = self
            .crossword
            .neighbors(variable)
            .iter()
            .filter(|n| !assignment.contains(n))
            .collect();

        domain
            .iter()
            .map(|value| {
                let eliminated: usize = neighbors
                    .iter()
                    .map(|neighbor| {
                        self.domains
                            .get(neighbor)
                            .iter()
                            .filter(|other| {
                                !pair_consistent(self.crossword, variable, value, neighbor, other)
                            })
                            .count()
                    })
                    .sum();
                (eliminated, value)
            })
            .sorted_by_key(|(eliminated, _)| *eliminated)
            .map(|(_, value)| value.clone())
            .collect()
    }

    pub fn consistent(&self, assignment: &Assignment) -> bool {
        consistent(self.crossword, assignment)
    }

    fn backtrack(&mut self, assignment: &mut Assignment) -> bool {
        if assignment.is_complete(self.crossword.variables()) {
            return true;
        }
        let variable = match self.select_unassigned_variable(assignment) {
            Some(variable) => variable,
            None => return true,
        };
        self.statistics.max_depth = self.statistics.max_depth.max(assignment.len() + 1);

        for value in self.order_domain_values(&variable, assignment) {
            self.statistics.assignments_tried += 1;
            let mut trial = Trial::new(assignment, variable.clone(), value.clone());

            self.statistics.consistency_checks += 1;
            if !self.consistent(&trial) {
                continue;
            }

            let snapshot = match self.options.inference {
                Inference::None => None,
                Inference::MaintainArcConsistency => {
                    match self.maintain_arc_consistency(&variable, &value) {
                        Ok(snapshot) => Some(snapshot),
                        Err(wipeout) => {
                            log::trace!("Assigning {} to {} wipes out {}", value, variable, wipeout.variable);
                            continue;
                        }
                    }
                }
            };

            if self.backtrack(&mut trial) {
                trial.commit();
                return true;
            }

            if let Some(snapshot) = snapshot {
                self.domains = snapshot;
            }
        }

        self.statistics.backtracks += 1;
        log::trace!("Exhausted candidates for {}", variable);
        false
    }

    /// Fix `variable` to `value` in the domains and propagate to its neighbors.
    /// Returns the domains as they were before, or restores them on wipeout.
    fn maintain_arc_consistency(
        &mut self,
        variable: &Variable,
        value: &str,
    ) -> Result<DomainStore, DomainWipeout> {
        let snapshot = self.domains.clone();
        self.domains.restrict(variable, value);

        let arcs = self
            .crossword
            .neighbors(variable)
            .iter()
            .map(|z| (z.clone(), variable.clone()))
            .collect();

        let mut engine = ConsistencyEngine::new(self.crossword);
        match engine.ac3(&mut self.domains, Some(arcs)) {
            Ok(()) => Ok(snapshot),
            Err(wipeout) => {
                self.domains = snapshot;
                Err(wipeout)
            }
        }
    }
}

/// Whether an assignment breaks no constraint: words are unique, have their
/// variable's length, and agree on every shared cell.
pub fn consistent(crossword: &Crossword, assignment: &Assignment) -> bool {
    let mut used = HashSet::with_capacity(assignment.len());

    for (variable, word) in assignment.iter() {
        if !used.insert(word) {
            return false;
        }
        if word.chars().count() != variable.length {
            return false;
        }
        for neighbor in crossword.neighbors(variable) {
            let (Some(other), Some(overlap)) =
                (assignment.get(neighbor), crossword.overlap(variable, neighbor))
            else {
                continue;
            };
            if !overlap.agrees(word, other) {
                return false;
            }
        }
    }

    true
}

/// Consistency of exactly two assigned variables
pub fn pair_consistent(crossword: &Crossword, x: &Variable, wx: &str, y: &Variable, wy: &str) -> bool {
    if wx == wy || wx.chars().count() != x.length || wy.chars().count() != y.length {
        return false;
    }
    crossword
        .overlap(x, y)
        .map_or(true, |overlap| overlap.agrees(wx, wy))
}
