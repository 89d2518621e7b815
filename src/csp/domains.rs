//! Per-variable candidate word sets

use crate::puzzle::{Crossword, Variable};
use std::collections::{BTreeMap, BTreeSet};

/// Candidate words for every variable of one solve.
///
/// Each domain starts as a copy of the full word list and only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore {
    domains: BTreeMap<Variable, BTreeSet<String>>,
}

impl DomainStore {
    /// Give every variable its own copy of the puzzle's word list
    pub fn new(crossword: &Crossword) -> Self {
        let domains = crossword
            .variables()
            .iter()
            .map(|v| (v.clone(), crossword.words().clone()))
            .collect();

        Self { domains }
    }

    /// Candidate words of a variable. Unknown variables have an empty domain.
    pub fn get(&self, variable: &Variable) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.domains.get(variable).unwrap_or(&EMPTY)
    }

    /// Number of remaining candidates for a variable
    pub fn len(&self, variable: &Variable) -> usize {
        self.get(variable).len()
    }

    pub fn is_empty(&self, variable: &Variable) -> bool {
        self.get(variable).is_empty()
    }

    /// Remove a precomputed set of words from a variable's domain.
    /// Returns how many words were actually removed.
    pub fn remove_all(&mut self, variable: &Variable, removals: &BTreeSet<String>) -> usize {
        match self.domains.get_mut(variable) {
            Some(domain) => {
                let before = domain.len();
                domain.retain(|word| !removals.contains(word));
                before - domain.len()
            }
            None => 0,
        }
    }

    /// Shrink a variable's domain to a single word
    pub fn restrict(&mut self, variable: &Variable, word: &str) {
        if let Some(domain) = self.domains.get_mut(variable) {
            domain.retain(|candidate| candidate == word);
        }
    }

    /// First variable (in puzzle order) whose domain has been emptied
    pub fn empty_variable(&self) -> Option<&Variable> {
        self.domains
            .iter()
            .find(|(_, domain)| domain.is_empty())
            .map(|(variable, _)| variable)
    }

    /// Total number of candidates over all variables
    pub fn total_candidates(&self) -> usize {
        self.domains.values().map(BTreeSet::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &BTreeSet<String>)> {
        self.domains.iter()
    }
}
