//! Partial and complete mappings from variables to words

use crate::puzzle::Variable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

/// One filled slot, as stored in reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedWord {
    pub variable: Variable,
    pub word: String,
}

/// Words chosen so far for some of the puzzle's variables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AssignedWord>", into = "Vec<AssignedWord>")]
pub struct Assignment {
    words: BTreeMap<Variable, String>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, variable: &Variable) -> Option<&str> {
        self.words.get(variable).map(String::as_str)
    }

    pub fn contains(&self, variable: &Variable) -> bool {
        self.words.contains_key(variable)
    }

    /// Assign a word, returning the word previously held by the variable
    pub fn assign(&mut self, variable: Variable, word: String) -> Option<String> {
        self.words.insert(variable, word)
    }

    pub fn unassign(&mut self, variable: &Variable) -> Option<String> {
        self.words.remove(variable)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether every one of `variables` has a word
    pub fn is_complete(&self, variables: &[Variable]) -> bool {
        variables.iter().all(|v| self.words.contains_key(v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> {
        self.words.iter().map(|(v, w)| (v, w.as_str()))
    }
}

impl From<Vec<AssignedWord>> for Assignment {
    fn from(entries: Vec<AssignedWord>) -> Self {
        Self {
            words: entries.into_iter().map(|e| (e.variable, e.word)).collect(),
        }
    }
}

impl From<Assignment> for Vec<AssignedWord> {
    fn from(assignment: Assignment) -> Self {
        assignment
            .words
            .into_iter()
            .map(|(variable, word)| AssignedWord { variable, word })
            .collect()
    }
}

/// A tentative assignment that is rolled back when dropped unless committed.
///
/// Every path out of a search branch, including early returns, removes the
/// trial value again.
pub struct Trial<'a> {
    assignment: &'a mut Assignment,
    variable: Variable,
    committed: bool,
}

impl<'a> Trial<'a> {
    pub fn new(assignment: &'a mut Assignment, variable: Variable, word: String) -> Self {
        assignment.assign(variable.clone(), word);
        Self {
            assignment,
            variable,
            committed: false,
        }
    }

    /// Keep the trial value in the assignment
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Deref for Trial<'_> {
    type Target = Assignment;

    fn deref(&self) -> &Assignment {
        self.assignment
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Assignment {
        self.assignment
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.assignment.unassign(&self.variable);
        }
    }
}
