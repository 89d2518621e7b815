//! Node and arc consistency enforcement

use super::statistics::PropagationStatistics;
use super::DomainStore;
use crate::puzzle::{Crossword, Variable};
use std::collections::{BTreeSet, HashSet, VecDeque};
use thiserror::Error;

/// A variable was left without candidates, so the puzzle cannot be completed
/// from the current domains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("domain of {variable} is empty")]
pub struct DomainWipeout {
    pub variable: Variable,
}

/// Outcome of a propagation step
pub type PropagationResult = Result<(), DomainWipeout>;

/// Prunes a [`DomainStore`] using the length and overlap constraints of a puzzle
pub struct ConsistencyEngine<'a> {
    crossword: &'a Crossword,
    statistics: PropagationStatistics,
}

impl<'a> ConsistencyEngine<'a> {
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            statistics: PropagationStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &PropagationStatistics {
        &self.statistics
    }

    /// Remove every candidate whose length differs from its variable's length.
    ///
    /// All variables are filtered before the first emptied domain (if any) is
    /// reported.
    pub fn enforce_node_consistency(&mut self, domains: &mut DomainStore) -> PropagationResult {
        for variable in self.crossword.variables() {
            let removals: BTreeSet<String> = domains
                .get(variable)
                .iter()
                .filter(|word| word.chars().count() != variable.length)
                .cloned()
                .collect();

            let removed = domains.remove_all(variable, &removals);
            self.statistics.node_removals += removed;
            log::trace!("Node consistency removed {} words from {}", removed, variable);
        }

        match domains.empty_variable() {
            Some(variable) => {
                log::debug!("Node consistency emptied the domain of {}", variable);
                Err(DomainWipeout {
                    variable: variable.clone(),
                })
            }
            None => Ok(()),
        }
    }

    /// Make `x` arc-consistent with `y`: drop every word of x that no word of y
    /// agrees with at their shared cell. Returns whether x's domain changed.
    pub fn revise(&mut self, domains: &mut DomainStore, x: &Variable, y: &Variable) -> bool {
        let overlap = match self.crossword.overlap(x, y) {
            Some(overlap) => overlap,
            None => return false,
        };
        self.statistics.revisions += 1;

        let supported: HashSet<char> = domains
            .get(y)
            .iter()
            .filter_map(|wy| wy.chars().nth(overlap.second))
            .collect();

        let removals: BTreeSet<String> = domains
            .get(x)
            .iter()
            .filter(|wx| {
                wx.chars()
                    .nth(overlap.first)
                    .map_or(true, |letter| !supported.contains(&letter))
            })
            .cloned()
            .collect();

        if removals.is_empty() {
            return false;
        }

        let removed = domains.remove_all(x, &removals);
        self.statistics.arc_removals += removed;
        log::trace!("Revising {} against {} removed {} words", x, y, removed);
        removed > 0
    }

    /// AC-3 over the given arcs, or over every overlapping pair when `arcs` is `None`.
    ///
    /// Arcs are processed first in, first out. Fails as soon as a revision empties
    /// a domain.
    pub fn ac3(
        &mut self,
        domains: &mut DomainStore,
        arcs: Option<Vec<(Variable, Variable)>>,
    ) -> PropagationResult {
        let mut queue: VecDeque<(Variable, Variable)> = match arcs {
            Some(arcs) => arcs.into(),
            None => self.crossword.arcs().into(),
        };
        log::debug!("AC-3 starting with {} arcs", queue.len());

        while let Some((x, y)) = queue.pop_front() {
            if !self.revise(domains, &x, &y) {
                continue;
            }

            if domains.is_empty(&x) {
                log::debug!("AC-3 emptied the domain of {}", x);
                return Err(DomainWipeout { variable: x });
            }

            for z in self.crossword.neighbors(&x) {
                if *z != y {
                    queue.push_back((z.clone(), x.clone()));
                }
            }
        }

        match domains.empty_variable() {
            Some(variable) => Err(DomainWipeout {
                variable: variable.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::{parse_structure, parse_words, Direction};

    fn crossing(words: &[&str], across: usize, down: usize) -> Crossword {
        let words = words.iter().map(|w| w.to_string()).collect();
        Crossword::from_variables(
            3,
            3,
            vec![
                Variable::new(across, 0, Direction::Across, 3),
                Variable::new(0, down, Direction::Down, 3),
            ],
            words,
        )
        .unwrap()
    }

    fn sample_puzzle() -> Crossword {
        let structure = parse_structure("#___#\n#_##_\n#_##_\n#_##_\n#____\n").unwrap();
        let words = parse_words("one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten\n");
        Crossword::new(structure, words).unwrap()
    }

    fn assert_arc_consistent(crossword: &Crossword, domains: &DomainStore) {
        for (x, y) in crossword.arcs() {
            let overlap = crossword.overlap(&x, &y).unwrap();
            for wx in domains.get(&x) {
                assert!(
                    domains.get(&y).iter().any(|wy| overlap.agrees(wx, wy)),
                    "{} in {} has no support in {}",
                    wx,
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_node_consistency_filters_by_length() {
        let crossword = sample_puzzle();
        let mut domains = DomainStore::new(&crossword);
        let mut engine = ConsistencyEngine::new(&crossword);

        assert!(engine.enforce_node_consistency(&mut domains).is_ok());
        for (variable, domain) in domains.iter() {
            assert!(!domain.is_empty());
            assert!(domain.iter().all(|w| w.chars().count() == variable.length));
        }

        let five = Variable::new(0, 1, Direction::Down, 5);
        let expected: BTreeSet<String> =
            ["EIGHT", "SEVEN", "THREE"].iter().map(|w| w.to_string()).collect();
        assert_eq!(domains.get(&five), &expected);
        assert_eq!(engine.statistics().node_removals, 40 - domains.total_candidates());
    }

    #[test]
    fn test_node_consistency_reports_empty_domain() {
        let crossword = crossing(&["CATS", "DOGS"], 0, 0);
        let mut domains = DomainStore::new(&crossword);
        let mut engine = ConsistencyEngine::new(&crossword);

        let wipeout = engine.enforce_node_consistency(&mut domains).unwrap_err();
        assert_eq!(wipeout.variable, crossword.variables()[0]);
        assert_eq!(domains.total_candidates(), 0);
    }

    #[test]
    fn test_revise_removes_unsupported_words() {
        // Across row 0 and down column 1 share the across word's middle letter.
        let crossword = crossing(&["CAT", "DOG", "ART", "OAK"], 0, 1);
        let mut domains = DomainStore::new(&crossword);
        let mut engine = ConsistencyEngine::new(&crossword);
        let across = crossword.variables()[0].clone();
        let down = crossword.variables()[1].clone();

        // across[1] must equal down[0]; no word starts with R, so ART goes.
        assert!(engine.revise(&mut domains, &across, &down));
        let remaining: Vec<&String> = domains.get(&across).iter().collect();
        assert_eq!(remaining, vec!["CAT", "DOG", "OAK"]);

        assert!(!engine.revise(&mut domains, &across, &down));
    }

    #[test]
    fn test_revise_without_overlap_is_noop() {
        let words: BTreeSet<String> = ["CAT", "DOG"].iter().map(|w| w.to_string()).collect();
        let crossword = Crossword::from_variables(
            3,
            3,
            vec![
                Variable::new(0, 0, Direction::Across, 3),
                Variable::new(2, 0, Direction::Across, 3),
            ],
            words,
        )
        .unwrap();
        let mut domains = DomainStore::new(&crossword);
        let mut engine = ConsistencyEngine::new(&crossword);
        let (a, b) = (crossword.variables()[0].clone(), crossword.variables()[1].clone());

        assert!(!engine.revise(&mut domains, &a, &b));
        assert_eq!(engine.statistics().revisions, 0);
        assert_eq!(domains.len(&a), 2);
    }

    #[test]
    fn test_revise_treats_short_words_as_unmatched() {
        let crossword = crossing(&["CAT", "DOG", "AT"], 0, 2);
        let mut domains = DomainStore::new(&crossword);
        let mut engine = ConsistencyEngine::new(&crossword);
        let across = crossword.variables()[0].clone();
        let down = crossword.variables()[1].clone();

        // across[2] == down[0]; "AT" cannot reach index 2 and is removed
        // instead of panicking.
        engine.revise(&mut domains, &across, &down);
        assert!(!domains.get(&across).contains("AT"));
    }

    #[test]
    fn test_ac3_reaches_arc_consistency() {
        let crossword = sample_puzzle();
        let mut domains = DomainStore::new(&crossword);
        let mut engine = ConsistencyEngine::new(&crossword);

        engine.enforce_node_consistency(&mut domains).unwrap();
        engine.ac3(&mut domains, None).unwrap();
        assert_arc_consistent(&crossword, &domains);

        let five = Variable::new(0, 1, Direction::Down, 5);
        assert_eq!(domains.get(&five).iter().collect::<Vec<_>>(), vec!["SEVEN"]);
        assert!(engine.statistics().arc_removals > 0);
    }

    #[test]
    fn test_ac3_is_idempotent() {
        let crossword = sample_puzzle();
        let mut domains = DomainStore::new(&crossword);
        let mut engine = ConsistencyEngine::new(&crossword);

        engine.enforce_node_consistency(&mut domains).unwrap();
        engine.ac3(&mut domains, None).unwrap();
        let once = domains.clone();

        engine.ac3(&mut domains, None).unwrap();
        assert_eq!(domains, once);
    }

    #[test]
    fn test_ac3_detects_wipeout() {
        // across[1] == down[0]: middle letters A and O never start a word.
        let crossword = crossing(&["CAT", "DOG"], 0, 1);
        let mut domains = DomainStore::new(&crossword);
        let mut engine = ConsistencyEngine::new(&crossword);

        engine.enforce_node_consistency(&mut domains).unwrap();
        assert!(engine.ac3(&mut domains, None).is_err());
    }

    #[test]
    fn test_ac3_with_explicit_arcs() {
        let crossword = crossing(&["CAT", "DOG", "ART", "OAK"], 0, 1);
        let mut domains = DomainStore::new(&crossword);
        let mut engine = ConsistencyEngine::new(&crossword);
        let across = crossword.variables()[0].clone();
        let down = crossword.variables()[1].clone();

        // Only the down variable is revised against the across variable.
        engine
            .ac3(&mut domains, Some(vec![(down.clone(), across.clone())]))
            .unwrap();
        assert_eq!(domains.len(&across), 4);
        assert_eq!(domains.get(&down).iter().collect::<Vec<_>>(), vec!["ART", "OAK"]);
    }
}
