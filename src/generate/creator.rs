//! Solve driver: node consistency, AC-3, then backtracking search

use super::SolveReport;
use crate::config::Settings;
use crate::csp::{
    BacktrackingSearch, ConsistencyEngine, DomainStore, PropagationResult, SearchOptions,
    Solution, SolveStatistics,
};
use crate::puzzle::{load_crossword, Crossword};
use anyhow::{Context, Result};
use std::time::Instant;

/// Fills one crossword puzzle
pub struct CrosswordCreator {
    crossword: Crossword,
    options: SearchOptions,
    domains: DomainStore,
    statistics: SolveStatistics,
}

impl CrosswordCreator {
    /// Create a new creator for a loaded puzzle
    pub fn new(crossword: Crossword, options: SearchOptions) -> Self {
        let domains = DomainStore::new(&crossword);
        let statistics = Self::fresh_statistics(&crossword);

        Self {
            crossword,
            options,
            domains,
            statistics,
        }
    }

    /// Create a creator from the files and solver options named in `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let crossword = load_crossword(&settings.input.structure_file, &settings.input.words_file)
            .context("Failed to load puzzle")?;

        Ok(Self::new(crossword, SearchOptions::from(&settings.solver)))
    }

    pub fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    /// Domains as left by the most recent [`propagate`](Self::propagate) or [`solve`](Self::solve)
    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub fn statistics(&self) -> &SolveStatistics {
        &self.statistics
    }

    /// Reset the domains to the full word list and run node consistency followed
    /// by AC-3 over every arc.
    pub fn propagate(&mut self) -> PropagationResult {
        self.domains = DomainStore::new(&self.crossword);
        self.statistics = Self::fresh_statistics(&self.crossword);

        let mut engine = ConsistencyEngine::new(&self.crossword);
        let result = engine
            .enforce_node_consistency(&mut self.domains)
            .and_then(|()| engine.ac3(&mut self.domains, None));
        self.statistics.propagation = engine.statistics().clone();

        if let Err(wipeout) = &result {
            self.statistics.wiped_out = Some(wipeout.variable.clone());
        }
        result
    }

    /// Fill the puzzle.
    ///
    /// Search is skipped entirely when propagation already proves there is no
    /// solution.
    pub fn solve(&mut self) -> Solution {
        log::info!(
            "Solving {} variables with {} candidate words",
            self.crossword.variables().len(),
            self.crossword.words().len()
        );

        if let Err(wipeout) = self.propagate() {
            log::info!("No solution: {}", wipeout);
            return Solution::NoSolution;
        }
        log::debug!(
            "Propagation left {} candidates across all domains",
            self.domains.total_candidates()
        );

        self.statistics.search_invoked = true;
        let mut search = BacktrackingSearch::new(&self.crossword, self.domains.clone(), self.options);
        let solution = search.run();
        self.statistics.search = search.statistics().clone();

        if solution.is_solved() {
            log::info!("Found a solution after {} assignments", self.statistics.search.assignments_tried);
        } else {
            log::info!("Search exhausted after {} backtracks", self.statistics.search.backtracks);
        }
        solution
    }

    /// Solve and package the outcome with its statistics and timing
    pub fn solve_report(&mut self) -> SolveReport {
        let start_time = Instant::now();
        let solution = self.solve();
        let solve_time = start_time.elapsed();

        SolveReport::new(solution, self.statistics.clone(), solve_time)
    }

    fn fresh_statistics(crossword: &Crossword) -> SolveStatistics {
        SolveStatistics {
            variable_count: crossword.variables().len(),
            word_count: crossword.words().len(),
            ..SolveStatistics::default()
        }
    }
}
