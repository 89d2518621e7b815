//! Constraint satisfaction engine: domains, propagation and search

pub mod assignment;
pub mod consistency;
pub mod domains;
pub mod search;
pub mod solution;
pub mod statistics;

pub use assignment::{AssignedWord, Assignment};
pub use consistency::{ConsistencyEngine, DomainWipeout, PropagationResult};
pub use domains::DomainStore;
pub use search::{consistent, BacktrackingSearch, SearchOptions};
pub use solution::Solution;
pub use statistics::{PropagationStatistics, SearchStatistics, SolveStatistics};
