//! Configuration management for the crossword solver

pub mod settings;

pub use settings::{
    CliOverrides, Inference, InputConfig, LoggingConfig, OutputConfig, OutputFormat, Settings,
    SolverConfig, ValueOrdering, VariableOrdering,
};
