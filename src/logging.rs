//! Logger setup for the command line tool

use log::LevelFilter;

/// Initialize `env_logger` at the given level ("info", "debug", ...).
///
/// `RUST_LOG` takes precedence when set. Unknown levels fall back to `Info`.
pub fn init_logger(level: &str) {
    let level = level.parse().unwrap_or(LevelFilter::Info);

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second initialization (e.g. from tests) keeps the first logger.
    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
