//! Diagnostic logging setup

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive
pub const LOG_ENV: &str = "CANVAS_INTERACT_LOG";

/// Filter used when `verbose` is requested
const VERBOSE_FILTER: &str = "debug";

/// Pick the filter directive: `verbose` wins, then the environment, then
/// the configured level.
pub fn filter_directive(verbose: bool, env_value: Option<&str>, configured: &str) -> String {
    if verbose {
        return VERBOSE_FILTER.to_string();
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => configured.to_string(),
    }
}

/// Install the global subscriber. Logs go to stderr so script output on
/// stdout stays clean.
pub fn setup_logging(verbose: bool, configured: &str) {
    let env_value = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(verbose, env_value.as_deref(), configured);

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("Invalid log filter '{}': {}", directive, e);
        EnvFilter::new(crate::domain::config::DEFAULT_LOG_LEVEL)
    });

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    // A subscriber may already be installed (tests)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}
