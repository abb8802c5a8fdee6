//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TODO_LOG=debug`.
pub const LOG_ENV: &str = "TODO_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Stdout stays reserved for command output.
///
/// Failing to install a subscriber never aborts the command.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
