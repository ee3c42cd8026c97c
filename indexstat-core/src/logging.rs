use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "INDEXSTAT_LOG";

/// Initialize the logging system.
///
/// - Filtering comes from `INDEXSTAT_LOG` (defaults to "info" if not set)
/// - Events go to stderr so stdout stays free for the report
/// - Human-readable output on a terminal, flattened JSON otherwise
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    if io::stderr().is_terminal() {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init();
    }
}
