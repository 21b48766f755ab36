use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Initialize the logging system with environment-based filtering
///
/// - Uses `RUST_LOG` for level filtering (defaults to "info" if not set)
/// - Writes to stderr so reports printed on stdout stay machine-readable
/// - JSON output flattens event fields like the rest of our structured logs
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = match format {
        LogFormat::Json => builder.json().flatten_event(true).try_init(),
        LogFormat::Pretty => builder.compact().with_target(false).try_init(),
    };
}

pub fn default_log_format() -> LogFormat {
    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}
