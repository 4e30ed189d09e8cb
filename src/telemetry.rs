//! Diagnostic logging.
//!
//! Logs go to stderr through `tracing-subscriber`. The filter comes from
//! `PDFMERGE_LOG` when set, otherwise from `--verbose`. The default only lets
//! warnings through, so a successful run prints nothing.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "PDFMERGE_LOG";

/// Build the log filter for this run.
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "pdfmerge=debug" } else { "warn" })
    })
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
