//! Diagnostic logging
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`
//! overrides the default filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter, or the verbose one with `-v`
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "rentlog=debug"
    } else {
        "rentlog=warn"
    }
}

/// Install the global subscriber for the command-line binary
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
