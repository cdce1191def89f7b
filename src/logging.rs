//! Diagnostic logging with tracing.
//!
//! User-facing output goes through [`crate::console::Log`]; this subscriber
//! only carries diagnostics (spawned commands, registry writes) to stderr.

use crate::config::LOG_ENV;
use tracing_subscriber::EnvFilter;

/// Filter used when `WIN_TOOLS_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,win_tools=debug"
    } else {
        "warn"
    }
}

/// Initialize tracing subscriber for logging
///
/// # Errors
/// Returns an error if a global subscriber is already installed
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
