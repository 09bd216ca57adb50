//! Tracing setup
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`
//! overrides the default filter.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initialize the global tracing subscriber once per process
///
/// Defaults to warnings only; `verbose` raises the crate's level to info.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let default_level = if verbose { "info" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("finance_tracker={}", default_level)));

        // A subscriber may already be installed by an embedding application
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init_tracing(false);
        super::init_tracing(true);
    }
}
