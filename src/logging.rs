//! Logging setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Log level used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the global subscriber. Logs go to stderr; stdout is left for the
/// generation summary.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
