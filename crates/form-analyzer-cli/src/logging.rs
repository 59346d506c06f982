//! Logging setup

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Installs the global subscriber, writing to stderr
///
/// `RUST_LOG` wins over the verbosity flags when set. Calling this twice is
/// harmless; the second call is ignored.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(matches!(verbosity, Verbosity::Debug))
        .try_init();
}
