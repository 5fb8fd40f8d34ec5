//! Logging utilities
//!
//! Provides logging setup and configuration.

use env_logger::{Builder, Env};

/// Setup logging for the login service.
///
/// `RUST_LOG` wins over the configured default filter.
pub fn setup_logging(default_level: &str) {
    let env = Env::default().default_filter_or(default_level);
    // A second call, e.g. from tests, keeps the first logger.
    let _ = Builder::from_env(env).format_timestamp_millis().try_init();
}
