//! Log output for the CLI
//!
//! Logs go to stderr so they never mix with JSON on stdout. `CML_LOG` takes an `EnvFilter`
//! directive and wins over the configured level.

use cml_config::LogLevel;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CML_LOG";

pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("log subscriber already installed");
    }
}
