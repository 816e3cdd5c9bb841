//! Logging initialisation.
//!
//! Logs go to stderr so the interactive prompts on stdout stay clean.
//! `RUST_LOG` overrides the configured level.

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;
use crate::error::CryptError;

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if a subscriber has already been set.
pub fn init(log_level: &str, format: LogFormat) -> Result<(), CryptError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_target(false).try_init(),
    };
    result.map_err(|e| CryptError::Config(format!("failed to initialise tracing subscriber: {e}")))
}
