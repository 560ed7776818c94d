//! Structured logging setup
//!
//! Installs a global `tracing` subscriber with an env filter and either a
//! human-readable or a JSON formatter. `RUST_LOG` takes precedence over the
//! configured level.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::FishcastError;
use crate::config::LoggingConfig;

/// Build the filter for the given level, letting `RUST_LOG` override it
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(format!("fishcast={level}"))
        .map_err(|e| FishcastError::config(format!("Invalid log level '{level}': {e}")).into())
}

/// Install the global subscriber.
///
/// Returns an error instead of panicking when a subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    config.validate()?;

    let registry = tracing_subscriber::registry().with(build_filter(&config.level)?);

    let installed = match config.format.as_str() {
        "json" => registry
            .with(fmt::layer().with_target(true).json())
            .try_init(),
        _ => registry
            .with(fmt::layer().with_target(true).pretty())
            .try_init(),
    };
    installed.map_err(|e| FishcastError::config(format!("Failed to install logger: {e}")))?;

    info!(
        version = crate::VERSION,
        log.level = %config.level,
        log.format = %config.format,
        "fishcast logging initialised"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_known_levels() {
        for level in ["error", "warn", "info", "debug", "trace"] {
            assert!(build_filter(level).is_ok(), "{level}");
        }
    }

    #[test]
    fn test_init_rejects_bad_format() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "xml".to_string(),
        };
        assert!(init(&config).is_err());
    }

    #[test]
    fn test_second_init_is_an_error() {
        let config = LoggingConfig::default();
        // Another test binary thread may have installed a subscriber already
        let _ = init(&config);
        assert!(init(&config).is_err());
    }
}
