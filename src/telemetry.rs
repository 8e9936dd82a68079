use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;
use crate::error::AppError;

/// Installs the global fmt subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init(config: &TelemetryConfig) -> Result<(), AppError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level).map_err(|err| {
            AppError::Telemetry(format!(
                "invalid log level/filter '{}': {}",
                config.log_level, err
            ))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| AppError::Telemetry(err.to_string()))
}
