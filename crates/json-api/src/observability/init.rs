//! Observability lifecycle.

use tracing::info;

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, settings};

/// Apply runtime settings and install the global tracing subscriber.
pub(crate) fn init(config: &ServerConfig) -> Result<(), ObservabilityError> {
    settings::apply_runtime_config(config);

    logging::init_subscriber(config)?;

    info!(
        log_format = ?config.logging.log_format,
        metrics_enabled = config.observability.metrics_enabled,
        slow_request_threshold_ms = config.observability.slow_request_threshold_ms,
        "observability initialised"
    );

    Ok(())
}
