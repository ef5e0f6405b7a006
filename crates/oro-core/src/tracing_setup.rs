//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// `ORO_LOG` (e.g. `ORO_LOG=oro_temporal=debug`) takes precedence over the
/// configured level. Idempotent: only the first call has any effect.
pub fn init_tracing(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.level));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_line_number(true))
                .try_init()
        };

        // Another subscriber may already be installed by the host application.
        if let Err(e) = result {
            tracing::debug!(error = %e, "tracing subscriber already set");
        }
    });
}
