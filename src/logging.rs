//! Logging setup
//!
//! Shared by every binary so `LOGGING_ENABLED`, `LOGGING_DEV_ONLY` and
//! `ENVIRONMENT` behave the same everywhere.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Default directive when `RUST_LOG` is unset
const DEFAULT_DIRECTIVE: &str = "ticket_service=info";

/// Initialize tracing/logging
pub fn init_tracing(config: &Config) {
    // Structured JSON outside development, human readable lines otherwise
    let (json_layer, text_layer) = if config.is_development() {
        (None, Some(tracing_subscriber::fmt::layer().with_writer(io::stderr)))
    } else {
        (Some(tracing_subscriber::fmt::layer().json().with_writer(io::stderr)), None)
    };

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn env_filter(config: &Config) -> EnvFilter {
    if config.logging_active() {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
    } else {
        EnvFilter::new("off")
    }
}
