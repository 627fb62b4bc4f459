//! Logging setup.
//!
//! Structured logging through `tracing`. `RUST_LOG` wins when set; otherwise
//! the configured level applies to this crate and the HTTP layer.

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(level: &str) -> String {
    format!(
        "portfolio_terminal_lib={level},portfolio_terminal={level},tower_http={level}",
        level = level
    )
}

fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(&config.level)))
        .unwrap_or_else(|_| EnvFilter::new(default_directives("info")))
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(config: &LoggingConfig) {
    let filter = env_filter(config);

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .compact(),
            )
            .init();
    }
}
