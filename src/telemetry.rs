//! Structured logging setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServerConfig;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides `server.log_level`. Outside development, output is JSON.
pub fn init(config: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }

    tracing::info!(
        level = %config.log_level,
        json = config.json_logs(),
        "Logging initialized"
    );
}
