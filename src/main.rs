use std::sync::Arc;

use bvl_feedback::adapters::http::{app_router, with_server_layers, AuthState, FeedbackAppState};
use bvl_feedback::adapters::mysql::{self, MySqlFeedbackThreadRepository};
use bvl_feedback::adapters::JwtSessionValidator;
use bvl_feedback::config::AppConfig;
use bvl_feedback::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    telemetry::init(&config.server);
    config.validate()?;

    let pool = mysql::connect(&config.database).await?;
    if config.database.run_migrations {
        tracing::info!("Running database migrations");
        mysql::run_migrations(&pool).await?;
    }

    let state = FeedbackAppState::new(Arc::new(MySqlFeedbackThreadRepository::new(pool.clone())));
    let validator: AuthState = Arc::new(JwtSessionValidator::new(&config.auth));
    let app = with_server_layers(app_router(state, validator), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "bvl-feedback listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
