//! Application builder — wires repositories, services, and the router, then
//! runs the server.

use std::future::IntoFuture;
use std::sync::Arc;

use staffdir_core::config::AppConfig;
use staffdir_core::error::AppError;
use staffdir_database::repositories::{TeamRepository, UserRepository};
use staffdir_database::DatabasePool;
use staffdir_service::DirectoryService;

use crate::router::build_router;
use crate::state::AppState;

/// Runs the StaffDir server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let team_repo = Arc::new(TeamRepository::new(db.pool().clone()));
    let directory = Arc::new(DirectoryService::new(user_repo, team_repo));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = AppState {
        config: Arc::new(config),
        db,
        directory,
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("StaffDir listening on http://{addr}");

    let (signal_tx, signal_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signal_tx.send(());
        })
        .into_future();
    tokio::pin!(server);

    // In-flight requests drain for at most the configured grace period
    // after the shutdown signal.
    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))
        }
        _ = async {
            let _ = signal_rx.await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!("Grace period elapsed before connections drained, exiting");
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
