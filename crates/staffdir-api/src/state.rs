//! Application state shared across all handlers.

use std::sync::Arc;

use staffdir_core::config::AppConfig;
use staffdir_database::DatabasePool;
use staffdir_service::DirectoryService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (for health checks).
    pub db: DatabasePool,
    /// Directory read service.
    pub directory: Arc<DirectoryService>,
}
