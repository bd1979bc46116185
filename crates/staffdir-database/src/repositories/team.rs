//! Team repository.

use sqlx::PgPool;

use staffdir_core::error::{AppError, ErrorKind};
use staffdir_core::result::AppResult;
use staffdir_entity::team::Team;

/// Repository for team reads.
#[derive(Debug, Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Create a new team repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all teams ordered by name ascending.
    pub async fn find_all_ordered(&self) -> AppResult<Vec<Team>> {
        sqlx::query_as::<_, Team>("SELECT id, name FROM teams ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list teams", e))
    }
}
