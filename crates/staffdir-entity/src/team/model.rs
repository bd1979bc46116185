//! Team entity models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A team in the directory. Names are unique and sortable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    /// Unique team identifier.
    pub id: Uuid,
    /// Team name (unique).
    pub name: String,
}

/// Join entity associating a user with a team.
///
/// The `created_at` column defines the relation order used when listing a
/// user's team names.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamLink {
    /// Unique link identifier.
    pub id: Uuid,
    /// The linked user.
    pub user_id: Uuid,
    /// The linked team.
    pub team_id: Uuid,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
}
