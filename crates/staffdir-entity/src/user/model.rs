//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::membership::Membership;

/// A user in the directory.
///
/// Users are created and updated elsewhere; this service only reads them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name (optional).
    pub name: Option<String>,
    /// Email address.
    pub email: String,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A user together with the joined relations the directory needs:
/// memberships and linked team names (in relation order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithRelations {
    /// The user row.
    pub user: User,
    /// All memberships held by the user.
    pub memberships: Vec<Membership>,
    /// Linked team names, ordered by link creation.
    pub teams: Vec<String>,
}
