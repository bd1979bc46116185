//! Membership entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::MemberRole;

/// A membership granting a user a role and guest status, independent of team.
///
/// A user may hold multiple memberships; users without any membership are
/// excluded from directory listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    /// Unique membership identifier.
    pub id: Uuid,
    /// The user this membership belongs to.
    pub user_id: Uuid,
    /// Role granted by this membership.
    pub role: MemberRole,
    /// Whether this membership is a guest membership.
    pub is_guest: bool,
    /// When the membership was created.
    pub created_at: DateTime<Utc>,
}
