//! Response DTOs.
//!
//! The wire format is camelCase, matching the existing frontend contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use staffdir_entity::member::MemberProfile;
use staffdir_entity::team::Team;
use staffdir_entity::user::UserWithRelations;

/// A directory member as returned by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: String,
    /// Last login time.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Effective role name, or `null` without memberships.
    pub role: Option<String>,
    /// Whether any membership is a guest membership.
    pub is_guest: bool,
    /// Linked team names.
    pub teams: Vec<String>,
}

impl From<MemberProfile> for MemberResponse {
    fn from(profile: MemberProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            last_login_at: profile.last_login_at,
            role: profile.role.map(|r| r.to_string()),
            is_guest: profile.is_guest,
            teams: profile.teams,
        }
    }
}

/// A team as returned by `GET /users/teams`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResponse {
    /// Team ID.
    pub id: Uuid,
    /// Team name.
    pub name: String,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
        }
    }
}

/// A membership inside the single-user detail response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    /// Role granted by this membership.
    pub role: String,
    /// Whether it is a guest membership.
    pub is_guest: bool,
}

/// Full detail for `GET /users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: String,
    /// Last login time.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// All memberships held by the user.
    pub memberships: Vec<MembershipResponse>,
    /// Linked team names.
    pub teams: Vec<String>,
}

impl From<UserWithRelations> for UserDetailResponse {
    fn from(record: UserWithRelations) -> Self {
        Self {
            id: record.user.id,
            name: record.user.name,
            email: record.user.email,
            last_login_at: record.user.last_login_at,
            created_at: record.user.created_at,
            updated_at: record.user.updated_at,
            memberships: record
                .memberships
                .into_iter()
                .map(|m| MembershipResponse {
                    role: m.role.to_string(),
                    is_guest: m.is_guest,
                })
                .collect(),
            teams: record.teams,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Whether the database answered.
    pub database: bool,
}
