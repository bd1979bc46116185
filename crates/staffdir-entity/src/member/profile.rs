//! The externally visible, flattened member shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::membership::{MemberRole, Membership};
use crate::user::UserWithRelations;

/// A directory member: a user flattened together with its derived role,
/// guest flag, and team names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberProfile {
    /// User identifier.
    pub id: Uuid,
    /// Display name (optional).
    pub name: Option<String>,
    /// Email address.
    pub email: String,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
    /// Effective role: the highest-priority role across memberships.
    /// `None` when the user has no memberships.
    pub role: Option<MemberRole>,
    /// True if any membership is a guest membership.
    pub is_guest: bool,
    /// Linked team names, in relation order.
    pub teams: Vec<String>,
}

impl MemberProfile {
    /// Flatten a user and its relations into the external member shape.
    pub fn from_relations(record: UserWithRelations) -> Self {
        let role = highest_priority_role(&record.memberships);
        let is_guest = record.memberships.iter().any(|m| m.is_guest);

        Self {
            id: record.user.id,
            name: record.user.name,
            email: record.user.email,
            last_login_at: record.user.last_login_at,
            role,
            is_guest,
            teams: record.teams,
        }
    }
}

/// Derive the effective role: the highest-priority role across memberships
/// (OWNER > MEMBER > VIEWER), or `None` when there are no memberships.
pub fn highest_priority_role(memberships: &[Membership]) -> Option<MemberRole> {
    memberships
        .iter()
        .map(|m| m.role)
        .min_by_key(MemberRole::priority)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;

    fn membership(role: MemberRole, is_guest: bool) -> Membership {
        Membership {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            role,
            is_guest,
            created_at: Utc::now(),
        }
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            name: Some("Kaori".to_string()),
            email: "kaori@example.com".to_string(),
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_highest_priority_role() {
        let ms = vec![
            membership(MemberRole::Viewer, false),
            membership(MemberRole::Owner, false),
            membership(MemberRole::Member, false),
        ];
        assert_eq!(highest_priority_role(&ms), Some(MemberRole::Owner));

        let ms = vec![
            membership(MemberRole::Viewer, false),
            membership(MemberRole::Member, false),
        ];
        assert_eq!(highest_priority_role(&ms), Some(MemberRole::Member));

        assert_eq!(highest_priority_role(&[]), None);
    }

    #[test]
    fn test_guest_if_any_membership_is_guest() {
        let record = UserWithRelations {
            user: user(),
            memberships: vec![
                membership(MemberRole::Owner, false),
                membership(MemberRole::Viewer, true),
            ],
            teams: vec![],
        };
        let profile = MemberProfile::from_relations(record);
        assert!(profile.is_guest);
        assert_eq!(profile.role, Some(MemberRole::Owner));
    }

    #[test]
    fn test_teams_keep_relation_order() {
        let record = UserWithRelations {
            user: user(),
            memberships: vec![membership(MemberRole::Member, false)],
            teams: vec!["Platform".to_string(), "Alpha".to_string()],
        };
        let profile = MemberProfile::from_relations(record);
        assert_eq!(profile.teams, vec!["Platform", "Alpha"]);
    }

    #[test]
    fn test_no_memberships_maps_to_null_role() {
        let record = UserWithRelations {
            user: user(),
            memberships: vec![],
            teams: vec![],
        };
        let profile = MemberProfile::from_relations(record);
        assert_eq!(profile.role, None);
        assert!(!profile.is_guest);
    }
}
