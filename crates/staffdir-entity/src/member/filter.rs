//! The validated directory filter specification.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use staffdir_core::types::pagination::PageRequest;
use staffdir_core::types::sorting::SortOrder;

use crate::membership::MemberRole;

/// Filter token meaning "user has no team links", distinct from any real
/// team name.
pub const NO_TEAM_SENTINEL: &str = "NO_TEAM";

/// Legacy spelling of the sentinel still sent by older clients.
pub const NO_TEAM_SENTINEL_LEGACY: &str = "_NO_TEAM_";

/// Check whether a team token is the no-team sentinel (either spelling).
pub fn is_no_team_token(token: &str) -> bool {
    token == NO_TEAM_SENTINEL || token == NO_TEAM_SENTINEL_LEGACY
}

/// Last-login period filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LastLoginPeriod {
    /// Logged in within the last day.
    #[serde(rename = "24h")]
    Day,
    /// Logged in within the last 7 days.
    #[serde(rename = "7d")]
    Week,
    /// Logged in within the last 30 days.
    #[serde(rename = "30d")]
    Month,
    /// Never logged in (`last_login_at IS NULL`).
    #[serde(rename = "never")]
    Never,
}

impl LastLoginPeriod {
    /// Parse from a query-string token. Unknown tokens impose no filter.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "24h" => Some(Self::Day),
            "7d" => Some(Self::Week),
            "30d" => Some(Self::Month),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    /// The `last_login_at >= cutoff` bound for the timed variants, relative
    /// to `now`. `Never` has no cutoff.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Day => Some(now - Duration::days(1)),
            Self::Week => Some(now - Duration::days(7)),
            Self::Month => Some(now - Duration::days(30)),
            Self::Never => None,
        }
    }
}

/// Sort key for the directory listing.
///
/// All keys except `Role` are pushed to the store; `Role` is a derived field
/// and triggers an in-memory re-sort of the mapped page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemberSortKey {
    /// Sort by display name.
    Name,
    /// Sort by email.
    Email,
    /// Sort by last login time.
    LastLoginAt,
    /// Sort by creation time.
    CreatedAt,
    /// Sort by update time.
    UpdatedAt,
    /// Sort by derived effective role (in-memory).
    Role,
}

impl MemberSortKey {
    /// Parse from a query-string token. Unknown tokens disable store-level
    /// sorting rather than erroring (preserved client contract).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "lastLoginAt" => Some(Self::LastLoginAt),
            "createdAt" => Some(Self::CreatedAt),
            "updatedAt" => Some(Self::UpdatedAt),
            "role" => Some(Self::Role),
            _ => None,
        }
    }

    /// The `users` column this key sorts on, or `None` for the derived
    /// `role` key which cannot be pushed to the store.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            Self::Name => Some("name"),
            Self::Email => Some("email"),
            Self::LastLoginAt => Some("last_login_at"),
            Self::CreatedAt => Some("created_at"),
            Self::UpdatedAt => Some("updated_at"),
            Self::Role => None,
        }
    }
}

/// A validated directory filter request.
///
/// Built by the HTTP layer from query parameters; consumed by the query
/// builder and the result mapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberFilter {
    /// Restrict to memberships whose role is in this set; empty means no
    /// restriction.
    pub roles: Vec<MemberRole>,
    /// `Some(true)` restricts to guest memberships. `Some(false)` and `None`
    /// impose no restriction (preserved client contract).
    pub is_guest: Option<bool>,
    /// Team-name tokens, possibly including the no-team sentinel; empty
    /// means no restriction.
    pub teams: Vec<String>,
    /// Free-text search over name and email.
    pub search: Option<String>,
    /// Last-login period restriction.
    pub last_login: Option<LastLoginPeriod>,
    /// Sort key; `None` means no store-level sort.
    pub sort: Option<MemberSortKey>,
    /// Sort direction.
    pub order: SortOrder,
    /// Pagination.
    pub page: PageRequest,
}

impl Default for MemberFilter {
    fn default() -> Self {
        Self {
            roles: Vec::new(),
            is_guest: None,
            teams: Vec::new(),
            search: None,
            last_login: None,
            sort: Some(MemberSortKey::Name),
            order: SortOrder::Asc,
            page: PageRequest::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_login_period_parse() {
        assert_eq!(LastLoginPeriod::parse("24h"), Some(LastLoginPeriod::Day));
        assert_eq!(LastLoginPeriod::parse("7d"), Some(LastLoginPeriod::Week));
        assert_eq!(LastLoginPeriod::parse("30d"), Some(LastLoginPeriod::Month));
        assert_eq!(LastLoginPeriod::parse("never"), Some(LastLoginPeriod::Never));
        assert_eq!(LastLoginPeriod::parse("90d"), None);
        assert_eq!(LastLoginPeriod::parse(""), None);
    }

    #[test]
    fn test_last_login_cutoff() {
        let now = Utc::now();
        assert_eq!(
            LastLoginPeriod::Day.cutoff(now),
            Some(now - Duration::days(1))
        );
        assert_eq!(
            LastLoginPeriod::Month.cutoff(now),
            Some(now - Duration::days(30))
        );
        assert_eq!(LastLoginPeriod::Never.cutoff(now), None);
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!(MemberSortKey::parse("name"), Some(MemberSortKey::Name));
        assert_eq!(
            MemberSortKey::parse("lastLoginAt"),
            Some(MemberSortKey::LastLoginAt)
        );
        assert_eq!(MemberSortKey::parse("role"), Some(MemberSortKey::Role));
        // Unknown keys fall back to no store-level sort.
        assert_eq!(MemberSortKey::parse("shoe_size"), None);
    }

    #[test]
    fn test_role_sort_has_no_column() {
        assert_eq!(MemberSortKey::Role.column(), None);
        assert_eq!(MemberSortKey::LastLoginAt.column(), Some("last_login_at"));
    }

    #[test]
    fn test_no_team_token() {
        assert!(is_no_team_token("NO_TEAM"));
        assert!(is_no_team_token("_NO_TEAM_"));
        assert!(!is_no_team_token("Alpha"));
    }
}
