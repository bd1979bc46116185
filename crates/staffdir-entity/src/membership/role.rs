//! Membership role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a membership can grant.
///
/// Priority ordering is fixed and total: OWNER > MEMBER > VIEWER. A user's
/// effective role is the highest-priority role across all memberships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberRole {
    /// Full control of a team.
    Owner,
    /// Regular team member.
    Member,
    /// Read-only access.
    Viewer,
}

impl MemberRole {
    /// Return the priority number (lower wins).
    pub fn priority(&self) -> u8 {
        match self {
            Self::Owner => 1,
            Self::Member => 2,
            Self::Viewer => 3,
        }
    }

    /// Check if this role outranks the other.
    pub fn outranks(&self, other: &MemberRole) -> bool {
        self.priority() < other.priority()
    }

    /// Return the role as an uppercase string (the wire representation).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Member => "MEMBER",
            Self::Viewer => "VIEWER",
        }
    }
}

impl fmt::Display for MemberRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MemberRole {
    type Err = staffdir_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "OWNER" => Ok(Self::Owner),
            "MEMBER" => Ok(Self::Member),
            "VIEWER" => Ok(Self::Viewer),
            _ => Err(staffdir_core::AppError::validation(format!(
                "Invalid member role: '{s}'. Expected one of: OWNER, MEMBER, VIEWER"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        assert!(MemberRole::Owner.outranks(&MemberRole::Member));
        assert!(MemberRole::Member.outranks(&MemberRole::Viewer));
        assert!(MemberRole::Owner.outranks(&MemberRole::Viewer));
        assert!(!MemberRole::Viewer.outranks(&MemberRole::Owner));
        assert!(!MemberRole::Member.outranks(&MemberRole::Member));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("OWNER".parse::<MemberRole>().unwrap(), MemberRole::Owner);
        assert_eq!("viewer".parse::<MemberRole>().unwrap(), MemberRole::Viewer);
        assert!("admin".parse::<MemberRole>().is_err());
    }
}
