//! In-memory role sort for the mapped page.

use staffdir_core::types::sorting::SortOrder;
use staffdir_entity::member::MemberProfile;

/// Re-sort a mapped page by role *name*, treating a missing role as the
/// empty string.
///
/// The store cannot sort by the derived role field, and the comparison is
/// a plain string compare over the uppercase role names — so ascending
/// yields `MEMBER, OWNER, VIEWER`, not the numeric priority order used for
/// role derivation. This mirrors the behavior existing clients depend on.
pub fn sort_by_role_name(profiles: &mut [MemberProfile], order: SortOrder) {
    profiles.sort_by(|a, b| {
        let role_a = a.role.map(|r| r.as_str()).unwrap_or("");
        let role_b = b.role.map(|r| r.as_str()).unwrap_or("");
        match order {
            SortOrder::Asc => role_a.cmp(role_b),
            SortOrder::Desc => role_b.cmp(role_a),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdir_entity::membership::MemberRole;
    use uuid::Uuid;

    fn profile(role: Option<MemberRole>) -> MemberProfile {
        MemberProfile {
            id: Uuid::new_v4(),
            name: None,
            email: "x@example.com".to_string(),
            last_login_at: None,
            role,
            is_guest: false,
            teams: vec![],
        }
    }

    fn roles(profiles: &[MemberProfile]) -> Vec<Option<MemberRole>> {
        profiles.iter().map(|p| p.role).collect()
    }

    #[test]
    fn test_ascending_is_lexical_not_priority() {
        let mut page = vec![
            profile(Some(MemberRole::Viewer)),
            profile(Some(MemberRole::Owner)),
            profile(Some(MemberRole::Member)),
        ];
        sort_by_role_name(&mut page, SortOrder::Asc);
        assert_eq!(
            roles(&page),
            vec![
                Some(MemberRole::Member),
                Some(MemberRole::Owner),
                Some(MemberRole::Viewer)
            ]
        );
    }

    #[test]
    fn test_descending() {
        let mut page = vec![
            profile(Some(MemberRole::Member)),
            profile(Some(MemberRole::Viewer)),
            profile(Some(MemberRole::Owner)),
        ];
        sort_by_role_name(&mut page, SortOrder::Desc);
        assert_eq!(
            roles(&page),
            vec![
                Some(MemberRole::Viewer),
                Some(MemberRole::Owner),
                Some(MemberRole::Member)
            ]
        );
    }

    #[test]
    fn test_missing_role_sorts_as_empty_string() {
        let mut page = vec![profile(Some(MemberRole::Member)), profile(None)];
        sort_by_role_name(&mut page, SortOrder::Asc);
        assert_eq!(roles(&page), vec![None, Some(MemberRole::Member)]);

        sort_by_role_name(&mut page, SortOrder::Desc);
        assert_eq!(roles(&page), vec![Some(MemberRole::Member), None]);
    }
}
