//! Predicate expression tree for the directory listing.
//!
//! A filter request becomes a small tagged-variant tree (AND/OR over
//! field and EXISTS nodes) that is rendered to SQL against the `users`
//! table aliased as `u`. Rendering appends `$n` placeholders and pushes
//! the corresponding values onto a bind list, so the same tree serves
//! both the count and the page-fetch queries.

use chrono::{DateTime, Utc};

use staffdir_core::types::filter::FilterValue;
use staffdir_entity::member::filter::{is_no_team_token, LastLoginPeriod, MemberFilter};
use staffdir_entity::membership::MemberRole;

/// A filter predicate over directory users.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// The user has a single membership satisfying every listed
    /// condition. With no conditions this is the bare existence check;
    /// users without memberships are never listed.
    MembershipMatching {
        /// Restrict the membership's role to this set when non-empty.
        roles: Vec<MemberRole>,
        /// Require the membership to be a guest membership.
        guest_only: bool,
    },
    /// The user has zero team links.
    HasNoTeam,
    /// The user is linked to a team whose name is in the set.
    TeamNameIn(Vec<String>),
    /// The user's name contains the fragment (case-sensitive).
    NameContains(String),
    /// The user's email contains the fragment (case-sensitive).
    EmailContains(String),
    /// The user last logged in at or after the cutoff.
    LastLoginAfter(DateTime<Utc>),
    /// The user has never logged in.
    NeverLoggedIn,
    /// All sub-predicates hold.
    And(Vec<Predicate>),
    /// At least one sub-predicate holds.
    Or(Vec<Predicate>),
}

impl Predicate {
    /// Build the predicate tree for a filter request.
    ///
    /// `now` anchors the last-login cutoffs so callers (and tests) control
    /// the clock. The base membership clause is always present; role and
    /// guest conditions fold into it so a single membership row must
    /// satisfy both. Other active filters are AND-combined. Only the team
    /// sentinel/real-name combination introduces an OR branch, alongside
    /// the name/email search.
    pub fn from_filter(filter: &MemberFilter, now: DateTime<Utc>) -> Self {
        // `is_guest: Some(false)` imposes no restriction, matching the
        // existing client contract.
        let mut clauses = vec![Self::MembershipMatching {
            roles: filter.roles.clone(),
            guest_only: filter.is_guest == Some(true),
        }];

        let wants_no_team = filter.teams.iter().any(|t| is_no_team_token(t));
        let real_teams: Vec<String> = filter
            .teams
            .iter()
            .filter(|t| !is_no_team_token(t))
            .cloned()
            .collect();
        match (wants_no_team, real_teams.is_empty()) {
            (true, false) => clauses.push(Self::Or(vec![
                Self::HasNoTeam,
                Self::TeamNameIn(real_teams),
            ])),
            (true, true) => clauses.push(Self::HasNoTeam),
            (false, false) => clauses.push(Self::TeamNameIn(real_teams)),
            (false, true) => {}
        }

        if let Some(search) = filter.search.as_deref() {
            if !search.is_empty() {
                clauses.push(Self::Or(vec![
                    Self::NameContains(search.to_string()),
                    Self::EmailContains(search.to_string()),
                ]));
            }
        }

        match filter.last_login {
            Some(LastLoginPeriod::Never) => clauses.push(Self::NeverLoggedIn),
            Some(period) => {
                if let Some(cutoff) = period.cutoff(now) {
                    clauses.push(Self::LastLoginAfter(cutoff));
                }
            }
            None => {}
        }

        Self::And(clauses)
    }

    /// Render this predicate into `sql`, pushing bind values onto `binds`.
    /// Placeholders are numbered from the current length of `binds`.
    pub fn render(&self, sql: &mut String, binds: &mut Vec<FilterValue>) {
        match self {
            Self::MembershipMatching { roles, guest_only } => {
                let mut inner = String::from("SELECT 1 FROM memberships m WHERE m.user_id = u.id");
                if !roles.is_empty() {
                    let tokens = roles.iter().map(|r| r.as_str().to_string()).collect();
                    binds.push(FilterValue::StringList(tokens));
                    inner.push_str(&format!(" AND m.role = ANY(${}::member_role[])", binds.len()));
                }
                if *guest_only {
                    inner.push_str(" AND m.is_guest");
                }
                sql.push_str(&format!("EXISTS ({inner})"));
            }
            Self::HasNoTeam => {
                sql.push_str("NOT EXISTS (SELECT 1 FROM team_links tl WHERE tl.user_id = u.id)");
            }
            Self::TeamNameIn(names) => {
                binds.push(FilterValue::StringList(names.clone()));
                sql.push_str(&format!(
                    "EXISTS (SELECT 1 FROM team_links tl \
                     JOIN teams t ON t.id = tl.team_id \
                     WHERE tl.user_id = u.id AND t.name = ANY(${}))",
                    binds.len()
                ));
            }
            Self::NameContains(fragment) => {
                binds.push(FilterValue::String(format!("%{fragment}%")));
                sql.push_str(&format!("u.name LIKE ${}", binds.len()));
            }
            Self::EmailContains(fragment) => {
                binds.push(FilterValue::String(format!("%{fragment}%")));
                sql.push_str(&format!("u.email LIKE ${}", binds.len()));
            }
            Self::LastLoginAfter(cutoff) => {
                binds.push(FilterValue::Timestamp(*cutoff));
                sql.push_str(&format!("u.last_login_at >= ${}", binds.len()));
            }
            Self::NeverLoggedIn => {
                sql.push_str("u.last_login_at IS NULL");
            }
            Self::And(parts) => Self::render_joined(parts, " AND ", sql, binds),
            Self::Or(parts) => Self::render_joined(parts, " OR ", sql, binds),
        }
    }

    fn render_joined(
        parts: &[Predicate],
        separator: &str,
        sql: &mut String,
        binds: &mut Vec<FilterValue>,
    ) {
        if parts.is_empty() {
            sql.push_str("TRUE");
            return;
        }
        if parts.len() == 1 {
            parts[0].render(sql, binds);
            return;
        }
        sql.push('(');
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                sql.push_str(separator);
            }
            part.render(sql, binds);
        }
        sql.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdir_core::types::pagination::PageRequest;
    use staffdir_core::types::sorting::SortOrder;

    fn render(predicate: &Predicate) -> (String, Vec<FilterValue>) {
        let mut sql = String::new();
        let mut binds = Vec::new();
        predicate.render(&mut sql, &mut binds);
        (sql, binds)
    }

    fn empty_filter() -> MemberFilter {
        MemberFilter {
            sort: None,
            order: SortOrder::Asc,
            page: PageRequest::default(),
            ..MemberFilter::default()
        }
    }

    #[test]
    fn test_no_filters_is_bare_membership_check() {
        let predicate = Predicate::from_filter(&empty_filter(), Utc::now());
        let (sql, binds) = render(&predicate);
        assert_eq!(
            sql,
            "EXISTS (SELECT 1 FROM memberships m WHERE m.user_id = u.id)"
        );
        assert!(binds.is_empty());
    }

    #[test]
    fn test_role_filter_binds_role_list() {
        let filter = MemberFilter {
            roles: vec![MemberRole::Owner, MemberRole::Viewer],
            ..empty_filter()
        };
        let (sql, binds) = render(&Predicate::from_filter(&filter, Utc::now()));
        assert!(sql.contains("m.role = ANY($1::member_role[])"));
        assert_eq!(
            binds,
            vec![FilterValue::StringList(vec![
                "OWNER".to_string(),
                "VIEWER".to_string()
            ])]
        );
    }

    #[test]
    fn test_guest_false_imposes_no_filter() {
        let filter = MemberFilter {
            is_guest: Some(false),
            ..empty_filter()
        };
        let with_false = Predicate::from_filter(&filter, Utc::now());
        let without = Predicate::from_filter(&empty_filter(), Utc::now());
        assert_eq!(with_false, without);

        let filter = MemberFilter {
            is_guest: Some(true),
            ..empty_filter()
        };
        let (sql, _) = render(&Predicate::from_filter(&filter, Utc::now()));
        assert!(sql.contains("m.is_guest"));
    }

    #[test]
    fn test_roles_and_guest_constrain_one_membership_row() {
        let filter = MemberFilter {
            roles: vec![MemberRole::Owner],
            is_guest: Some(true),
            ..empty_filter()
        };
        let (sql, binds) = render(&Predicate::from_filter(&filter, Utc::now()));
        // A single membership must carry the role AND be a guest; a user
        // whose guest membership is elsewhere must not slip through on a
        // separate subquery.
        assert_eq!(
            sql,
            "EXISTS (SELECT 1 FROM memberships m WHERE m.user_id = u.id \
             AND m.role = ANY($1::member_role[]) AND m.is_guest)"
        );
        assert_eq!(sql.matches("EXISTS").count(), 1);
        assert_eq!(
            binds,
            vec![FilterValue::StringList(vec!["OWNER".to_string()])]
        );
    }

    #[test]
    fn test_sentinel_and_real_teams_combine_with_or() {
        let filter = MemberFilter {
            teams: vec!["NO_TEAM".to_string(), "Alpha".to_string()],
            ..empty_filter()
        };
        let (sql, binds) = render(&Predicate::from_filter(&filter, Utc::now()));
        assert!(sql.contains(
            "(NOT EXISTS (SELECT 1 FROM team_links tl WHERE tl.user_id = u.id) \
             OR EXISTS (SELECT 1 FROM team_links tl JOIN teams t ON t.id = tl.team_id \
             WHERE tl.user_id = u.id AND t.name = ANY($1)))"
        ));
        assert_eq!(
            binds,
            vec![FilterValue::StringList(vec!["Alpha".to_string()])]
        );
    }

    #[test]
    fn test_sentinel_only_means_no_team_links() {
        let filter = MemberFilter {
            teams: vec!["_NO_TEAM_".to_string()],
            ..empty_filter()
        };
        let (sql, binds) = render(&Predicate::from_filter(&filter, Utc::now()));
        assert!(sql.contains("NOT EXISTS (SELECT 1 FROM team_links tl WHERE tl.user_id = u.id)"));
        assert!(!sql.contains("t.name"));
        assert!(binds.is_empty());
    }

    #[test]
    fn test_real_teams_only() {
        let filter = MemberFilter {
            teams: vec!["Alpha".to_string(), "Beta".to_string()],
            ..empty_filter()
        };
        let (sql, binds) = render(&Predicate::from_filter(&filter, Utc::now()));
        assert!(sql.contains("t.name = ANY($1)"));
        assert!(!sql.contains("NOT EXISTS"));
        assert_eq!(
            binds,
            vec![FilterValue::StringList(vec![
                "Alpha".to_string(),
                "Beta".to_string()
            ])]
        );
    }

    #[test]
    fn test_search_matches_name_or_email() {
        let filter = MemberFilter {
            search: Some("suzu".to_string()),
            ..empty_filter()
        };
        let (sql, binds) = render(&Predicate::from_filter(&filter, Utc::now()));
        assert!(sql.contains("(u.name LIKE $1 OR u.email LIKE $2)"));
        assert_eq!(
            binds,
            vec![
                FilterValue::String("%suzu%".to_string()),
                FilterValue::String("%suzu%".to_string())
            ]
        );
    }

    #[test]
    fn test_empty_search_ignored() {
        let filter = MemberFilter {
            search: Some(String::new()),
            ..empty_filter()
        };
        let predicate = Predicate::from_filter(&filter, Utc::now());
        assert_eq!(predicate, Predicate::from_filter(&empty_filter(), Utc::now()));
    }

    #[test]
    fn test_never_logged_in_is_null_check() {
        let filter = MemberFilter {
            last_login: Some(LastLoginPeriod::Never),
            ..empty_filter()
        };
        let (sql, binds) = render(&Predicate::from_filter(&filter, Utc::now()));
        assert!(sql.contains("u.last_login_at IS NULL"));
        assert!(binds.is_empty());
    }

    #[test]
    fn test_timed_login_period_binds_cutoff() {
        let now = Utc::now();
        let filter = MemberFilter {
            last_login: Some(LastLoginPeriod::Week),
            ..empty_filter()
        };
        let (sql, binds) = render(&Predicate::from_filter(&filter, now));
        assert!(sql.contains("u.last_login_at >= $1"));
        assert_eq!(
            binds,
            vec![FilterValue::Timestamp(now - chrono::Duration::days(7))]
        );
    }

    #[test]
    fn test_combined_filters_number_binds_in_order() {
        let filter = MemberFilter {
            roles: vec![MemberRole::Member],
            teams: vec!["NO_TEAM".to_string(), "Alpha".to_string()],
            search: Some("a".to_string()),
            ..empty_filter()
        };
        let (sql, binds) = render(&Predicate::from_filter(&filter, Utc::now()));
        assert!(sql.contains("$1::member_role[]"));
        assert!(sql.contains("t.name = ANY($2)"));
        assert!(sql.contains("u.name LIKE $3"));
        assert!(sql.contains("u.email LIKE $4"));
        assert_eq!(binds.len(), 4);
        // Active clauses AND-combine around the base membership check.
        assert!(sql.starts_with("(EXISTS (SELECT 1 FROM memberships m"));
        assert!(sql.contains(" AND "));
    }
}
