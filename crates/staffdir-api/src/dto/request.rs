//! Request DTOs: raw query parameters and their coercion into validated
//! filter requests.

use serde::Deserialize;

use staffdir_core::result::AppResult;
use staffdir_core::types::pagination::{PageRequest, DEFAULT_PAGE_SIZE};
use staffdir_core::types::sorting::SortOrder;
use staffdir_entity::member::filter::{LastLoginPeriod, MemberFilter, MemberSortKey};
use staffdir_entity::membership::MemberRole;

/// Raw query parameters for `GET /users/filter`.
///
/// Everything arrives as optional strings; coercion rules (CSV splitting,
/// boolean parsing, numeric defaults) live in [`Self::into_filter`] so the
/// wire quirks stay at the boundary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterMembersParams {
    /// Comma-separated role tokens.
    pub roles: Option<String>,
    /// `"true"` filters to guests; any other value imposes no filter.
    pub is_guest: Option<String>,
    /// Comma-separated team-name tokens, possibly the no-team sentinel.
    pub teams: Option<String>,
    /// Free-text search over name and email.
    pub search: Option<String>,
    /// `24h`, `7d`, `30d`, or `never`.
    pub last_login_period: Option<String>,
    /// Page number; non-numeric falls back to 1.
    pub page: Option<String>,
    /// Page size; non-numeric falls back to 10.
    pub limit: Option<String>,
    /// Sort key; unknown keys disable store-level sorting.
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    pub order: Option<String>,
}

impl FilterMembersParams {
    /// Coerce raw parameters into a validated [`MemberFilter`].
    ///
    /// Unknown role tokens are rejected; everything else degrades silently
    /// per the existing client contract.
    pub fn into_filter(self) -> AppResult<MemberFilter> {
        let roles = split_csv(self.roles.as_deref())
            .iter()
            .map(|token| token.parse::<MemberRole>())
            .collect::<Result<Vec<_>, _>>()?;

        // Only the exact strings "true"/"false" are booleans; anything else
        // means "no filter". A parsed `false` also imposes no filter
        // downstream.
        let is_guest = match self.is_guest.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        };

        let page = parse_count(self.page.as_deref(), 1);
        let limit = parse_count(self.limit.as_deref(), DEFAULT_PAGE_SIZE);

        Ok(MemberFilter {
            roles,
            is_guest,
            teams: split_csv(self.teams.as_deref()),
            search: self.search.filter(|s| !s.is_empty()),
            last_login: self
                .last_login_period
                .as_deref()
                .and_then(LastLoginPeriod::parse),
            sort: MemberSortKey::parse(self.sort_by.as_deref().unwrap_or("name")),
            order: SortOrder::parse(self.order.as_deref().unwrap_or("asc")),
            page: PageRequest::new(page, limit),
        })
    }
}

/// Raw query parameters for `GET /users`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMembersParams {
    /// Page number; non-numeric falls back to 1.
    pub page: Option<String>,
    /// Page size; non-numeric falls back to 10.
    pub limit: Option<String>,
}

impl ListMembersParams {
    /// Coerce into a page request with NaN-guarded defaults.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::new(
            parse_count(self.page.as_deref(), 1),
            parse_count(self.limit.as_deref(), DEFAULT_PAGE_SIZE),
        )
    }
}

/// Split a comma-separated parameter, dropping empty tokens.
fn split_csv(value: Option<&str>) -> Vec<String> {
    value
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a positive count, falling back to the default for absent,
/// non-numeric, or zero values (the NaN guard for `page`/`limit`).
fn parse_count(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|&n| n >= 1)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv_drops_empty_tokens() {
        assert_eq!(split_csv(Some("a,,b,")), vec!["a", "b"]);
        assert_eq!(split_csv(Some(" a , b ")), vec!["a", "b"]);
        assert!(split_csv(Some("")).is_empty());
        assert!(split_csv(None).is_empty());
    }

    #[test]
    fn test_parse_count_guards_non_numeric() {
        assert_eq!(parse_count(Some("3"), 1), 3);
        assert_eq!(parse_count(Some("abc"), 1), 1);
        assert_eq!(parse_count(Some("-2"), 10), 10);
        assert_eq!(parse_count(Some("0"), 10), 10);
        assert_eq!(parse_count(None, 10), 10);
    }

    #[test]
    fn test_defaults() {
        let filter = FilterMembersParams::default().into_filter().unwrap();
        assert!(filter.roles.is_empty());
        assert_eq!(filter.is_guest, None);
        assert!(filter.teams.is_empty());
        assert_eq!(filter.search, None);
        assert_eq!(filter.last_login, None);
        assert_eq!(filter.sort, Some(MemberSortKey::Name));
        assert_eq!(filter.order, SortOrder::Asc);
        assert_eq!(filter.page.page, 1);
        assert_eq!(filter.page.limit, 10);
    }

    #[test]
    fn test_roles_parse_and_reject_unknown() {
        let params = FilterMembersParams {
            roles: Some("OWNER,VIEWER".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(filter.roles, vec![MemberRole::Owner, MemberRole::Viewer]);

        let params = FilterMembersParams {
            roles: Some("OWNER,WIZARD".to_string()),
            ..Default::default()
        };
        assert!(params.into_filter().is_err());
    }

    #[test]
    fn test_is_guest_coercion() {
        for (input, expected) in [
            (Some("true"), Some(true)),
            (Some("false"), Some(false)),
            (Some("yes"), None),
            (None, None),
        ] {
            let params = FilterMembersParams {
                is_guest: input.map(str::to_string),
                ..Default::default()
            };
            assert_eq!(params.into_filter().unwrap().is_guest, expected);
        }
    }

    #[test]
    fn test_invalid_sort_key_silently_disables_sort() {
        let params = FilterMembersParams {
            sort_by: Some("shoeSize".to_string()),
            ..Default::default()
        };
        assert_eq!(params.into_filter().unwrap().sort, None);
    }

    #[test]
    fn test_non_numeric_page_falls_back_to_default() {
        let params = FilterMembersParams {
            page: Some("NaN".to_string()),
            limit: Some("many".to_string()),
            ..Default::default()
        };
        let filter = params.into_filter().unwrap();
        assert_eq!(filter.page.page, 1);
        assert_eq!(filter.page.limit, 10);
    }
}
