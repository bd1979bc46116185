//! SQL assembly for the directory listing: count + page fetch.

use staffdir_core::types::filter::FilterValue;
use staffdir_core::types::pagination::PageRequest;
use staffdir_core::types::sorting::SortOrder;
use staffdir_entity::member::filter::MemberSortKey;

use super::predicate::Predicate;

/// Columns selected for a page fetch, in `User` row order.
const USER_COLUMNS: &str = "u.id, u.name, u.email, u.last_login_at, u.created_at, u.updated_at";

/// Render the `COUNT(*)` query for all users matching the predicate,
/// ignoring pagination.
pub fn count_members_sql(predicate: &Predicate) -> (String, Vec<FilterValue>) {
    let mut sql = String::from("SELECT COUNT(*) FROM users u WHERE ");
    let mut binds = Vec::new();
    predicate.render(&mut sql, &mut binds);
    (sql, binds)
}

/// Render the page-fetch query: predicate, optional store-level sort, and
/// pagination.
///
/// Sort keys without a store column (the derived `role` key) and absent
/// keys produce no `ORDER BY`; the caller re-sorts in memory where needed.
pub fn select_members_sql(
    predicate: &Predicate,
    sort: Option<MemberSortKey>,
    order: SortOrder,
    page: &PageRequest,
) -> (String, Vec<FilterValue>) {
    let mut sql = format!("SELECT {USER_COLUMNS} FROM users u WHERE ");
    let mut binds = Vec::new();
    predicate.render(&mut sql, &mut binds);

    if let Some(column) = sort.and_then(|key| key.column()) {
        sql.push_str(&format!(" ORDER BY u.{column} {}", order.as_sql()));
    }

    binds.push(FilterValue::Integer(page.limit as i64));
    sql.push_str(&format!(" LIMIT ${}", binds.len()));
    binds.push(FilterValue::Integer(page.offset() as i64));
    sql.push_str(&format!(" OFFSET ${}", binds.len()));

    (sql, binds)
}
