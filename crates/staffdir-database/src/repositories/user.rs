//! User repository: directory listing and single-user reads.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::postgres::PgArguments;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use staffdir_core::error::{AppError, ErrorKind};
use staffdir_core::result::AppResult;
use staffdir_core::types::filter::FilterValue;
use staffdir_entity::member::MemberFilter;
use staffdir_entity::membership::Membership;
use staffdir_entity::user::{User, UserWithRelations};

use crate::query::{count_members_sql, select_members_sql, Predicate};

/// Repository for directory user reads.
///
/// All entities are externally managed; this repository only reads.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Execute a filter request: count all matching users, fetch the
    /// requested page, and load memberships and team names for it.
    ///
    /// The count and the page fetch are two uncoupled reads; a benign race
    /// can make the total momentarily inconsistent with the page under
    /// concurrent writes.
    pub async fn filter_members(
        &self,
        filter: &MemberFilter,
        now: DateTime<Utc>,
    ) -> AppResult<(Vec<UserWithRelations>, u64)> {
        let predicate = Predicate::from_filter(filter, now);

        let (count_sql, count_binds) = count_members_sql(&predicate);
        let total: i64 = bind_scalar(sqlx::query_scalar(&count_sql), &count_binds)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let (select_sql, select_binds) =
            select_members_sql(&predicate, filter.sort, filter.order, &filter.page);
        let users: Vec<User> = bind_query_as(sqlx::query_as(&select_sql), &select_binds)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        let records = self.load_relations(users).await?;
        Ok((records, total as u64))
    }

    /// Find a single user with memberships and team names.
    pub async fn find_by_id_with_relations(
        &self,
        id: Uuid,
    ) -> AppResult<Option<UserWithRelations>> {
        let user: Option<User> = sqlx::query_as(
            "SELECT id, name, email, last_login_at, created_at, updated_at \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))?;

        match user {
            Some(user) => Ok(self.load_relations(vec![user]).await?.into_iter().next()),
            None => Ok(None),
        }
    }

    /// Batch-load memberships and team names for the given users, keeping
    /// the users' order. Team names come back in link-creation order.
    async fn load_relations(&self, users: Vec<User>) -> AppResult<Vec<UserWithRelations>> {
        if users.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();

        let memberships: Vec<Membership> = sqlx::query_as(
            "SELECT id, user_id, role, is_guest, created_at \
             FROM memberships WHERE user_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load memberships", e)
        })?;

        let team_rows: Vec<(Uuid, String)> = sqlx::query_as(
            "SELECT tl.user_id, t.name FROM team_links tl \
             JOIN teams t ON t.id = tl.team_id \
             WHERE tl.user_id = ANY($1) ORDER BY tl.created_at",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load team links", e))?;

        let mut memberships_by_user: HashMap<Uuid, Vec<Membership>> = HashMap::new();
        for membership in memberships {
            memberships_by_user
                .entry(membership.user_id)
                .or_default()
                .push(membership);
        }

        let mut teams_by_user: HashMap<Uuid, Vec<String>> = HashMap::new();
        for (user_id, team_name) in team_rows {
            teams_by_user.entry(user_id).or_default().push(team_name);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let memberships = memberships_by_user.remove(&user.id).unwrap_or_default();
                let teams = teams_by_user.remove(&user.id).unwrap_or_default();
                UserWithRelations {
                    user,
                    memberships,
                    teams,
                }
            })
            .collect())
    }
}

/// Bind an ordered list of filter values onto a `query_as` statement.
fn bind_query_as<'q, O>(
    mut query: sqlx::query::QueryAs<'q, Postgres, O, PgArguments>,
    values: &'q [FilterValue],
) -> sqlx::query::QueryAs<'q, Postgres, O, PgArguments> {
    for value in values {
        query = match value {
            FilterValue::String(s) => query.bind(s),
            FilterValue::StringList(list) => query.bind(list),
            FilterValue::Integer(i) => query.bind(i),
            FilterValue::Timestamp(ts) => query.bind(ts),
        };
    }
    query
}

/// Bind an ordered list of filter values onto a `query_scalar` statement.
fn bind_scalar<'q, O>(
    mut query: sqlx::query::QueryScalar<'q, Postgres, O, PgArguments>,
    values: &'q [FilterValue],
) -> sqlx::query::QueryScalar<'q, Postgres, O, PgArguments> {
    for value in values {
        query = match value {
            FilterValue::String(s) => query.bind(s),
            FilterValue::StringList(list) => query.bind(list),
            FilterValue::Integer(i) => query.bind(i),
            FilterValue::Timestamp(ts) => query.bind(ts),
        };
    }
    query
}
