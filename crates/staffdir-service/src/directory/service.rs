//! Directory service: filter execution, result mapping, team listing.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use staffdir_core::error::AppError;
use staffdir_core::result::AppResult;
use staffdir_core::types::pagination::{Page, PageRequest};
use staffdir_database::repositories::{TeamRepository, UserRepository};
use staffdir_entity::member::filter::MemberSortKey;
use staffdir_entity::member::{MemberFilter, MemberProfile};
use staffdir_entity::team::Team;
use staffdir_entity::user::UserWithRelations;

use super::sort::sort_by_role_name;

/// Read-only directory operations over users and teams.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Team repository.
    team_repo: Arc<TeamRepository>,
}

impl DirectoryService {
    /// Creates a new directory service.
    pub fn new(user_repo: Arc<UserRepository>, team_repo: Arc<TeamRepository>) -> Self {
        Self {
            user_repo,
            team_repo,
        }
    }

    /// Execute a filter request and map the page to the external member
    /// shape.
    ///
    /// When sorting by the derived `role` field the store returns the page
    /// unordered and the mapped page is re-sorted in memory.
    pub async fn filter_members(&self, filter: MemberFilter) -> AppResult<Page<MemberProfile>> {
        let (records, total) = self.user_repo.filter_members(&filter, Utc::now()).await?;

        let mut profiles: Vec<MemberProfile> = records
            .into_iter()
            .map(MemberProfile::from_relations)
            .collect();

        if filter.sort == Some(MemberSortKey::Role) {
            sort_by_role_name(&mut profiles, filter.order);
        }

        debug!(
            total,
            page = filter.page.page,
            returned = profiles.len(),
            "Filtered directory members"
        );

        Ok(Page::new(profiles, &filter.page, total))
    }

    /// Unfiltered listing of all membership-having users.
    pub async fn list_members(&self, page: PageRequest) -> AppResult<Page<MemberProfile>> {
        let filter = MemberFilter {
            sort: None,
            page,
            ..MemberFilter::default()
        };
        self.filter_members(filter).await
    }

    /// Fetch a single user with memberships and team names.
    pub async fn get_member(&self, id: Uuid) -> AppResult<UserWithRelations> {
        self.user_repo
            .find_by_id_with_relations(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// List all teams ordered by name ascending.
    pub async fn list_teams(&self) -> AppResult<Vec<Team>> {
        self.team_repo.find_all_ordered().await
    }
}
