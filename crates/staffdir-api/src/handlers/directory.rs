//! Directory listing handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use uuid::Uuid;

use staffdir_core::error::AppError;
use staffdir_core::types::pagination::Page;

use crate::dto::request::{FilterMembersParams, ListMembersParams};
use crate::dto::response::{MemberResponse, TeamResponse, UserDetailResponse};
use crate::state::AppState;

/// GET /users/filter
pub async fn filter_members(
    State(state): State<AppState>,
    Query(params): Query<FilterMembersParams>,
) -> Result<Json<Page<MemberResponse>>, AppError> {
    let filter = params.into_filter()?;
    let page = state.directory.filter_members(filter).await?;
    Ok(Json(page.map(MemberResponse::from)))
}

/// GET /users
pub async fn list_members(
    State(state): State<AppState>,
    Query(params): Query<ListMembersParams>,
) -> Result<Json<Page<MemberResponse>>, AppError> {
    let page = state
        .directory
        .list_members(params.into_page_request())
        .await?;
    Ok(Json(page.map(MemberResponse::from)))
}

/// GET /users/teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamResponse>>, AppError> {
    let teams = state.directory.list_teams().await?;
    Ok(Json(teams.into_iter().map(TeamResponse::from).collect()))
}

/// GET /users/{id}
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserDetailResponse>, AppError> {
    let record = state.directory.get_member(id).await?;
    Ok(Json(UserDetailResponse::from(record)))
}
