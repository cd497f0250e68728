//! Axum route handlers for position browsing, custom positions and focus.

use std::collections::HashSet;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::gap::completion::with_progress;
use crate::models::position::{Position, PositionWithProgress};
use crate::models::user::UserId;
use crate::positions::assembler::visible_positions;
use crate::positions::filters::{apply_filters, distinct_skills, industries, PositionFilter, ProgressBand};
use crate::positions::seed::seed_catalog;
use crate::routes::UserIdQuery;
use crate::skills::ingest::{skill_labels, split_skill_list};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PositionListQuery {
    pub user_id: String,
    pub industry: Option<String>,
    /// Comma-separated skill labels.
    pub skills: Option<String>,
    #[serde(default)]
    pub only_matching: bool,
}

#[derive(Debug, Serialize)]
pub struct PositionCard {
    #[serde(flatten)]
    pub progress: PositionWithProgress,
    pub band: ProgressBand,
    pub is_focused: bool,
}

#[derive(Debug, Serialize)]
pub struct PositionListResponse {
    pub positions: Vec<PositionCard>,
    pub industries: Vec<String>,
    pub skills: Vec<String>,
}

/// Required skills as a list, or as the comma-separated text the add-job
/// form submits.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RequiredSkillsInput {
    List(Vec<String>),
    Text(String),
}

impl RequiredSkillsInput {
    fn into_labels(self) -> Vec<String> {
        match self {
            RequiredSkillsInput::List(items) => items
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            RequiredSkillsInput::Text(raw) => split_skill_list(&raw),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCustomPositionRequest {
    pub user_id: String,
    pub id: Option<String>,
    pub title: String,
    pub industry: String,
    pub required_skills: RequiredSkillsInput,
    pub description: Option<String>,
    pub company: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FocusListResponse {
    pub focused_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub seeded: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/positions
///
/// Catalog plus the caller's own custom positions, each with progress
/// against the caller's current skills.
pub async fn handle_list_positions(
    State(state): State<AppState>,
    Query(params): Query<PositionListQuery>,
) -> Result<Json<PositionListResponse>, AppError> {
    let user_id = UserId::parse(&params.user_id)?;

    let catalog = state.store.list_catalog_positions().await?;
    let custom = state.store.list_custom_positions(&user_id).await?;
    let profile = state.store.get_skill_profile(&user_id).await?;
    let focused: HashSet<String> = state
        .store
        .list_focused_ids(&user_id)
        .await?
        .into_iter()
        .collect();

    let visible = visible_positions(&catalog, &custom, user_id.as_str());
    let filter = PositionFilter {
        industry: params.industry,
        skills: params
            .skills
            .as_deref()
            .map(split_skill_list)
            .unwrap_or_default(),
        only_matching: params.only_matching,
    };

    let progress = with_progress(&visible, &skill_labels(&profile.skills));
    let positions = apply_filters(progress, &filter)
        .into_iter()
        .map(|p| PositionCard {
            band: ProgressBand::for_percentage(p.completion_percentage),
            is_focused: focused.contains(&p.position.id),
            progress: p,
        })
        .collect();

    Ok(Json(PositionListResponse {
        positions,
        industries: industries(&visible),
        skills: distinct_skills(&visible),
    }))
}

/// POST /api/v1/positions/custom
///
/// Create only. An id already used by a catalog position or by another of
/// the caller's custom positions is a `Conflict`.
pub async fn handle_create_custom_position(
    State(state): State<AppState>,
    Json(request): Json<CreateCustomPositionRequest>,
) -> Result<(StatusCode, Json<Position>), AppError> {
    let user_id = UserId::parse(&request.user_id)?;
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.industry.trim().is_empty() {
        return Err(AppError::Validation("industry cannot be empty".to_string()));
    }

    let id = request
        .id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(sanitize_position_id)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let catalog = state.store.list_catalog_positions().await?;
    if catalog.iter().any(|p| p.id == id) {
        return Err(AppError::Conflict(format!(
            "Position id {id} is already used by the catalog"
        )));
    }

    let position = Position {
        id,
        title: request.title.trim().to_string(),
        industry: request.industry.trim().to_string(),
        required_skills: request.required_skills.into_labels(),
        description: non_blank(request.description),
        company: non_blank(request.company),
        is_custom: true,
        user_id: Some(user_id.to_string()),
    };

    state.store.create_custom_position(&user_id, &position).await?;
    info!("Created custom position {} for user {user_id}", position.id);

    Ok((StatusCode::CREATED, Json(position)))
}

/// GET /api/v1/positions/custom
pub async fn handle_list_custom_positions(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<Position>>, AppError> {
    let user_id = params.require()?;
    Ok(Json(state.store.list_custom_positions(&user_id).await?))
}

/// DELETE /api/v1/positions/custom/:id
///
/// Also drops the position from the owner's focus set.
pub async fn handle_delete_custom_position(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let user_id = params.require()?;

    if !state.store.delete_custom_position(&user_id, &id).await? {
        return Err(AppError::NotFound(format!("Custom position {id} not found")));
    }
    state.store.remove_focused(&user_id, &id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/focus
pub async fn handle_list_focus(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<FocusListResponse>, AppError> {
    let user_id = params.require()?;
    let focused_ids = state.store.list_focused_ids(&user_id).await?;
    Ok(Json(FocusListResponse { focused_ids }))
}

/// PUT /api/v1/focus/:id
///
/// Ids are not checked against known positions; unknown ids are ignored by
/// the gap analysis.
pub async fn handle_add_focus(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let user_id = params.require()?;
    state.store.add_focused(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/focus/:id
pub async fn handle_remove_focus(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UserIdQuery>,
) -> Result<StatusCode, AppError> {
    let user_id = params.require()?;
    state.store.remove_focused(&user_id, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/seed-positions
pub async fn handle_seed_positions(
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, AppError> {
    let seeded = seed_catalog(state.store.as_ref()).await?;
    Ok(Json(SeedResponse { seeded }))
}

/// Path separators are not allowed in stored ids.
fn sanitize_position_id(id: &str) -> String {
    id.replace('/', "_")
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
