use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resources::CourseRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ResourceRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ResourceResponse {
    pub resources: Vec<CourseRecord>,
}

/// POST /api/v1/resources
pub async fn handle_recommend_resources(
    State(state): State<AppState>,
    Json(request): Json<ResourceRequest>,
) -> Result<Json<ResourceResponse>, AppError> {
    if request.skills.iter().all(|s| s.trim().is_empty()) {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let resources = state
        .recommender
        .recommend(&request.skills, state.config.resource_limit)
        .await?;

    Ok(Json(ResourceResponse { resources }))
}
