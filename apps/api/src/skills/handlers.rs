use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::skill::{SkillProfile, SkillRecord};
use crate::models::user::UserId;
use crate::routes::UserIdQuery;
use crate::skills::extract::{extract_skills, ExtractedSkill};
use crate::skills::ingest::sanitize_skills;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReplaceSkillsRequest {
    pub user_id: String,
    /// Bare labels and `{skill, level}` records may be mixed.
    pub skills: Vec<SkillRecord>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
    /// When set, the extracted skills are merged into this user's profile.
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<ExtractedSkill>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<SkillProfile>,
}

/// GET /api/v1/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SkillProfile>, AppError> {
    let user_id = params.require()?;
    Ok(Json(state.store.get_skill_profile(&user_id).await?))
}

/// PUT /api/v1/skills
///
/// Replaces the profile wholesale. Any derived gap data the client holds is
/// stale after this call.
pub async fn handle_replace_skills(
    State(state): State<AppState>,
    Json(request): Json<ReplaceSkillsRequest>,
) -> Result<Json<SkillProfile>, AppError> {
    let user_id = UserId::parse(&request.user_id)?;

    let skills = sanitize_skills(request.skills);
    state.store.replace_skills(&user_id, &skills).await?;

    Ok(Json(state.store.get_skill_profile(&user_id).await?))
}

/// POST /api/v1/skills/extract
///
/// Finds known skills in pasted text. With a `user_id`, new skills are
/// appended to the stored profile; skills already there keep their level.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let extracted = extract_skills(&request.text);

    let profile = match request.user_id.as_deref() {
        Some(raw) => {
            let user_id = UserId::parse(raw)?;
            let current = state.store.get_skill_profile(&user_id).await?;
            let merged = sanitize_skills(
                current
                    .skills
                    .into_iter()
                    .map(SkillRecord::from)
                    .chain(extracted.iter().cloned().map(ExtractedSkill::into_record)),
            );
            state.store.replace_skills(&user_id, &merged).await?;
            info!("Merged {} extracted skills for user {user_id}", extracted.len());
            Some(state.store.get_skill_profile(&user_id).await?)
        }
        None => None,
    };

    Ok(Json(ExtractSkillsResponse {
        skills: extracted,
        profile,
    }))
}
