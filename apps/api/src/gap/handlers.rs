use std::collections::HashSet;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::gap::analysis::{recompute, AnalysisInputs, AnalysisStatus, SkillGapAnalysis};
use crate::resources::CourseRecord;
use crate::routes::UserIdQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SkillGapResponse {
    #[serde(flatten)]
    pub analysis: SkillGapAnalysis,
    pub resources: Vec<CourseRecord>,
}

/// GET /api/v1/skill-gaps
///
/// Reloads every input and recomputes from scratch.
pub async fn handle_skill_gaps(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SkillGapResponse>, AppError> {
    let user_id = params.require()?;

    let catalog = state.store.list_catalog_positions().await?;
    let custom = state.store.list_custom_positions(&user_id).await?;
    let profile = state.store.get_skill_profile(&user_id).await?;
    let focused_ids: HashSet<String> = state
        .store
        .list_focused_ids(&user_id)
        .await?
        .into_iter()
        .collect();

    let analysis = recompute(&AnalysisInputs {
        catalog: &catalog,
        custom: &custom,
        user_id: user_id.as_str(),
        focused_ids: &focused_ids,
        user_skills: &profile.skills,
    });

    debug!(
        "Skill gaps for {user_id}: {} focused, {} gaps",
        analysis.total_focused,
        analysis.gaps.len()
    );

    let resources = match analysis.status {
        AnalysisStatus::GapsFound => {
            state
                .recommender
                .recommend(&analysis.missing_skill_labels(), state.config.resource_limit)
                .await?
        }
        AnalysisStatus::NoFocusedPositions | AnalysisStatus::AllSkillsCovered => vec![],
    };

    Ok(Json(SkillGapResponse {
        analysis,
        resources,
    }))
}
