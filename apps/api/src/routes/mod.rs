pub mod health;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::gap;
use crate::models::user::UserId;
use crate::positions;
use crate::resources;
use crate::skills;
use crate::state::AppState;

/// `?user_id=` for per-user endpoints. The id is opaque; authentication
/// happens upstream.
#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: String,
}

impl UserIdQuery {
    pub fn require(&self) -> Result<UserId, AppError> {
        UserId::parse(&self.user_id)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Positions
        .route(
            "/api/v1/positions",
            get(positions::handlers::handle_list_positions),
        )
        .route(
            "/api/v1/positions/custom",
            get(positions::handlers::handle_list_custom_positions)
                .post(positions::handlers::handle_create_custom_position),
        )
        .route(
            "/api/v1/positions/custom/:id",
            delete(positions::handlers::handle_delete_custom_position),
        )
        // Focus set
        .route("/api/v1/focus", get(positions::handlers::handle_list_focus))
        .route(
            "/api/v1/focus/:id",
            put(positions::handlers::handle_add_focus)
                .delete(positions::handlers::handle_remove_focus),
        )
        // Skill profile
        .route(
            "/api/v1/skills",
            get(skills::handlers::handle_get_skills).put(skills::handlers::handle_replace_skills),
        )
        .route(
            "/api/v1/skills/extract",
            post(skills::handlers::handle_extract_skills),
        )
        // Analysis
        .route(
            "/api/v1/skill-gaps",
            get(gap::handlers::handle_skill_gaps),
        )
        .route(
            "/api/v1/resources",
            post(resources::handlers::handle_recommend_resources),
        )
        // Admin
        .route(
            "/api/v1/admin/seed-positions",
            post(positions::handlers::handle_seed_positions),
        )
        .with_state(state)
}
