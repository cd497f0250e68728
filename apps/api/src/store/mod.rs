//! Persistence seam. Handlers only talk to `dyn CareerStore`; `AppState`
//! carries an `Arc<dyn CareerStore>` chosen at startup.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::position::Position;
use crate::models::skill::{Skill, SkillProfile};
use crate::models::user::UserId;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[async_trait]
pub trait CareerStore: Send + Sync {
    /// All standard positions, in insertion order.
    async fn list_catalog_positions(&self) -> Result<Vec<Position>, AppError>;

    /// Inserts catalog positions all-or-nothing. Any id already in the
    /// catalog fails the whole batch with `Conflict`.
    async fn insert_catalog_positions(&self, positions: &[Position]) -> Result<usize, AppError>;

    /// Custom positions owned by `user_id`, in creation order.
    async fn list_custom_positions(&self, user_id: &UserId) -> Result<Vec<Position>, AppError>;

    /// Stores a new custom position owned by `user_id`. `Conflict` if the
    /// owner already has a position with that id.
    async fn create_custom_position(
        &self,
        user_id: &UserId,
        position: &Position,
    ) -> Result<(), AppError>;

    /// Returns `false` if the owner has no position with that id.
    async fn delete_custom_position(
        &self,
        user_id: &UserId,
        position_id: &str,
    ) -> Result<bool, AppError>;

    /// Focused position ids for a user, sorted by id.
    async fn list_focused_ids(&self, user_id: &UserId) -> Result<Vec<String>, AppError>;

    /// Idempotent.
    async fn add_focused(&self, user_id: &UserId, position_id: &str) -> Result<(), AppError>;

    /// Idempotent.
    async fn remove_focused(&self, user_id: &UserId, position_id: &str) -> Result<(), AppError>;

    async fn get_skill_profile(&self, user_id: &UserId) -> Result<SkillProfile, AppError>;

    /// Replaces the user's skill set wholesale.
    async fn replace_skills(&self, user_id: &UserId, skills: &[Skill]) -> Result<(), AppError>;
}
