use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A job posting. Catalog positions are visible to everyone; custom positions
/// carry `is_custom = true` and the owning `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Position {
    pub id: String,
    pub title: String,
    pub industry: String,
    /// Ordered, may contain duplicates. Casing is kept for display.
    pub required_skills: Vec<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// A position enriched with the user's progress against its requirements.
/// Derived on every request, never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PositionWithProgress {
    #[serde(flatten)]
    pub position: Position,
    pub completion_percentage: u8,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}
