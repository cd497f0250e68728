use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::position::Position;
use crate::models::skill::{Skill, SkillProfile};
use crate::models::user::UserId;
use crate::skills::ingest::skill_from_row;
use crate::store::CareerStore;

/// `CareerStore` backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CareerStore for PgStore {
    async fn list_catalog_positions(&self) -> Result<Vec<Position>, AppError> {
        Ok(sqlx::query_as::<_, Position>(
            r#"
            SELECT id, title, industry, required_skills, description, company,
                   FALSE AS is_custom, NULL::TEXT AS user_id
            FROM catalog_positions
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn insert_catalog_positions(&self, positions: &[Position]) -> Result<usize, AppError> {
        let mut tx = self.pool.begin().await?;
        for position in positions {
            sqlx::query(
                r#"
                INSERT INTO catalog_positions
                    (id, title, industry, required_skills, description, company)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(&position.id)
            .bind(&position.title)
            .bind(&position.industry)
            .bind(&position.required_skills)
            .bind(&position.description)
            .bind(&position.company)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                conflict_on_unique(e, || format!("Catalog position {} already exists", position.id))
            })?;
            debug!("Added catalog position: {} ({})", position.title, position.id);
        }
        tx.commit().await?;

        info!("Inserted {} catalog positions", positions.len());
        Ok(positions.len())
    }

    async fn list_custom_positions(&self, user_id: &UserId) -> Result<Vec<Position>, AppError> {
        Ok(sqlx::query_as::<_, Position>(
            r#"
            SELECT id, title, industry, required_skills, description, company,
                   TRUE AS is_custom, user_id
            FROM custom_positions
            WHERE user_id = $1
            ORDER BY seq ASC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_custom_position(
        &self,
        user_id: &UserId,
        position: &Position,
    ) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO custom_positions
                (user_id, id, title, industry, required_skills, description, company)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user_id.as_str())
        .bind(&position.id)
        .bind(&position.title)
        .bind(&position.industry)
        .bind(&position.required_skills)
        .bind(&position.description)
        .bind(&position.company)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            conflict_on_unique(e, || format!("Custom position {} already exists", position.id))
        })?;

        Ok(())
    }

    async fn delete_custom_position(
        &self,
        user_id: &UserId,
        position_id: &str,
    ) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM custom_positions WHERE user_id = $1 AND id = $2")
            .bind(user_id.as_str())
            .bind(position_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_focused_ids(&self, user_id: &UserId) -> Result<Vec<String>, AppError> {
        Ok(sqlx::query_scalar::<_, String>(
            "SELECT position_id FROM focused_positions WHERE user_id = $1 ORDER BY position_id",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?)
    }

    async fn add_focused(&self, user_id: &UserId, position_id: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO focused_positions (user_id, position_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, position_id) DO NOTHING
            "#,
        )
        .bind(user_id.as_str())
        .bind(position_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn remove_focused(&self, user_id: &UserId, position_id: &str) -> Result<(), AppError> {
        sqlx::query("DELETE FROM focused_positions WHERE user_id = $1 AND position_id = $2")
            .bind(user_id.as_str())
            .bind(position_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_skill_profile(&self, user_id: &UserId) -> Result<SkillProfile, AppError> {
        let rows = sqlx::query_as::<_, (String, Option<String>, DateTime<Utc>)>(
            "SELECT skill, level, updated_at FROM user_skills WHERE user_id = $1 ORDER BY ordinal",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        let updated_at = rows.iter().map(|(_, _, at)| *at).max();
        let skills = rows
            .into_iter()
            .map(|(label, level, _)| skill_from_row(label, level))
            .collect();

        Ok(SkillProfile { skills, updated_at })
    }

    async fn replace_skills(&self, user_id: &UserId, skills: &[Skill]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM user_skills WHERE user_id = $1")
            .bind(user_id.as_str())
            .execute(&mut *tx)
            .await?;

        for (ordinal, skill) in skills.iter().enumerate() {
            sqlx::query(
                "INSERT INTO user_skills (user_id, ordinal, skill, level) VALUES ($1, $2, $3, $4)",
            )
            .bind(user_id.as_str())
            .bind(ordinal as i32)
            .bind(&skill.label)
            .bind(skill.level.map(|l| l.to_string()))
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        info!("Replaced skill profile for user {user_id} ({} skills)", skills.len());
        Ok(())
    }
}

/// A unique-key violation means the row is already there; anything else is a
/// plain database error.
fn conflict_on_unique(err: sqlx::Error, message: impl FnOnce() -> String) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::Conflict(message());
        }
    }
    AppError::Database(err)
}
