use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::position::Position;
use crate::models::skill::{Skill, SkillProfile};
use crate::models::user::UserId;
use crate::store::CareerStore;

/// In-process `CareerStore` used by router tests.
#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    catalog: Vec<Position>,
    custom: Vec<Position>,
    focused: HashMap<String, BTreeSet<String>>,
    profiles: HashMap<String, SkillProfile>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CareerStore for InMemoryStore {
    async fn list_catalog_positions(&self) -> Result<Vec<Position>, AppError> {
        Ok(self.inner.read().await.catalog.clone())
    }

    async fn insert_catalog_positions(&self, positions: &[Position]) -> Result<usize, AppError> {
        let mut inner = self.inner.write().await;
        if let Some(dup) = positions
            .iter()
            .find(|p| inner.catalog.iter().any(|c| c.id == p.id))
        {
            return Err(AppError::Conflict(format!(
                "Catalog position {} already exists",
                dup.id
            )));
        }
        inner.catalog.extend(positions.iter().cloned());
        Ok(positions.len())
    }

    async fn list_custom_positions(&self, user_id: &UserId) -> Result<Vec<Position>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .custom
            .iter()
            .filter(|p| p.user_id.as_deref() == Some(user_id.as_str()))
            .cloned()
            .collect())
    }

    async fn create_custom_position(
        &self,
        user_id: &UserId,
        position: &Position,
    ) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let exists = inner
            .custom
            .iter()
            .any(|p| p.user_id.as_deref() == Some(user_id.as_str()) && p.id == position.id);
        if exists {
            return Err(AppError::Conflict(format!(
                "Custom position {} already exists",
                position.id
            )));
        }

        inner.custom.push(Position {
            is_custom: true,
            user_id: Some(user_id.to_string()),
            ..position.clone()
        });
        Ok(())
    }

    async fn delete_custom_position(
        &self,
        user_id: &UserId,
        position_id: &str,
    ) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        let before = inner.custom.len();
        inner.custom.retain(|p| {
            !(p.user_id.as_deref() == Some(user_id.as_str()) && p.id == position_id)
        });
        Ok(inner.custom.len() < before)
    }

    async fn list_focused_ids(&self, user_id: &UserId) -> Result<Vec<String>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .focused
            .get(user_id.as_str())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn add_focused(&self, user_id: &UserId, position_id: &str) -> Result<(), AppError> {
        self.inner
            .write()
            .await
            .focused
            .entry(user_id.to_string())
            .or_default()
            .insert(position_id.to_string());
        Ok(())
    }

    async fn remove_focused(&self, user_id: &UserId, position_id: &str) -> Result<(), AppError> {
        if let Some(ids) = self.inner.write().await.focused.get_mut(user_id.as_str()) {
            ids.remove(position_id);
        }
        Ok(())
    }

    async fn get_skill_profile(&self, user_id: &UserId) -> Result<SkillProfile, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .profiles
            .get(user_id.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn replace_skills(&self, user_id: &UserId, skills: &[Skill]) -> Result<(), AppError> {
        self.inner.write().await.profiles.insert(
            user_id.to_string(),
            SkillProfile {
                skills: skills.to_vec(),
                updated_at: Some(Utc::now()),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::parse(id).unwrap()
    }

    fn custom(id: &str) -> Position {
        Position {
            id: id.to_string(),
            title: "Platform Engineer".to_string(),
            industry: "DevOps".to_string(),
            required_skills: vec!["Rust".to_string()],
            description: None,
            company: None,
            is_custom: true,
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_custom_positions_scoped_by_owner() {
        let store = InMemoryStore::new();
        let (alice, bob) = (user("alice"), user("bob"));
        store.create_custom_position(&alice, &custom("p1")).await.unwrap();
        store.create_custom_position(&bob, &custom("p1")).await.unwrap();

        let listed = store.list_custom_positions(&alice).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].user_id.as_deref(), Some("alice"));

        assert!(store.delete_custom_position(&alice, "p1").await.unwrap());
        assert!(!store.delete_custom_position(&alice, "p1").await.unwrap());
        assert_eq!(store.list_custom_positions(&bob).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_custom_does_not_overwrite() {
        let store = InMemoryStore::new();
        let alice = user("alice");
        store.create_custom_position(&alice, &custom("p1")).await.unwrap();

        let mut renamed = custom("p1");
        renamed.title = "Replaced".to_string();
        let second = store.create_custom_position(&alice, &renamed).await;
        assert!(matches!(second, Err(AppError::Conflict(_))));

        let listed = store.list_custom_positions(&alice).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Platform Engineer");
    }

    #[tokio::test]
    async fn test_catalog_insert_rejects_known_ids() {
        let store = InMemoryStore::new();
        store.insert_catalog_positions(&[custom("c1")]).await.unwrap();

        let second = store
            .insert_catalog_positions(&[custom("c2"), custom("c1")])
            .await;
        assert!(matches!(second, Err(AppError::Conflict(_))));
        assert_eq!(store.list_catalog_positions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_focus_toggle_is_idempotent() {
        let store = InMemoryStore::new();
        let alice = user("alice");
        store.add_focused(&alice, "p2").await.unwrap();
        store.add_focused(&alice, "p2").await.unwrap();
        store.add_focused(&alice, "p1").await.unwrap();
        assert_eq!(store.list_focused_ids(&alice).await.unwrap(), vec!["p1", "p2"]);

        store.remove_focused(&alice, "p2").await.unwrap();
        store.remove_focused(&alice, "p2").await.unwrap();
        assert_eq!(store.list_focused_ids(&alice).await.unwrap(), vec!["p1"]);
    }
}
