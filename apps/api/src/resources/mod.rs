//! Learning resources for missing skills.
//!
//! Presentation-only: recommendations never feed back into the gap
//! computation. `AppState` holds an `Arc<dyn ResourceRecommender>` so an
//! external course provider can replace the built-in table.

pub mod catalog;
pub mod handlers;

use std::collections::HashSet;

use async_trait::async_trait;
use serde::Serialize;

use crate::errors::AppError;
use crate::resources::catalog::{LearningResource, Platform, LEARNING_RESOURCES};
use crate::skills::normalize::normalize;

/// Below this many matches the list is padded with general courses.
const MIN_RESULTS: usize = 3;

/// A course as returned to clients.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    pub platform: Platform,
    pub url: String,
    pub description: String,
}

impl From<&LearningResource> for CourseRecord {
    fn from(r: &LearningResource) -> Self {
        Self {
            id: r.id.to_string(),
            title: r.title.to_string(),
            platform: r.platform,
            url: r.url.to_string(),
            description: r.description.to_string(),
        }
    }
}

#[async_trait]
pub trait ResourceRecommender: Send + Sync {
    async fn recommend(&self, skills: &[String], limit: usize)
        -> Result<Vec<CourseRecord>, AppError>;
}

/// Recommender over the built-in `LEARNING_RESOURCES` table.
pub struct CatalogRecommender;

#[async_trait]
impl ResourceRecommender for CatalogRecommender {
    async fn recommend(
        &self,
        skills: &[String],
        limit: usize,
    ) -> Result<Vec<CourseRecord>, AppError> {
        Ok(resources_for_skills(LEARNING_RESOURCES, skills, limit)
            .into_iter()
            .map(CourseRecord::from)
            .collect())
    }
}

/// Ranks `table` against `skills`.
///
/// A resource scores one point per distinct tag matched by any skill. A tag
/// matches a normalized skill if it contains the whole skill or any of its
/// words longer than two characters. Ties go to EdX first, then table order.
/// Titles are de-duplicated case-insensitively and the list is capped at
/// `limit`; fewer than three hits are padded with the first unused entries.
pub fn resources_for_skills<'a>(
    table: &'a [LearningResource],
    skills: &[String],
    limit: usize,
) -> Vec<&'a LearningResource> {
    if skills.is_empty() {
        return Vec::new();
    }

    let normalized: Vec<String> = skills.iter().map(|s| normalize(s)).collect();

    let mut scored: Vec<(usize, &LearningResource)> = table
        .iter()
        .map(|resource| (match_score(resource, &normalized), resource))
        .filter(|(score, _)| *score > 0)
        .collect();

    // Stable sort keeps table order within equal (score, platform).
    scored.sort_by(|(score_a, a), (score_b, b)| {
        score_b
            .cmp(score_a)
            .then_with(|| platform_rank(a.platform).cmp(&platform_rank(b.platform)))
    });

    let mut seen_titles = HashSet::new();
    let mut results: Vec<&LearningResource> = Vec::new();
    for (_, resource) in scored {
        if results.len() >= limit {
            break;
        }
        if seen_titles.insert(resource.title.to_lowercase()) {
            results.push(resource);
        }
    }

    let floor = MIN_RESULTS.min(limit);
    if results.len() < floor {
        let missing = floor - results.len();
        let padding: Vec<&LearningResource> = table
            .iter()
            .filter(|r| !results.iter().any(|picked| picked.id == r.id))
            .take(missing)
            .collect();
        results.extend(padding);
    }

    results
}

fn match_score(resource: &LearningResource, normalized_skills: &[String]) -> usize {
    let mut matched: HashSet<&str> = HashSet::new();
    for skill in normalized_skills {
        let words: Vec<&str> = skill.split_whitespace().collect();
        for tag in resource.tags {
            let tag_lower = tag.to_lowercase();
            let hit = tag_lower == *skill
                || tag_lower.contains(skill.as_str())
                || words.iter().any(|w| w.len() > 2 && tag_lower.contains(*w));
            if hit {
                matched.insert(*tag);
            }
        }
    }
    matched.len()
}

fn platform_rank(platform: Platform) -> u8 {
    match platform {
        Platform::EdX => 0,
        Platform::Coursera => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_skills_returns_nothing() {
        assert!(resources_for_skills(LEARNING_RESOURCES, &[], 9).is_empty());
    }

    #[test]
    fn test_results_capped_at_limit() {
        let results = resources_for_skills(
            LEARNING_RESOURCES,
            &skills(&["JavaScript", "Python", "SQL", "Docker"]),
            9,
        );
        assert_eq!(results.len(), 9);
    }

    #[test]
    fn test_best_match_ranks_first_and_edx_wins_ties() {
        let results = resources_for_skills(LEARNING_RESOURCES, &skills(&["redux", "react"]), 9);
        // Only the Redux course carries both tags.
        assert_eq!(results[0].id, "redux-edx");
        let react_positions: Vec<&str> = results
            .iter()
            .filter(|r| r.id.starts_with("react-"))
            .map(|r| r.id)
            .collect();
        assert_eq!(react_positions, vec!["react-edx", "react-coursera"]);
    }

    #[test]
    fn test_word_level_matching() {
        // "mongo" is a word of the skill and a substring of the MongoDB tag.
        let results = resources_for_skills(LEARNING_RESOURCES, &skills(&["Mongo Atlas"]), 9);
        let ids: Vec<&str> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids[..2], ["nodejs-coursera", "mongodb-coursera"]);
    }

    #[test]
    fn test_pads_to_three_when_few_matches() {
        let results = resources_for_skills(LEARNING_RESOURCES, &skills(&["Cryptography"]), 9);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "cybersecurity-coursera");
        assert_eq!(results[1].id, LEARNING_RESOURCES[0].id);
        assert_eq!(results[2].id, LEARNING_RESOURCES[1].id);
    }

    #[test]
    fn test_edx_first_within_equal_scores() {
        let results = resources_for_skills(LEARNING_RESOURCES, &skills(&["Selenium"]), 9);
        let ids: Vec<&str> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["selenium-edx", "automation-coursera", "selenium-coursera"]);
    }

    #[test]
    fn test_full_table_ids_are_unique() {
        let ids: HashSet<&str> = LEARNING_RESOURCES.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), LEARNING_RESOURCES.len());
        assert_eq!(LEARNING_RESOURCES.len(), 54);
    }

    #[test]
    fn test_no_match_still_pads() {
        let results = resources_for_skills(LEARNING_RESOURCES, &skills(&["zz"]), 9);
        let ids: Vec<&str> = results.iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            LEARNING_RESOURCES[..3].iter().map(|r| r.id).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_catalog_recommender_maps_records() {
        let records = CatalogRecommender
            .recommend(&skills(&["Kubernetes"]), 2)
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.url.starts_with("https://")));
    }
}
