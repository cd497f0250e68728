use serde::Serialize;

use crate::models::position::{Position, PositionWithProgress};
use crate::skills::normalize::SkillLookup;

/// How much of one position's requirement list a user already covers.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Completion {
    pub percentage: u8,
    /// Required skills the user has, original casing and order.
    pub matching: Vec<String>,
    /// Required skills the user lacks, original casing and order.
    pub missing: Vec<String>,
}

impl Completion {
    fn empty() -> Self {
        Self {
            percentage: 0,
            matching: vec![],
            missing: vec![],
        }
    }
}

/// Splits `required_skills` into matching/missing against `user_skills` and
/// computes the rounded completion percentage.
///
/// A position with no requirements reports 0%, not 100%. Duplicates in
/// `required_skills` are kept and counted individually. Rounding is
/// half-away-from-zero, so 3/8 becomes 38.
pub fn compute_completion<S: AsRef<str>>(required_skills: &[String], user_skills: &[S]) -> Completion {
    if required_skills.is_empty() {
        return Completion::empty();
    }

    let owned = SkillLookup::new(user_skills);

    let (matching, missing): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .cloned()
        .partition(|skill| owned.contains(skill));

    let percentage = rounded_percent(matching.len(), required_skills.len());

    Completion {
        percentage,
        matching,
        missing,
    }
}

/// `round(100 * part / whole)`, half away from zero. `whole` must be non-zero.
fn rounded_percent(part: usize, whole: usize) -> u8 {
    ((part as f64 / whole as f64) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Attaches progress to every position, preserving input order.
pub fn with_progress<S: AsRef<str>>(
    positions: &[Position],
    user_skills: &[S],
) -> Vec<PositionWithProgress> {
    positions
        .iter()
        .map(|position| {
            let Completion {
                percentage,
                matching,
                missing,
            } = compute_completion(&position.required_skills, user_skills);
            PositionWithProgress {
                position: position.clone(),
                completion_percentage: percentage,
                matching_skills: matching,
                missing_skills: missing,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_one_of_three_rounds_to_33() {
        let result = compute_completion(
            &labels(&["React", "Node.js", "SQL"]),
            &labels(&["react", "Python"]),
        );
        assert_eq!(result.percentage, 33);
        assert_eq!(result.matching, labels(&["React"]));
        assert_eq!(result.missing, labels(&["Node.js", "SQL"]));
    }

    #[test]
    fn test_two_of_three_rounds_to_67() {
        let result = compute_completion(
            &labels(&["React", "Node.js", "SQL"]),
            &labels(&["react", "sql"]),
        );
        assert_eq!(result.percentage, 67);
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        // 1/8 = 12.5 -> 13, 3/8 = 37.5 -> 38
        let required = labels(&["a", "b", "c", "d", "e", "f", "g", "h"]);
        assert_eq!(compute_completion(&required, &labels(&["a"])).percentage, 13);
        assert_eq!(compute_completion(&required, &labels(&["a", "b", "c"])).percentage, 38);
    }

    #[test]
    fn test_empty_requirements_is_zero_not_hundred() {
        let result = compute_completion(&[], &labels(&["React"]));
        assert_eq!(result, Completion::empty());
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let result = compute_completion(&labels(&["React ", "REACT"]), &labels(&["react"]));
        assert_eq!(result.percentage, 100);
        assert_eq!(result.matching, labels(&["React ", "REACT"]));
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_duplicates_are_counted_individually() {
        let result = compute_completion(&labels(&["Git", "Git", "Docker"]), &labels(&["git"]));
        assert_eq!(result.matching, labels(&["Git", "Git"]));
        assert_eq!(result.missing, labels(&["Docker"]));
        assert_eq!(result.percentage, 67);
    }

    #[test]
    fn test_partition_and_bounds_hold() {
        let required = labels(&["Go", "Rust", "SQL", "go", "Kafka"]);
        let users: Vec<Vec<String>> = vec![
            vec![],
            labels(&["GO"]),
            labels(&["rust", "sql", "kafka"]),
            labels(&["go", "rust", "sql", "kafka"]),
        ];
        for user in users {
            let result = compute_completion(&required, &user);
            assert!(result.percentage <= 100);
            assert_eq!(result.percentage == 0, result.matching.is_empty());
            assert_eq!(result.percentage == 100, result.missing.is_empty());

            let mut combined: Vec<String> =
                result.matching.iter().chain(&result.missing).cloned().collect();
            let mut expected = required.clone();
            combined.sort();
            expected.sort();
            assert_eq!(combined, expected);
        }
    }

    #[test]
    fn test_with_progress_preserves_order() {
        let positions = vec![
            Position {
                id: "a".to_string(),
                title: "Data Analyst".to_string(),
                industry: "Data Science".to_string(),
                required_skills: labels(&["SQL", "Excel"]),
                description: None,
                company: None,
                is_custom: false,
                user_id: None,
            },
            Position {
                id: "b".to_string(),
                title: "Untitled".to_string(),
                industry: "Other".to_string(),
                required_skills: vec![],
                description: None,
                company: None,
                is_custom: false,
                user_id: None,
            },
        ];
        let view = with_progress(&positions, &["sql"]);
        assert_eq!(view[0].position.id, "a");
        assert_eq!(view[0].completion_percentage, 50);
        assert_eq!(view[1].completion_percentage, 0);
    }
}
