use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::position::Position;
use crate::skills::normalize::{normalize, SkillLookup};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// High if at least half the focused jobs need the skill, Medium if at
    /// least a quarter do (both thresholds rounded up), otherwise Low.
    /// High is checked first.
    pub fn classify(job_count: usize, total_focused: usize) -> Self {
        if job_count >= total_focused.div_ceil(2) {
            Priority::High
        } else if job_count >= total_focused.div_ceil(4) {
            Priority::Medium
        } else {
            Priority::Low
        }
    }
}

/// One missing skill aggregated across the focused positions.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SkillGap {
    /// Casing from the first focused position that lists it.
    pub skill: String,
    pub job_count: usize,
    /// `job_count / total_focused * 100`, unrounded.
    pub percentage: f64,
    pub priority: Priority,
}

/// Aggregates the skills the user is missing across `focused_positions`.
///
/// Result is sorted by `job_count` descending; equal counts are ordered by
/// normalized label so the output is deterministic.
pub fn compute_gaps<S: AsRef<str>>(focused_positions: &[Position], user_skills: &[S]) -> Vec<SkillGap> {
    if focused_positions.is_empty() {
        return Vec::new();
    }

    let total = focused_positions.len();
    let owned = SkillLookup::new(user_skills);

    // Each position counts once per skill, however often it repeats it.
    let per_position: Vec<SkillLookup> = focused_positions
        .iter()
        .map(|p| SkillLookup::new(&p.required_skills))
        .collect();

    let mut seen = HashSet::new();
    let mut gaps: Vec<(String, SkillGap)> = Vec::new();

    for skill in focused_positions.iter().flat_map(|p| &p.required_skills) {
        let key = normalize(skill);
        if !seen.insert(key.clone()) || owned.contains_key(&key) {
            continue;
        }

        let job_count = per_position.iter().filter(|s| s.contains_key(&key)).count();
        gaps.push((
            key,
            SkillGap {
                skill: skill.clone(),
                job_count,
                percentage: (job_count as f64 / total as f64) * 100.0,
                priority: Priority::classify(job_count, total),
            },
        ));
    }

    gaps.sort_by(|(key_a, a), (key_b, b)| {
        b.job_count
            .cmp(&a.job_count)
            .then_with(|| key_a.cmp(key_b))
    });

    gaps.into_iter().map(|(_, gap)| gap).collect()
}
