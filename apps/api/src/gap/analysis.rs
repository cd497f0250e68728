//! Explicit recompute entry point. Callers re-invoke `recompute` from scratch
//! after any change to skills, focus set or position lists; nothing derived
//! here is cached or patched in place.

use std::collections::HashSet;

use serde::Serialize;

use crate::gap::aggregator::{compute_gaps, Priority, SkillGap};
use crate::gap::completion::with_progress;
use crate::models::position::{Position, PositionWithProgress};
use crate::models::skill::Skill;
use crate::positions::assembler::assemble;
use crate::skills::ingest::skill_labels;

/// Everything the analysis reads, already loaded.
pub struct AnalysisInputs<'a> {
    pub catalog: &'a [Position],
    pub custom: &'a [Position],
    pub user_id: &'a str,
    pub focused_ids: &'a HashSet<String>,
    pub user_skills: &'a [Skill],
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// Nothing focused yet. Clients show an empty state, not an error.
    NoFocusedPositions,
    /// Focused positions exist and the user covers every requirement.
    AllSkillsCovered,
    GapsFound,
}

#[derive(Debug, Clone, Copy, Serialize, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillGapAnalysis {
    pub status: AnalysisStatus,
    pub total_focused: usize,
    pub focused_positions: Vec<PositionWithProgress>,
    pub gaps: Vec<SkillGap>,
    pub priority_counts: PriorityCounts,
}

impl SkillGapAnalysis {
    /// Gap labels in ranked order, for the learning-resource lookup.
    pub fn missing_skill_labels(&self) -> Vec<String> {
        self.gaps.iter().map(|g| g.skill.clone()).collect()
    }
}

/// Runs the full pipeline: assemble the focused set, compute per-position
/// progress for it, aggregate the gaps.
pub fn recompute(inputs: &AnalysisInputs<'_>) -> SkillGapAnalysis {
    let user_skills = skill_labels(inputs.user_skills);
    let focused = assemble(
        inputs.catalog,
        inputs.custom,
        inputs.user_id,
        inputs.focused_ids,
    );

    let gaps = compute_gaps(&focused, &user_skills);
    let status = if focused.is_empty() {
        AnalysisStatus::NoFocusedPositions
    } else if gaps.is_empty() {
        AnalysisStatus::AllSkillsCovered
    } else {
        AnalysisStatus::GapsFound
    };

    let priority_counts = gaps.iter().fold(PriorityCounts::default(), |mut acc, gap| {
        match gap.priority {
            Priority::High => acc.high += 1,
            Priority::Medium => acc.medium += 1,
            Priority::Low => acc.low += 1,
        }
        acc
    });

    SkillGapAnalysis {
        status,
        total_focused: focused.len(),
        focused_positions: with_progress(&focused, &user_skills),
        gaps,
        priority_counts,
    }
}
