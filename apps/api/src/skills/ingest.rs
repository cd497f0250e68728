//! Ingestion boundary for skill data. Every shape a client or the store may
//! hand us is converted into `Skill` here, so the gap computation only ever
//! sees plain labels.

use std::collections::HashSet;

use crate::models::skill::{Skill, SkillRecord};
use crate::skills::normalize::normalize;

impl SkillRecord {
    /// Converts a wire record into the canonical form. A detailed record
    /// without a level is treated as `Intermediate`; a bare label has no level.
    pub fn into_skill(self) -> Skill {
        match self {
            SkillRecord::Label(label) => Skill { label, level: None },
            SkillRecord::Detailed { skill, level } => Skill {
                label: skill,
                level: Some(level.unwrap_or_default()),
            },
        }
    }
}

/// Stored skills re-enter the ingest path without changing level: a
/// levelless skill goes back as a bare label.
impl From<Skill> for SkillRecord {
    fn from(skill: Skill) -> Self {
        match skill.level {
            None => SkillRecord::Label(skill.label),
            level @ Some(_) => SkillRecord::Detailed {
                skill: skill.label,
                level,
            },
        }
    }
}

/// Trims display labels, drops blanks and drops later duplicates
/// (by normalized label, first occurrence wins).
pub fn sanitize_skills<I>(records: I) -> Vec<Skill>
where
    I: IntoIterator<Item = SkillRecord>,
{
    let mut seen = HashSet::new();
    records
        .into_iter()
        .map(SkillRecord::into_skill)
        .filter_map(|skill| {
            let label = skill.label.trim().to_string();
            if label.is_empty() || !seen.insert(normalize(&label)) {
                return None;
            }
            Some(Skill {
                label,
                level: skill.level,
            })
        })
        .collect()
}

/// Splits a free-text, comma-separated skill list as submitted by the
/// add-position form. Blank items are dropped; duplicates are kept.
pub fn split_skill_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Display labels of a skill set, in stored order.
pub fn skill_labels(skills: &[Skill]) -> Vec<String> {
    skills.iter().map(|s| s.label.clone()).collect()
}

/// Rebuilds a `Skill` from a stored `(label, level)` pair.
pub fn skill_from_row(label: String, level: Option<String>) -> Skill {
    Skill {
        label,
        level: level.and_then(|l| l.trim().parse().ok()),
    }
}
