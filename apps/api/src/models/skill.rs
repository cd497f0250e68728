use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Self-reported proficiency. Display-only: the gap computation ignores it.
///
/// Stored as its variant name; parsing is case-insensitive.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Display, EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

/// Canonical skill record. Everything past the ingestion boundary uses this.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
}

/// Wire shape accepted for a profile skill: either a bare label or a
/// `{skill, level}` record.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SkillRecord {
    Label(String),
    Detailed {
        skill: String,
        #[serde(default)]
        level: Option<SkillLevel>,
    },
}

/// A user's stored skill set.
#[derive(Debug, Clone, Serialize, Default)]
pub struct SkillProfile {
    pub skills: Vec<Skill>,
    pub updated_at: Option<DateTime<Utc>>,
}
