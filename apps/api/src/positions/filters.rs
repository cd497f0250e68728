use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::position::{Position, PositionWithProgress};
use crate::skills::normalize::SkillLookup;

/// Browse filters for the position list. All are optional.
#[derive(Debug, Clone, Default)]
pub struct PositionFilter {
    /// Exact industry; `None` or `"all"` disables the filter.
    pub industry: Option<String>,
    /// Keep positions requiring any of these skills.
    pub skills: Vec<String>,
    /// Keep positions where the user already has at least one skill.
    pub only_matching: bool,
}

pub fn apply_filters(
    positions: Vec<PositionWithProgress>,
    filter: &PositionFilter,
) -> Vec<PositionWithProgress> {
    let industry = filter
        .industry
        .as_deref()
        .map(str::trim)
        .filter(|i| !i.is_empty() && *i != "all");
    let wanted = SkillLookup::new(&filter.skills);

    positions
        .into_iter()
        .filter(|p| industry.map_or(true, |i| p.position.industry == i))
        .filter(|p| {
            wanted.is_empty()
                || p.position
                    .required_skills
                    .iter()
                    .any(|s| wanted.contains(s))
        })
        .filter(|p| !filter.only_matching || !p.matching_skills.is_empty())
        .collect()
}

/// Distinct industries, sorted.
pub fn industries(positions: &[Position]) -> Vec<String> {
    positions
        .iter()
        .map(|p| p.industry.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct required-skill labels as written, sorted.
pub fn distinct_skills(positions: &[Position]) -> Vec<String> {
    positions
        .iter()
        .flat_map(|p| p.required_skills.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Coarse progress bucket used for display.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    Excellent,
    Good,
    Fair,
    Starting,
}

impl ProgressBand {
    pub fn for_percentage(percentage: u8) -> Self {
        match percentage {
            p if p >= 75 => ProgressBand::Excellent,
            p if p >= 50 => ProgressBand::Good,
            p if p >= 25 => ProgressBand::Fair,
            _ => ProgressBand::Starting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gap::completion::with_progress;

    fn position(id: &str, industry: &str, skills: &[&str]) -> Position {
        Position {
            id: id.to_string(),
            title: format!("Role {id}"),
            industry: industry.to_string(),
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            description: None,
            company: None,
            is_custom: false,
            user_id: None,
        }
    }

    fn sample() -> Vec<Position> {
        vec![
            position("fe", "Software Engineering", &["React", "CSS"]),
            position("ds", "Data Science", &["Python", "SQL"]),
            position("ops", "DevOps", &["Docker", "Linux"]),
        ]
    }

    fn ids(view: &[PositionWithProgress]) -> Vec<&str> {
        view.iter().map(|p| p.position.id.as_str()).collect()
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let view = with_progress(&sample(), &["sql"]);
        let filtered = apply_filters(view, &PositionFilter::default());
        assert_eq!(ids(&filtered), vec!["fe", "ds", "ops"]);
    }

    #[test]
    fn test_industry_all_is_no_filter() {
        let view = with_progress(&sample(), &["sql"]);
        let filter = PositionFilter {
            industry: Some("all".to_string()),
            ..Default::default()
        };
        assert_eq!(apply_filters(view, &filter).len(), 3);
    }

    #[test]
    fn test_filters_compose() {
        let view = with_progress(&sample(), &["python"]);
        let filter = PositionFilter {
            industry: None,
            skills: vec!["docker".to_string(), "SQL ".to_string()],
            only_matching: true,
        };
        assert_eq!(ids(&apply_filters(view, &filter)), vec!["ds"]);
    }

    #[test]
    fn test_industry_filter_is_exact() {
        let view = with_progress(&sample(), &["python"]);
        let filter = PositionFilter {
            industry: Some("DevOps".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(view, &filter)), vec!["ops"]);
    }

    #[test]
    fn test_industries_and_skills_are_sorted_and_distinct() {
        let mut positions = sample();
        positions.push(position("be", "Software Engineering", &["SQL", "Go"]));
        assert_eq!(
            industries(&positions),
            vec!["Data Science", "DevOps", "Software Engineering"]
        );
        assert_eq!(
            distinct_skills(&positions),
            vec!["CSS", "Docker", "Go", "Linux", "Python", "React", "SQL"]
        );
    }

    #[test]
    fn test_progress_bands() {
        assert_eq!(ProgressBand::for_percentage(100), ProgressBand::Excellent);
        assert_eq!(ProgressBand::for_percentage(75), ProgressBand::Excellent);
        assert_eq!(ProgressBand::for_percentage(50), ProgressBand::Good);
        assert_eq!(ProgressBand::for_percentage(25), ProgressBand::Fair);
        assert_eq!(ProgressBand::for_percentage(24), ProgressBand::Starting);
    }
}
