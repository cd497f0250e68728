use std::collections::HashSet;

/// Comparison key for a skill label: lower-cased, then trimmed.
/// Never used for display.
pub fn normalize(skill: &str) -> String {
    skill.to_lowercase().trim().to_string()
}

/// Set of normalized skill labels for case-insensitive membership tests.
#[derive(Debug, Clone, Default)]
pub struct SkillLookup {
    keys: HashSet<String>,
}

impl SkillLookup {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keys: labels.into_iter().map(|l| normalize(l.as_ref())).collect(),
        }
    }

    /// True if the normalized form of `label` is in the set.
    pub fn contains(&self, label: &str) -> bool {
        self.keys.contains(&normalize(label))
    }

    /// Membership test for a key that is already normalized.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
