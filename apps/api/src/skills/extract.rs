//! Skill extraction from free text such as a pasted résumé.
//!
//! Labels come from a fixed vocabulary. A label matches only as a whole
//! token: the characters on either side must not be alphanumeric, so
//! "JavaScript" never yields "Java" and "React" never yields "R". Longer
//! labels claim their span first ("Vue.js" hides "Vue" at the same spot).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::skill::{SkillLevel, SkillRecord};
use crate::skills::normalize::normalize;

pub const SKILLS_VOCABULARY: &[&str] = &[
    // Languages
    "JavaScript", "TypeScript", "Python", "Java", "C++", "C#", "Go", "Rust",
    "Swift", "Kotlin", "Ruby", "PHP", "Perl", "Scala", "R", "MATLAB", "Julia",
    "Dart", "Lua", "Haskell", "Erlang", "Elixir", "Clojure", "F#", "Objective-C",
    // Web frameworks
    "React", "Vue.js", "Vue", "Angular", "Next.js", "Node.js", "Express",
    "Django", "Flask", "FastAPI", "Spring Boot", "Spring", "ASP.NET", "Laravel",
    "Symfony", "Ruby on Rails", "Rails", "Ember.js", "Svelte", "Nuxt.js",
    "Gatsby", "Remix", "SvelteKit",
    // Frontend
    "HTML", "HTML5", "CSS", "CSS3", "SASS", "SCSS", "LESS", "Tailwind CSS",
    "Bootstrap", "Material-UI", "MUI", "Styled Components", "Webpack", "Vite",
    "Parcel", "Babel", "ESLint", "Prettier",
    // Backend
    "REST API", "REST", "GraphQL", "gRPC", "WebSocket", "SOAP", "Microservices",
    "Serverless", "Lambda", "API Gateway",
    // Databases
    "MongoDB", "PostgreSQL", "MySQL", "Redis", "SQLite", "Oracle", "SQL Server",
    "Cassandra", "DynamoDB", "Firebase", "Firestore", "Elasticsearch", "Neo4j",
    "CouchDB", "MariaDB",
    // Cloud and DevOps
    "AWS", "Azure", "GCP", "Google Cloud", "Docker", "Kubernetes", "K8s",
    "CI/CD", "Jenkins", "GitLab CI", "GitHub Actions", "Travis CI", "CircleCI",
    "Terraform", "Ansible", "Chef", "Puppet", "Vagrant",
    "Linux", "Unix", "Bash", "Shell Scripting", "PowerShell",
    // Tooling
    "Git", "GitHub", "GitLab", "Bitbucket", "SVN", "Mercurial",
    "Jira", "Confluence", "Trello", "Asana", "Slack", "Microsoft Teams",
    // Testing
    "Jest", "Mocha", "Chai", "Cypress", "Selenium", "Playwright", "Pytest",
    "JUnit", "TestNG", "RSpec", "PHPUnit", "XCTest",
    // Mobile
    "React Native", "Flutter", "Ionic", "Xamarin", "Android", "iOS", "SwiftUI",
    "Kotlin Multiplatform", "Cordova", "PhoneGap",
    // Data science and ML
    "Machine Learning", "ML", "Deep Learning", "Neural Networks", "TensorFlow",
    "PyTorch", "Keras", "Scikit-learn", "Pandas", "NumPy", "Matplotlib",
    "Seaborn", "Jupyter", "Data Science", "Data Analysis", "Statistics",
    "NLP", "Natural Language Processing", "Computer Vision", "OpenCV",
    // Big data
    "Hadoop", "Spark", "Kafka", "Hive", "Pig", "HBase", "Storm", "Flink",
    // Design
    "Figma", "Adobe XD", "Sketch", "Photoshop", "Illustrator", "InDesign",
    "UI/UX", "User Research", "Prototyping", "Design Systems", "Wireframing",
    // Methodologies
    "Agile", "Scrum", "Kanban", "Waterfall", "DevOps", "Lean", "SAFe",
    // Soft skills
    "Project Management", "Team Leadership", "Communication", "Problem Solving",
    "Critical Thinking", "Collaboration", "Time Management", "Adaptability",
    "Mentoring", "Code Review", "Technical Writing", "Presentation Skills",
    // Other
    "Blockchain", "Ethereum", "Solidity", "Smart Contracts", "Cryptocurrency",
    "IoT", "Internet of Things", "Arduino", "Raspberry Pi",
    "Game Development", "Unity", "Unreal Engine", "Cocos2d",
    "Cybersecurity", "Penetration Testing", "Ethical Hacking", "Network Security",
];

// Compile-time constant patterns; the `expect`s cannot fire.
static YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\+?\s*(?:years?|yrs?)\b").expect("YEARS: constant pattern")
});
/// Allowed text between "5 years" and the skill that follows it. Never
/// crosses a line.
static YEARS_THEN_SKILL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:(?:of|with|in)[ \t]+)?(?:experience[ \t]*(?:(?:with|in)[ \t]+)?)?$")
        .expect("YEARS_THEN_SKILL: constant pattern")
});
/// Allowed text between a skill and the "5 years" after it.
static SKILL_THEN_YEARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t]*(?:experience|expertise)?[ \t:]*$")
        .expect("SKILL_THEN_YEARS: constant pattern")
});

/// A vocabulary skill found in the text.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExtractedSkill {
    pub skill: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
    /// Longest experience stated next to the skill, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<f64>,
}

impl ExtractedSkill {
    /// Skills with stated experience carry a level; the rest stay bare labels.
    pub fn into_record(self) -> SkillRecord {
        match self.level {
            Some(level) => SkillRecord::Detailed {
                skill: self.skill,
                level: Some(level),
            },
            None => SkillRecord::Label(self.skill),
        }
    }
}

pub fn level_for_years(years: f64) -> SkillLevel {
    match years {
        y if y < 1.0 => SkillLevel::Beginner,
        y if y < 3.0 => SkillLevel::Intermediate,
        y if y < 6.0 => SkillLevel::Advanced,
        _ => SkillLevel::Expert,
    }
}

/// Finds vocabulary skills in `text`, in vocabulary order.
pub fn extract_skills(text: &str) -> Vec<ExtractedSkill> {
    extract_with_vocabulary(text, SKILLS_VOCABULARY)
}

fn extract_with_vocabulary(text: &str, vocabulary: &[&str]) -> Vec<ExtractedSkill> {
    let lower = text.to_lowercase();

    let year_mentions: Vec<(usize, usize, f64)> = YEARS
        .captures_iter(&lower)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let years = cap[1].parse::<f64>().ok()?;
            Some((whole.start(), whole.end(), years))
        })
        .collect();

    let mut by_length: Vec<(usize, &str)> = vocabulary.iter().copied().enumerate().collect();
    by_length.sort_by(|(_, a), (_, b)| b.len().cmp(&a.len()));

    let mut claimed: Vec<(usize, usize)> = Vec::new();
    let mut seen_keys = HashSet::new();
    let mut found: Vec<(usize, ExtractedSkill)> = Vec::new();

    for (order, label) in by_length {
        let key = normalize(label);
        if key.is_empty() || !seen_keys.insert(key.clone()) {
            continue;
        }

        let spans: Vec<(usize, usize)> = lower
            .match_indices(key.as_str())
            .map(|(start, m)| (start, start + m.len()))
            .filter(|&(start, end)| is_token(&lower, start, end))
            .filter(|&(start, end)| !claimed.iter().any(|&(s, e)| s <= start && end <= e))
            .collect();
        if spans.is_empty() {
            continue;
        }

        let years = spans
            .iter()
            .flat_map(|&span| stated_years(&lower, span, &year_mentions))
            .fold(None, |best: Option<f64>, y| Some(best.map_or(y, |b| b.max(y))));

        claimed.extend(spans);
        found.push((
            order,
            ExtractedSkill {
                skill: label.to_string(),
                level: years.map(level_for_years),
                years,
            },
        ));
    }

    found.sort_by_key(|(order, _)| *order);
    found.into_iter().map(|(_, skill)| skill).collect()
}

fn is_token(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Year counts phrased as "5 years of X" or "X: 5 years" around one span.
fn stated_years<'a>(
    text: &'a str,
    (start, end): (usize, usize),
    mentions: &'a [(usize, usize, f64)],
) -> impl Iterator<Item = f64> + 'a {
    mentions.iter().filter_map(move |&(m_start, m_end, years)| {
        let before = m_end <= start && YEARS_THEN_SKILL.is_match(&text[m_end..start]);
        let after = end <= m_start && SKILL_THEN_YEARS.is_match(&text[end..m_start]);
        (before || after).then_some(years)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(found: &[ExtractedSkill]) -> Vec<&str> {
        found.iter().map(|s| s.skill.as_str()).collect()
    }

    #[test]
    fn test_javascript_does_not_yield_java_or_r() {
        let found = extract_skills("I have 5 years of JavaScript experience");
        assert_eq!(names(&found), vec!["JavaScript"]);
        assert_eq!(found[0].years, Some(5.0));
        assert_eq!(found[0].level, Some(SkillLevel::Advanced));
    }

    #[test]
    fn test_java_and_javascript_side_by_side() {
        let found = extract_skills("I know Java and JavaScript");
        assert_eq!(names(&found), vec!["JavaScript", "Java"]);
        assert!(found.iter().all(|s| s.years.is_none() && s.level.is_none()));
    }

    #[test]
    fn test_react_does_not_yield_r() {
        let found = extract_skills("I use React for frontend development");
        assert_eq!(names(&found), vec!["React"]);
    }

    #[test]
    fn test_standalone_r() {
        let found = extract_skills("I know R programming language");
        assert!(names(&found).contains(&"R"));
    }

    #[test]
    fn test_list_with_punctuated_labels() {
        let found = extract_skills("I have experience with Python, JavaScript, React, and Node.js");
        assert_eq!(names(&found), vec!["JavaScript", "Python", "React", "Node.js"]);
    }

    #[test]
    fn test_longer_label_claims_its_span() {
        let found = extract_skills("Built dashboards in Vue.js");
        assert_eq!(names(&found), vec!["Vue.js"]);

        let both = extract_skills("Vue.js at work, plain Vue on weekends");
        assert_eq!(names(&both), vec!["Vue.js", "Vue"]);
    }

    #[test]
    fn test_years_after_skill_and_longest_wins() {
        let text = "Python: 2 years\nSQL experience 4 yrs\nPython expertise: 7 years";
        let found = extract_skills(text);
        let python = found.iter().find(|s| s.skill == "Python").unwrap();
        assert_eq!(python.years, Some(7.0));
        assert_eq!(python.level, Some(SkillLevel::Expert));
        let sql_server = found.iter().find(|s| s.skill == "SQL Server");
        assert!(sql_server.is_none());
    }

    #[test]
    fn test_years_do_not_cross_lines() {
        let found = extract_skills("Kafka 4 yrs\nPython");
        let python = found.iter().find(|s| s.skill == "Python").unwrap();
        assert_eq!(python.years, None);
        let kafka = found.iter().find(|s| s.skill == "Kafka").unwrap();
        assert_eq!(kafka.years, Some(4.0));
    }

    #[test]
    fn test_unrelated_years_are_not_attached() {
        let found = extract_skills("Docker. Worked 3 years at a bank");
        assert_eq!(names(&found), vec!["Docker"]);
        assert_eq!(found[0].years, None);
    }

    #[test]
    fn test_level_thresholds() {
        assert_eq!(level_for_years(0.5), SkillLevel::Beginner);
        assert_eq!(level_for_years(1.0), SkillLevel::Intermediate);
        assert_eq!(level_for_years(3.0), SkillLevel::Advanced);
        assert_eq!(level_for_years(6.0), SkillLevel::Expert);
    }

    #[test]
    fn test_into_record_keeps_levelless_as_label() {
        let bare = ExtractedSkill {
            skill: "Git".to_string(),
            level: None,
            years: None,
        };
        assert_eq!(bare.into_record(), SkillRecord::Label("Git".to_string()));
    }

    #[test]
    fn test_empty_text_finds_nothing() {
        assert!(extract_skills("   ").is_empty());
    }
}
