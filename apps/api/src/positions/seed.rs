//! Built-in sample catalog and the administrative seeding action.

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::position::Position;
use crate::store::CareerStore;

struct SamplePosition {
    title: &'static str,
    industry: &'static str,
    company: &'static str,
    description: &'static str,
    required_skills: &'static [&'static str],
}

const SAMPLE_POSITIONS: &[SamplePosition] = &[
    SamplePosition {
        title: "Senior Frontend Developer",
        industry: "Software Engineering",
        company: "TechCorp",
        description: "Build responsive web applications with React and TypeScript and lead frontend architecture.",
        required_skills: &["JavaScript", "TypeScript", "React", "HTML", "CSS", "Git", "REST APIs", "Responsive Design"],
    },
    SamplePosition {
        title: "Frontend Developer",
        industry: "Software Engineering",
        company: "StartupXYZ",
        description: "Develop user-facing features together with designers and backend developers.",
        required_skills: &["JavaScript", "React", "HTML", "CSS", "Git", "Tailwind CSS"],
    },
    SamplePosition {
        title: "React Developer",
        industry: "Software Engineering",
        company: "Digital Solutions Inc",
        description: "Own the React component library and client-side state management.",
        required_skills: &["React", "JavaScript", "TypeScript", "Redux", "Git", "Webpack"],
    },
    SamplePosition {
        title: "Backend Developer",
        industry: "Software Engineering",
        company: "CloudTech",
        description: "Design and maintain REST services and their data stores.",
        required_skills: &["Node.js", "Python", "SQL", "REST APIs", "Git", "MongoDB", "Express"],
    },
    SamplePosition {
        title: "Senior Backend Engineer",
        industry: "Software Engineering",
        company: "Enterprise Systems",
        description: "Scale a microservice platform running on Kubernetes.",
        required_skills: &["Python", "Java", "Microservices", "Docker", "PostgreSQL", "Kubernetes", "CI/CD"],
    },
    SamplePosition {
        title: "Full Stack Developer",
        industry: "Software Engineering",
        company: "Innovation Labs",
        description: "Ship features end to end across a Node.js API and a React client.",
        required_skills: &["JavaScript", "Node.js", "React", "MongoDB", "Express", "REST APIs", "Git"],
    },
    SamplePosition {
        title: "Data Scientist",
        industry: "Data Science",
        company: "Analytics Corp",
        description: "Build predictive models and communicate findings to stakeholders.",
        required_skills: &["Python", "Machine Learning", "SQL", "Statistics", "Data Visualization", "Pandas", "NumPy"],
    },
    SamplePosition {
        title: "Machine Learning Engineer",
        industry: "Data Science",
        company: "AI Innovations",
        description: "Train, package and deploy deep learning models to production.",
        required_skills: &["Python", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Docker", "AWS"],
    },
    SamplePosition {
        title: "Data Analyst",
        industry: "Data Science",
        company: "Business Intelligence Co",
        description: "Turn raw business data into dashboards and reports.",
        required_skills: &["SQL", "Python", "Excel", "Data Visualization", "Statistics", "Tableau"],
    },
    SamplePosition {
        title: "DevOps Engineer",
        industry: "DevOps",
        company: "Cloud Infrastructure Inc",
        description: "Automate infrastructure and delivery pipelines on AWS.",
        required_skills: &["AWS", "Docker", "Kubernetes", "CI/CD", "Linux", "Terraform", "Git"],
    },
    SamplePosition {
        title: "Site Reliability Engineer",
        industry: "DevOps",
        company: "Scale Systems",
        description: "Keep production healthy through monitoring, automation and incident response.",
        required_skills: &["Kubernetes", "Docker", "Monitoring", "Linux", "Python", "AWS", "CI/CD"],
    },
    SamplePosition {
        title: "Cloud Engineer",
        industry: "DevOps",
        company: "MultiCloud Solutions",
        description: "Design secure multi-cloud networks and infrastructure as code.",
        required_skills: &["AWS", "Azure", "Terraform", "Docker", "Linux", "Networking", "Security"],
    },
    SamplePosition {
        title: "Product Manager",
        industry: "Product Management",
        company: "Product Co",
        description: "Define product strategy and drive delivery with engineering and design.",
        required_skills: &["Product Strategy", "Agile", "User Research", "Analytics", "Project Management", "Communication"],
    },
    SamplePosition {
        title: "Technical Product Manager",
        industry: "Product Management",
        company: "Tech Products Inc",
        description: "Bridge platform engineering and customers for a developer product.",
        required_skills: &["Product Strategy", "Technical Writing", "Agile", "System Design", "Analytics", "Communication"],
    },
    SamplePosition {
        title: "UI/UX Designer",
        industry: "UI/UX Design",
        company: "Design Studio",
        description: "Research, prototype and test user experiences.",
        required_skills: &["Figma", "User Research", "Prototyping", "Design Systems", "Wireframing", "Usability Testing"],
    },
    SamplePosition {
        title: "Product Designer",
        industry: "UI/UX Design",
        company: "Creative Labs",
        description: "Own interaction design from concept through implementation.",
        required_skills: &["Figma", "User Research", "Prototyping", "Design Systems", "Interaction Design", "HTML", "CSS"],
    },
    SamplePosition {
        title: "iOS Developer",
        industry: "Software Engineering",
        company: "Mobile Apps Co",
        description: "Build native iOS apps with SwiftUI and UIKit.",
        required_skills: &["Swift", "iOS", "Xcode", "UIKit", "SwiftUI", "Git", "REST APIs"],
    },
    SamplePosition {
        title: "Android Developer",
        industry: "Software Engineering",
        company: "Mobile Solutions",
        description: "Build native Android apps following Material Design.",
        required_skills: &["Kotlin", "Java", "Android", "Android Studio", "Git", "REST APIs", "Material Design"],
    },
    SamplePosition {
        title: "Software Engineer",
        industry: "Software Engineering",
        company: "General Tech",
        description: "Solve problems across the stack with strong CS fundamentals.",
        required_skills: &["Programming", "Algorithms", "Data Structures", "Git", "Problem Solving", "Communication"],
    },
    SamplePosition {
        title: "QA Engineer",
        industry: "Software Engineering",
        company: "Quality Assurance Inc",
        description: "Plan and automate testing for web products.",
        required_skills: &["Testing", "Automation", "Selenium", "Python", "Git", "Bug Tracking", "Test Planning"],
    },
];

/// The built-in catalog. Ids are derived from titles and are the same on
/// every call, so a second seed of the same table hits the primary key.
pub fn sample_positions() -> Vec<Position> {
    SAMPLE_POSITIONS
        .iter()
        .map(|s| Position {
            id: sample_id(s.title),
            title: s.title.to_string(),
            industry: s.industry.to_string(),
            required_skills: s.required_skills.iter().map(|k| k.to_string()).collect(),
            description: Some(s.description.to_string()),
            company: Some(s.company.to_string()),
            is_custom: false,
            user_id: None,
        })
        .collect()
}

/// `"UI/UX Designer"` becomes `"seed-ui-ux-designer"`.
fn sample_id(title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("seed-{slug}")
}

/// Seeds the catalog. Refuses with `Conflict` if any catalog position exists.
///
/// The emptiness check is a fast path only. Two concurrent seeds can both
/// pass it; the store then rejects the later batch on the fixed ids.
pub async fn seed_catalog(store: &dyn CareerStore) -> Result<usize, AppError> {
    let existing = store.list_catalog_positions().await?;
    if !existing.is_empty() {
        let message = format!(
            "Found {} existing positions. Skipping seed to avoid duplicates.",
            existing.len()
        );
        warn!("{message}");
        return Err(AppError::Conflict(message));
    }

    info!("Seeding {} catalog positions...", SAMPLE_POSITIONS.len());
    store.insert_catalog_positions(&sample_positions()).await
}
