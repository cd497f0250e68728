use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub db_max_connections: u32,
    /// Seed the built-in position catalog on boot when it is empty.
    pub seed_catalog_on_startup: bool,
    /// Maximum number of learning resources returned alongside a gap report.
    pub resource_limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            db_max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a positive integer")?,
            seed_catalog_on_startup: parse_flag(
                "SEED_CATALOG_ON_STARTUP",
                std::env::var("SEED_CATALOG_ON_STARTUP").ok().as_deref(),
            )?,
            resource_limit: std::env::var("RESOURCE_LIMIT")
                .unwrap_or_else(|_| "9".to_string())
                .parse::<usize>()
                .context("RESOURCE_LIMIT must be a non-negative integer")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_flag(key: &str, value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("0") | Some("false") | Some("no") => Ok(false),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some(other) => anyhow::bail!("{key} must be a boolean flag, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_to_false() {
        assert!(!parse_flag("X", None).unwrap());
        assert!(!parse_flag("X", Some("")).unwrap());
    }

    #[test]
    fn test_flag_accepts_common_spellings() {
        assert!(parse_flag("X", Some("TRUE")).unwrap());
        assert!(parse_flag("X", Some(" 1 ")).unwrap());
        assert!(!parse_flag("X", Some("no")).unwrap());
    }

    #[test]
    fn test_flag_rejects_garbage() {
        let err = parse_flag("SEED_CATALOG_ON_STARTUP", Some("maybe")).unwrap_err();
        assert!(err.to_string().contains("SEED_CATALOG_ON_STARTUP"));
    }
}
