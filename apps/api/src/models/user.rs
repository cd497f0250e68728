use std::fmt;

use crate::errors::AppError;

/// Caller identity as stored. Always trimmed and non-empty; every store call
/// takes one of these so the same caller never maps to two keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation("user_id cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let id = UserId::parse("  alice \t").unwrap();
        assert_eq!(id.as_str(), "alice");
        assert_eq!(id, UserId::parse("alice").unwrap());
    }

    #[test]
    fn test_blank_is_rejected() {
        assert!(matches!(UserId::parse("   "), Err(AppError::Validation(_))));
        assert!(matches!(UserId::parse(""), Err(AppError::Validation(_))));
    }
}
