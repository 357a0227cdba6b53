//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields
const MAX_NAME_LENGTH: usize = 200;

// ============================================================================
// LegendName
// ============================================================================

/// A validated legend name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LegendName(String);

impl LegendName {
    /// Create a new validated legend name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Legend name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Legend name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LegendName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LegendName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<LegendName> for String {
    fn from(name: LegendName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let name = LegendName::new("  Haldor  ").unwrap();
        assert_eq!(name.as_str(), "Haldor");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(LegendName::new("").is_err());
        assert!(LegendName::new("   ").is_err());
    }

    #[test]
    fn rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LENGTH + 1);
        assert!(matches!(
            LegendName::new(long),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let ok: LegendName = serde_json::from_str("\"Durge\"").unwrap();
        assert_eq!(ok.as_str(), "Durge");
        assert!(serde_json::from_str::<LegendName>("\"  \"").is_err());
    }
}
