//! Unified error types for the domain layer
//!
//! Reducer-style operations over the journal are total and never return
//! these; they are reserved for validated constructors, string parsing and
//! wizard/modal steps that are not allowed from the current state.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// State transition not allowed
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// Use this when a required field is empty or a value is outside the
    /// allowed range.
    ///
    /// # Example
    /// ```ignore
    /// if name.trim().is_empty() {
    ///     return Err(DomainError::validation("Legend name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for MomentKind {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "note" => Ok(Self::Note),
    ///             _ => Err(DomainError::parse(format!("Unknown moment type: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an invalid state transition error
    pub fn invalid_state_transition(msg: impl Into<String>) -> Self {
        Self::InvalidStateTransition(msg.into())
    }
}
