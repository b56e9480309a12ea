//! Unified error types for the domain layer
//!
//! Provides a common error type for parsing and validating route vocabulary
//! (skills, step types, quest ids) without forcing callers to use String errors.

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
}

impl DomainError {
    /// Creates a validation error for rule violations.
    ///
    /// Use this when a value is well-formed but outside the allowed range:
    /// - Target levels below 1
    /// - Blank identifiers
    ///
    /// # Example
    /// ```ignore
    /// if id.trim().is_empty() {
    ///     return Err(DomainError::validation("Quest id cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or alias.
    ///
    /// # Example
    /// ```ignore
    /// impl FromStr for StepType {
    ///     type Err = DomainError;
    ///     fn from_str(s: &str) -> Result<Self, Self::Err> {
    ///         match s {
    ///             "QUEST" => Ok(Self::Quest),
    ///             _ => Err(DomainError::parse(format!("Unknown step type: {}", s))),
    ///         }
    ///     }
    /// }
    /// ```
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("target level must be at least 1");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: target level must be at least 1"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown skill: Sailing");
        assert_eq!(err.to_string(), "Parse error: Unknown skill: Sailing");
    }
}
