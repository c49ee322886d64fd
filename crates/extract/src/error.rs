// ABOUTME: Error types for description extraction operations.
// ABOUTME: Provides ExtractError enum with InvalidInput and Rules variants.

use std::fmt;
use thiserror::Error;

/// Errors that can occur during description extraction.
///
/// "Nothing found" is not an error: the extractor models it as `Ok(None)`.
/// Per-selector and per-heading failures are absorbed inside the strategies
/// and never reach the caller.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The supplied document is unusable (e.g. an empty tree with no root
    /// element). Continuing would produce meaningless results, so this is
    /// surfaced instead of being folded into "not found".
    #[error("invalid document: {0}")]
    InvalidInput(String),

    /// A rule set could not be parsed or violates a catalog invariant
    /// (e.g. a site category with no selectors).
    #[error("invalid rule set: {0}")]
    Rules(String),
}

impl ExtractError {
    /// Creates an InvalidInput error with a custom message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ExtractError::InvalidInput(msg.into())
    }

    /// Creates a Rules error from an underlying parse or validation failure.
    pub fn rules(err: impl fmt::Display) -> Self {
        ExtractError::Rules(err.to_string())
    }
}

impl ExtractError {
    /// Returns true if this is an InvalidInput error.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ExtractError::InvalidInput(_))
    }

    /// Returns true if this is a Rules error.
    pub fn is_rules(&self) -> bool {
        matches!(self, ExtractError::Rules(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = ExtractError::invalid_input("document tree has no root element");
        assert_eq!(
            err.to_string(),
            "invalid document: document tree has no root element"
        );

        let err = ExtractError::rules("category \"lever\" has no selectors");
        assert_eq!(
            err.to_string(),
            "invalid rule set: category \"lever\" has no selectors"
        );
    }

    #[test]
    fn test_predicates() {
        assert!(ExtractError::invalid_input("x").is_invalid_input());
        assert!(!ExtractError::invalid_input("x").is_rules());
        assert!(ExtractError::rules("x").is_rules());
    }
}
