// ABOUTME: Serializable response envelope returned to the hosting application.
// ABOUTME: Maps extraction outcomes onto the {success, text?, error?} wire shape.

//! Response envelope for callers on the other side of a message boundary.
//!
//! The hosting application delivers a page snapshot and expects back a small
//! `{success, text?, error?}` object. Both "no match" and absorbed
//! per-candidate faults map to the same user-visible message; only an invalid
//! document is reported distinctly.

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Message shown when no strategy located a candidate.
pub const NO_DESCRIPTION_MESSAGE: &str = "no description detected";

/// The envelope sent back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractResponse {
    /// A successful extraction carrying the cleaned text.
    pub fn found(text: impl Into<String>) -> Self {
        ExtractResponse {
            success: true,
            text: Some(text.into()),
            error: None,
        }
    }

    /// No description was detected. Not distinguished from absorbed faults.
    pub fn not_found() -> Self {
        ExtractResponse {
            success: false,
            text: None,
            error: Some(NO_DESCRIPTION_MESSAGE.to_string()),
        }
    }

    /// A surfaced failure (invalid input or an unexpected error).
    pub fn failure(err: impl std::fmt::Display) -> Self {
        ExtractResponse {
            success: false,
            text: None,
            error: Some(err.to_string()),
        }
    }

    /// Builds the envelope from an extraction outcome.
    pub fn from_outcome(outcome: Result<Option<String>, ExtractError>) -> Self {
        match outcome {
            Ok(Some(text)) => ExtractResponse::found(text),
            Ok(None) => ExtractResponse::not_found(),
            Err(err) => ExtractResponse::failure(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_found_serializes_without_error_field() {
        let json = serde_json::to_string(&ExtractResponse::found("Build things.")).unwrap();
        assert_eq!(json, r#"{"success":true,"text":"Build things."}"#);
    }

    #[test]
    fn test_not_found_serializes_without_text_field() {
        let json = serde_json::to_string(&ExtractResponse::not_found()).unwrap();
        assert_eq!(
            json,
            r#"{"success":false,"error":"no description detected"}"#
        );
    }

    #[test]
    fn test_from_outcome() {
        assert_eq!(
            ExtractResponse::from_outcome(Ok(Some("t".to_string()))),
            ExtractResponse::found("t")
        );
        assert_eq!(
            ExtractResponse::from_outcome(Ok(None)),
            ExtractResponse::not_found()
        );

        let failed =
            ExtractResponse::from_outcome(Err(ExtractError::invalid_input("no root element")));
        assert!(!failed.success);
        assert_eq!(
            failed.error.as_deref(),
            Some("invalid document: no root element")
        );
    }

    #[test]
    fn test_deserialize_tolerates_missing_optionals() {
        let resp: ExtractResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.text.is_none());
        assert!(resp.error.is_none());
    }
}
