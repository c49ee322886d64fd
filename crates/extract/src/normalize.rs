// ABOUTME: Text normalization pass applied to every extracted candidate string.
// ABOUTME: Collapses whitespace and newlines, then strips residual tag fragments.

//! Candidate text normalization.
//!
//! Both extraction strategies hand raw concatenated text content to this
//! module before returning it. The transform is order-sensitive:
//!
//! 1. trim leading/trailing whitespace,
//! 2. collapse runs of non-newline whitespace (spaces, tabs) to one space,
//! 3. collapse runs of newlines to one newline,
//! 4. strip residual `<...>` tag-like fragments and re-collapse the spaces
//!    that stripping may have joined,
//! 5. trim again.
//!
//! Horizontal whitespace is collapsed before newlines so that paragraph
//! boundaries survive as single newlines instead of being flattened into
//! spaces, and tag stripping runs last so it sees already-normalized text.

use once_cell::sync::Lazy;
use regex::Regex;

// Whitespace runs excluding newlines; newlines are collapsed separately.
static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\S\n]+").unwrap());
static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());
static TAG_FRAGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Normalizes extracted candidate text.
///
/// Empty input yields an empty string, never an error.
pub fn normalize_text(text: &str) -> String {
    let trimmed = text.trim();
    let spaced = HORIZONTAL_WS.replace_all(trimmed, " ");
    let lined = NEWLINE_RUNS.replace_all(&spaced, "\n");
    let stripped = TAG_FRAGMENT.replace_all(&lined, "");
    // Stripping a tag flanked by spaces leaves a double space; collapse once
    // more so the transform is idempotent.
    let respaced = HORIZONTAL_WS.replace_all(&stripped, " ");
    respaced.trim().to_string()
}
