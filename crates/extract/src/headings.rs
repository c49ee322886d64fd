// ABOUTME: Fallback extraction pass: keyword heading scan with tiered sibling lookup.
// ABOUTME: Finds keyword-bearing headings and pulls the content block that follows.

//! Heading-driven fallback strategy.
//!
//! When no catalog selector matches, the document is scanned in document
//! order for heading-like elements (h1-h6) and emphasis elements (b, strong)
//! whose lowercased text contains a keyword phrase. For each such heading,
//! three tiers are tried in order:
//!
//! 1. the heading's next sibling element,
//! 2. the heading's parent's next sibling element,
//! 3. the parent's element children after the heading, concatenated.
//!
//! The first tier producing non-empty normalized text wins. A heading whose
//! tiers all come up empty is abandoned and the scan continues with the next
//! keyword-bearing heading; only when no heading anywhere yields usable text
//! does the strategy report absence. Sites vary in whether the description
//! lives as a sibling, a cousin block, or interleaved among the heading's
//! siblings; the tiers approximate those shapes without computing layout.
//!
//! Each tier is a pure function over a node returning an optional string,
//! so a dead end for one candidate never aborts the scan.

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Node, Selector};
use tracing::trace;

use crate::catalog::KeywordSet;
use crate::normalize::normalize_text;

static HEADING_LIKE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5, h6, b, strong").unwrap());

/// Runs the heading strategy over a document.
///
/// Returns the follow-on text of the first keyword-bearing heading that has
/// any, or `None` if no heading produces usable text.
pub fn extract_by_headings(doc: &Html, keywords: &KeywordSet) -> Option<String> {
    for heading in doc.select(&HEADING_LIKE) {
        let label = heading.text().collect::<String>().to_lowercase();
        let phrase = match keywords.first_match(&label) {
            Some(p) => p,
            None => continue,
        };
        trace!(phrase, "keyword-bearing heading candidate");

        if let Some(text) = follow_on_text(heading) {
            return Some(text);
        }
        // All three tiers were empty for this heading; it is a dead end for
        // this candidate only, not for the whole pass.
    }
    None
}

/// Tiered lookup of the content block that follows a heading.
fn follow_on_text(heading: ElementRef) -> Option<String> {
    next_sibling_text(heading)
        .or_else(|| parent_next_sibling_text(heading))
        .or_else(|| trailing_children_text(heading))
}

/// Tier 1: text of the heading's next sibling element.
fn next_sibling_text(heading: ElementRef) -> Option<String> {
    let sibling = next_element_sibling(*heading)?;
    non_empty(normalize_text(&sibling.text().collect::<String>()))
}

/// Tier 2: text of the heading's parent's next sibling element.
fn parent_next_sibling_text(heading: ElementRef) -> Option<String> {
    let parent = heading.parent()?;
    let cousin = next_element_sibling(parent)?;
    non_empty(normalize_text(&cousin.text().collect::<String>()))
}

/// Tier 3: concatenated text of the parent's element children after the
/// heading itself.
fn trailing_children_text(heading: ElementRef) -> Option<String> {
    let parent = heading.parent()?;
    let mut past_heading = false;
    let mut combined = String::new();
    for child in parent.children() {
        if child.id() == heading.id() {
            past_heading = true;
            continue;
        }
        if !past_heading {
            continue;
        }
        if let Some(element) = ElementRef::wrap(child) {
            combined.push_str(&element.text().collect::<String>());
            combined.push('\n');
        }
    }
    non_empty(normalize_text(&combined))
}

/// First following sibling that is an element, skipping text and comments.
fn next_element_sibling(node: NodeRef<'_, Node>) -> Option<ElementRef<'_>> {
    let mut next = node.next_sibling();
    while let Some(candidate) = next {
        if let Some(element) = ElementRef::wrap(candidate) {
            return Some(element);
        }
        next = candidate.next_sibling();
    }
    None
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
