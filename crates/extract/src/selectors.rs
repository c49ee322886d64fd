// ABOUTME: Primary extraction pass: the catalog selector strategy.
// ABOUTME: Tries selectors in catalog order and returns the first hit's text.

//! Catalog-driven selector strategy.
//!
//! The primary extraction pass walks the flattened selector catalog in
//! category-then-entry order. The first selector that matches wins: the text
//! content of all its matches is concatenated (each followed by a newline),
//! normalized, and returned. Later selectors are never merged in.
//!
//! Each attempt is isolated: a selector that fails to compile is logged and
//! skipped, so one broken catalog entry can never abort the pass. Site markup
//! is unstable and unversioned; first-match-wins keeps the result
//! deterministic without scoring or ranking candidates.

use scraper::Html;
use tracing::{debug, trace};

use crate::catalog::SelectorCatalog;
use crate::compiled::get_or_compile;
use crate::normalize::normalize_text;

/// Outcome of trying a single catalog selector.
///
/// Faults are folded away locally instead of unwinding; the strategy is a
/// fold over attempts that stops at the first `Hit`.
enum Attempt {
    /// The selector matched and produced non-empty normalized text.
    Hit(String),
    /// The selector compiled but matched nothing usable.
    Miss,
    /// The selector is malformed or unsupported by the engine.
    Fault,
}

/// Runs the selector strategy over a document.
///
/// Returns the first catalog selector's combined normalized text, or `None`
/// if every selector missed or faulted, so the caller can fall through to
/// the heading strategy.
pub fn extract_by_catalog(doc: &Html, catalog: &SelectorCatalog) -> Option<String> {
    for css in catalog.flatten() {
        match attempt_selector(doc, css) {
            Attempt::Hit(text) => {
                trace!(selector = css, "catalog selector matched");
                return Some(text);
            }
            Attempt::Miss => {}
            Attempt::Fault => {
                debug!(selector = css, "skipping selector that failed to compile");
            }
        }
    }
    None
}

fn attempt_selector(doc: &Html, css: &str) -> Attempt {
    let selector = match get_or_compile(css) {
        Some(s) => s,
        None => return Attempt::Fault,
    };

    let mut combined = String::new();
    let mut matched = false;
    for element in doc.select(&selector) {
        matched = true;
        combined.push_str(&element.text().collect::<String>());
        combined.push('\n');
    }
    if !matched {
        return Attempt::Miss;
    }

    let text = normalize_text(&combined);
    if text.is_empty() {
        // Matched elements with no text are useless as a description;
        // treated as a miss so later selectors still get a chance.
        Attempt::Miss
    } else {
        Attempt::Hit(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SelectorCatalog, SelectorGroup};
    use pretty_assertions::assert_eq;

    fn catalog(entries: &[(&str, &[&str])]) -> SelectorCatalog {
        SelectorCatalog::from_groups(
            entries
                .iter()
                .map(|(category, selectors)| SelectorGroup {
                    category: category.to_string(),
                    selectors: selectors.iter().map(|s| s.to_string()).collect(),
                })
                .collect(),
        )
        .unwrap()
    }

    const SAMPLE_HTML: &str = r#"
        <html><body>
            <div class="jobs-description__content">
                <p>Build   things.</p>
            </div>
            <div class="job-description"><p>Generic text.</p></div>
            <div class="duplicate">First</div>
            <div class="duplicate">Second</div>
            <div class="hollow"></div>
        </body></html>
    "#;

    #[test]
    fn test_first_selector_in_catalog_order_wins() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let cat = catalog(&[
            ("linkedin", &["div.jobs-description__content"]),
            ("generic", &["div.job-description"]),
        ]);
        assert_eq!(extract_by_catalog(&doc, &cat), Some("Build things.".to_string()));
    }

    #[test]
    fn test_all_matches_of_winning_selector_are_concatenated() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let cat = catalog(&[("generic", &["div.duplicate"])]);
        assert_eq!(
            extract_by_catalog(&doc, &cat),
            Some("First\nSecond".to_string())
        );
    }

    #[test]
    fn test_invalid_selector_is_skipped() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let cat = catalog(&[("generic", &["div[[broken", "div.job-description"])]);
        assert_eq!(
            extract_by_catalog(&doc, &cat),
            Some("Generic text.".to_string())
        );
    }

    #[test]
    fn test_empty_match_falls_through_to_next_selector() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let cat = catalog(&[("generic", &["div.hollow", "div.job-description"])]);
        assert_eq!(
            extract_by_catalog(&doc, &cat),
            Some("Generic text.".to_string())
        );
    }

    #[test]
    fn test_no_match_returns_none() {
        let doc = Html::parse_document(SAMPLE_HTML);
        let cat = catalog(&[("generic", &["div.absent", "section.also-absent"])]);
        assert_eq!(extract_by_catalog(&doc, &cat), None);
    }
}
