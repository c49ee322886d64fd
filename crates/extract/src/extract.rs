// ABOUTME: DescriptionExtractor: the public extraction entry point.
// ABOUTME: Validates the document, then runs the selector and heading strategies in order.

//! The description extractor.
//!
//! [`DescriptionExtractor`] owns a [`RuleSet`] and exposes a single
//! operation: [`DescriptionExtractor::extract`]. It is pure with respect to
//! the document: no network, no storage, no node mutation, no state carried
//! between calls. Concurrent calls against different documents are
//! independent; the only shared structure is the read-mostly selector cache.
//!
//! Strategy precedence is fixed: the catalog selector pass runs first, and
//! the heading scan only runs when no selector produced text.

use scraper::{ElementRef, Html};
use tracing::trace;

use crate::catalog::RuleSet;
use crate::compiled::precompile_selectors;
use crate::error::ExtractError;
use crate::headings::extract_by_headings;
use crate::loader::load_builtin_rules;
use crate::selectors::extract_by_catalog;

/// Locates the job-description passage in a parsed HTML document.
#[derive(Debug, Clone)]
pub struct DescriptionExtractor {
    rules: RuleSet,
}

impl DescriptionExtractor {
    /// Creates an extractor from a rule set, warming the selector cache.
    pub fn new(rules: RuleSet) -> Self {
        precompile_selectors(rules.catalog.flatten());
        DescriptionExtractor { rules }
    }

    /// Creates an extractor using the builtin rules.
    pub fn builtin() -> Self {
        DescriptionExtractor::new(load_builtin_rules())
    }

    /// Returns the rule set this extractor runs with.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Extracts the description text from a document.
    ///
    /// Returns `Ok(Some(text))` with the cleaned description, `Ok(None)` when
    /// no strategy located a candidate, and `Err(ExtractError::InvalidInput)`
    /// only when the document itself is unusable. Per-selector and
    /// per-heading failures never surface here.
    pub fn extract(&self, doc: &Html) -> Result<Option<String>, ExtractError> {
        validate_document(doc)?;

        if let Some(text) = extract_by_catalog(doc, &self.rules.catalog) {
            return Ok(Some(text));
        }
        trace!("no catalog selector matched, falling back to heading scan");
        Ok(extract_by_headings(doc, &self.rules.keywords))
    }
}

impl Default for DescriptionExtractor {
    fn default() -> Self {
        DescriptionExtractor::builtin()
    }
}

/// Fails fast on documents that cannot hold a description at all.
fn validate_document(doc: &Html) -> Result<(), ExtractError> {
    doc.tree
        .root()
        .children()
        .find_map(ElementRef::wrap)
        .map(|_| ())
        .ok_or_else(|| ExtractError::invalid_input("document tree has no root element"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{KeywordSet, SelectorCatalog, SelectorGroup};
    use pretty_assertions::assert_eq;

    fn extractor() -> DescriptionExtractor {
        let catalog = SelectorCatalog::from_groups(vec![SelectorGroup {
            category: "generic".to_string(),
            selectors: vec!["div.job-description".to_string()],
        }])
        .unwrap();
        let keywords = KeywordSet::new(["responsibilities"]);
        DescriptionExtractor::new(RuleSet { catalog, keywords })
    }

    #[test]
    fn test_selector_strategy_takes_precedence() {
        let doc = Html::parse_document(
            r#"<html><body>
                <div class="job-description">From the catalog.</div>
                <h2>Responsibilities</h2>
                <p>From the heading scan.</p>
            </body></html>"#,
        );
        assert_eq!(
            extractor().extract(&doc).unwrap(),
            Some("From the catalog.".to_string())
        );
    }

    #[test]
    fn test_falls_back_to_heading_strategy() {
        let doc = Html::parse_document(
            r#"<html><body>
                <h2>Responsibilities</h2>
                <p>From the heading scan.</p>
            </body></html>"#,
        );
        assert_eq!(
            extractor().extract(&doc).unwrap(),
            Some("From the heading scan.".to_string())
        );
    }

    #[test]
    fn test_absence_is_ok_none() {
        let doc = Html::parse_document(
            r#"<html><body><p>Nothing to see.</p></body></html>"#,
        );
        assert_eq!(extractor().extract(&doc).unwrap(), None);
    }

    #[test]
    fn test_empty_tree_is_invalid_input() {
        let doc = Html::new_document();
        let err = extractor().extract(&doc).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_builtin_extractor_handles_linkedin_markup() {
        let doc = Html::parse_document(
            r#"<html><body>
                <div class="jobs-description__content">We build crawlers.</div>
            </body></html>"#,
        );
        let result = DescriptionExtractor::builtin().extract(&doc).unwrap();
        assert_eq!(result, Some("We build crawlers.".to_string()));
    }
}
