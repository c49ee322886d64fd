// ABOUTME: Main library entry point for the jobdesc description extractor.
// ABOUTME: Re-exports the public API: DescriptionExtractor, RuleSet, ExtractError, ExtractResponse.

//! jobdesc-extract - locates the job-description passage in unstructured HTML.
//!
//! This crate takes an already-parsed [`scraper::Html`] document and returns
//! the cleaned description text, or `None` when no strategy finds one. It
//! layers two heuristics: an ordered catalog of site-specific and generic CSS
//! selectors, then a keyword-driven heading scan with a tiered sibling
//! lookup. All candidate text passes through the same normalizer.
//!
//! # Example
//!
//! ```
//! use jobdesc_extract::DescriptionExtractor;
//! use scraper::Html;
//!
//! let doc = Html::parse_document(
//!     r#"<html><body><div class="job-description">Build crawlers.</div></body></html>"#,
//! );
//! let extractor = DescriptionExtractor::builtin();
//! let text = extractor.extract(&doc).unwrap();
//! assert_eq!(text.as_deref(), Some("Build crawlers."));
//! ```

pub mod catalog;
pub mod compiled;
pub mod error;
pub mod extract;
pub mod headings;
pub mod loader;
pub mod normalize;
pub mod response;
pub mod selectors;

pub use crate::catalog::{KeywordSet, RuleSet, SelectorCatalog, SelectorGroup};
pub use crate::error::ExtractError;
pub use crate::extract::DescriptionExtractor;
pub use crate::loader::load_builtin_rules;
pub use crate::normalize::normalize_text;
pub use crate::response::{ExtractResponse, NO_DESCRIPTION_MESSAGE};
