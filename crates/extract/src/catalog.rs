// ABOUTME: Rule data models: the ordered selector catalog and the keyword set.
// ABOUTME: Defines serde-loadable RuleSet with ordering and non-empty invariants.

//! Extraction rule data models.
//!
//! A [`RuleSet`] bundles the two static inputs of the extractor:
//!
//! - [`SelectorCatalog`]: an ordered list of site categories, each carrying an
//!   ordered list of CSS selectors. Order is precedence: flattening the
//!   catalog preserves category-then-entry order, and the selector strategy
//!   stops at the first selector that matches.
//! - [`KeywordSet`]: an ordered list of lowercase phrases that mark a heading
//!   as a likely description section title. Matching is case-insensitive
//!   substring containment.
//!
//! Rules are plain ordered data, not a type per site; a new site category is
//! a JSON edit, not a code change.

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// One site category and its ordered selector list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorGroup {
    /// Site-category label, e.g. "linkedin" or "generic".
    pub category: String,
    /// Selectors to try in order within this category.
    pub selectors: Vec<String>,
}

/// The ordered table of site-category selector groups.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectorCatalog {
    groups: Vec<SelectorGroup>,
}

impl SelectorCatalog {
    /// Builds a catalog from groups, validating that no category is empty.
    pub fn from_groups(groups: Vec<SelectorGroup>) -> Result<Self, ExtractError> {
        let catalog = SelectorCatalog { groups };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the catalog invariants: at least one category, no empty category.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.groups.is_empty() {
            return Err(ExtractError::rules("selector catalog has no categories"));
        }
        for group in &self.groups {
            if group.selectors.is_empty() {
                return Err(ExtractError::rules(format!(
                    "category {:?} has no selectors",
                    group.category
                )));
            }
        }
        Ok(())
    }

    /// Iterates all selectors in category-then-entry order.
    pub fn flatten(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|g| g.selectors.iter().map(String::as_str))
    }

    /// Iterates the groups in catalog order.
    pub fn groups(&self) -> impl Iterator<Item = &SelectorGroup> {
        self.groups.iter()
    }

    /// Returns the number of categories.
    pub fn category_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the total number of selectors across all categories.
    pub fn selector_count(&self) -> usize {
        self.groups.iter().map(|g| g.selectors.len()).sum()
    }

    /// Returns true if the catalog has no categories.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Ordered lowercase phrases that mark a heading as a description title.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct KeywordSet {
    phrases: Vec<String>,
}

impl KeywordSet {
    /// Builds a keyword set, lowercasing and trimming each phrase and
    /// dropping any that end up empty.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        KeywordSet { phrases }
    }

    /// Returns the first phrase contained in `text`, which the caller is
    /// expected to have lowercased already. Phrase order decides which one
    /// wins when several are present.
    pub fn first_match<'a>(&'a self, text: &str) -> Option<&'a str> {
        self.phrases
            .iter()
            .find(|p| text.contains(p.as_str()))
            .map(String::as_str)
    }

    /// Iterates the phrases in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Returns the number of phrases.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns true if there are no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(phrases: Vec<String>) -> Self {
        KeywordSet::new(phrases)
    }
}

impl From<KeywordSet> for Vec<String> {
    fn from(set: KeywordSet) -> Self {
        set.phrases
    }
}

/// The complete static configuration of the extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSet {
    /// Ordered site-category selector table for the primary pass.
    pub catalog: SelectorCatalog,
    /// Heading keyword phrases for the fallback pass.
    pub keywords: KeywordSet,
}

impl RuleSet {
    /// Parses a rule set from JSON and validates the catalog invariants.
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        let rules: RuleSet = serde_json::from_str(json).map_err(ExtractError::rules)?;
        rules.catalog.validate()?;
        Ok(rules)
    }
}
