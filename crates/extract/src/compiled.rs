// ABOUTME: Pre-compiled CSS selector cache shared by the selector strategy.
// ABOUTME: Compiles each catalog selector once; invalid selectors cache as None.

//! Selector caching for efficient repeated document queries.
//!
//! CSS selector parsing is expensive relative to the actual matching, and the
//! catalog is retried in full on every document that reaches the fallback
//! path. This module compiles each selector string once and reuses it for all
//! subsequent queries. A selector that fails to compile is cached as `None`,
//! so a broken catalog entry costs one parse attempt total, not one per call.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;

/// Thread-safe cache of compiled CSS selectors.
///
/// Uses a RwLock for read-heavy workloads: after warm-up every access is a
/// cache hit under the shared lock.
static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Gets or compiles a CSS selector, caching the result.
///
/// Returns `Some(Selector)` if the selector is valid, `None` if invalid.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap();
    // Another thread may have inserted while we compiled.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

/// Precompiles a batch of selectors into the cache.
///
/// Called when an extractor is constructed so catalog selectors are warm
/// before the first document arrives.
pub fn precompile_selectors<I, S>(selectors: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cache = SELECTOR_CACHE.write().unwrap();
    for css in selectors {
        let css = css.as_ref();
        if !cache.contains_key(css) {
            let compiled = Selector::parse(css).ok();
            cache.insert(css.to_string(), compiled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector_is_cached() {
        assert!(get_or_compile("div.jobs-description__content").is_some());
        assert!(get_or_compile("div.jobs-description__content").is_some());
    }

    #[test]
    fn test_invalid_selector_returns_none() {
        assert!(get_or_compile("div[[unterminated").is_none());
        // Invalid selectors are cached too.
        assert!(get_or_compile("div[[unterminated").is_none());
    }

    #[test]
    fn test_precompile_selectors() {
        precompile_selectors(["h2", "strong", "div[data-qa='job-description']"]);
        assert!(get_or_compile("h2").is_some());
        assert!(get_or_compile("strong").is_some());
        assert!(get_or_compile("div[data-qa='job-description']").is_some());
    }
}
