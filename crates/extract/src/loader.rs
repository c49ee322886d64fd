// ABOUTME: Loader for the builtin extraction rules from embedded JSON data.
// ABOUTME: Provides load_builtin_rules() to initialize the default RuleSet.

//! Builtin rule set loader.
//!
//! The default selector catalog and keyword set ship embedded in the binary;
//! no dynamic reconfiguration is required by the core. Callers that need
//! different rules construct a [`RuleSet`] themselves or parse one with
//! [`RuleSet::from_json`].

use crate::catalog::RuleSet;

/// Embedded JSON containing the builtin selector catalog and keyword set.
const BUILTIN_RULES_JSON: &str = include_str!("../data/rules.json");

/// Loads the builtin rule set from embedded JSON.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed or violates a catalog invariant.
pub fn load_builtin_rules() -> RuleSet {
    RuleSet::from_json(BUILTIN_RULES_JSON).expect("failed to parse builtin extraction rules")
}
