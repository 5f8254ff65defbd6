//! Autocomplete for the search input.
//!
//! The key source is built from the full collection, never the filtered one:
//! every package as `<package>.*`, then every bare test name, deduplicated
//! with first occurrence winning.

use std::collections::HashSet;

use crate::descriptor::TestDescriptor;
use crate::search::PACKAGE_WILDCARD;

/// Minimum query length before suggestions show.
pub const MIN_TRIGGER_LEN: usize = 1;

/// Maximum number of suggestions offered.
pub const MAX_SUGGESTIONS: usize = 5;

/// Suggestion source for the search input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Autocomplete {
    keys: Vec<String>,
}

impl Autocomplete {
    /// Build the key source from the full test collection.
    pub fn from_tests(tests: &[TestDescriptor]) -> Self {
        let packages = tests
            .iter()
            .map(|t| format!("{}{}", t.package_name, PACKAGE_WILDCARD));
        let names = tests.iter().map(|t| t.name.clone());

        let mut seen = HashSet::new();
        let keys: Vec<String> = packages
            .chain(names)
            .filter(|key| seen.insert(key.clone()))
            .collect();

        Self { keys }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Ranked suggestions for `query`.
    ///
    /// Keys containing the query (case-insensitive) are candidates. Keys that
    /// start with the query come first, then keys containing it with matching
    /// case, then the rest. At most [`MAX_SUGGESTIONS`] are returned.
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        if query.chars().count() < MIN_TRIGGER_LEN {
            return Vec::new();
        }

        let lowered = query.to_lowercase();
        let mut begins_with = Vec::new();
        let mut case_sensitive = Vec::new();
        let mut case_insensitive = Vec::new();

        for key in &self.keys {
            let key_lower = key.to_lowercase();
            if !key_lower.contains(&lowered) {
                continue;
            }
            if key_lower.starts_with(&lowered) {
                begins_with.push(key.as_str());
            } else if key.contains(query) {
                case_sensitive.push(key.as_str());
            } else {
                case_insensitive.push(key.as_str());
            }
        }

        begins_with
            .into_iter()
            .chain(case_sensitive)
            .chain(case_insensitive)
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}
