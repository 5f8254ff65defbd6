//! Search policy for the test table.
//!
//! A query is either empty (show everything), a package wildcard such as
//! `com.consol.citrus.*`, or an exact test name. Matching is exact field
//! equality in both cases; there is no pattern matching.

use crate::descriptor::TestDescriptor;

/// Marker that turns a query into a package search.
pub const PACKAGE_WILDCARD: &str = ".*";

/// A parsed search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    /// No filter.
    All,
    /// Descriptors whose package equals the given name.
    Package(String),
    /// Descriptors whose name equals the given name.
    Name(String),
}

impl SearchQuery {
    /// Classify raw input.
    ///
    /// The wildcard marker is detected anywhere in the input, including at
    /// position 0, so `.*` alone selects the default package. The package
    /// name is the input without its last two characters.
    pub fn parse(input: &str) -> Self {
        if input.is_empty() {
            return SearchQuery::All;
        }

        if input.contains(PACKAGE_WILDCARD) {
            let keep = input.chars().count().saturating_sub(PACKAGE_WILDCARD.len());
            SearchQuery::Package(input.chars().take(keep).collect())
        } else {
            SearchQuery::Name(input.to_string())
        }
    }

    pub fn matches(&self, test: &TestDescriptor) -> bool {
        match self {
            SearchQuery::All => true,
            SearchQuery::Package(package) => test.package_name == *package,
            SearchQuery::Name(name) => test.name == *name,
        }
    }

    /// Filter the full collection, keeping its order.
    pub fn filter(&self, tests: &[TestDescriptor]) -> Vec<TestDescriptor> {
        tests.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TestDescriptor> {
        vec![
            TestDescriptor::new("LoginTest", "auth"),
            TestDescriptor::new("LogoutTest", "auth"),
            TestDescriptor::new("FooTest", ""),
            TestDescriptor::new("BarTest", "com.consol.citrus"),
        ]
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(SearchQuery::parse(""), SearchQuery::All);
    }

    #[test]
    fn test_parse_package_wildcard() {
        assert_eq!(
            SearchQuery::parse("com.consol.citrus.*"),
            SearchQuery::Package("com.consol.citrus".into())
        );
    }

    #[test]
    fn test_parse_wildcard_at_start_is_package_search() {
        assert_eq!(SearchQuery::parse(".*"), SearchQuery::Package(String::new()));
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(SearchQuery::parse("LoginTest"), SearchQuery::Name("LoginTest".into()));
        // A lone star or dot is not the marker.
        assert_eq!(SearchQuery::parse("auth*"), SearchQuery::Name("auth*".into()));
    }

    #[test]
    fn test_parse_strips_last_two_chars_only() {
        // Marker in the middle still selects the package branch.
        assert_eq!(SearchQuery::parse("a.*bc"), SearchQuery::Package("a.*".into()));
    }

    #[test]
    fn test_filter_by_package() {
        let result = SearchQuery::parse("auth.*").filter(&sample());
        let names: Vec<_> = result.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["LoginTest", "LogoutTest"]);
    }

    #[test]
    fn test_filter_by_name() {
        let result = SearchQuery::parse("LoginTest").filter(&sample());
        assert_eq!(result, vec![TestDescriptor::new("LoginTest", "auth")]);
    }

    #[test]
    fn test_filter_default_package() {
        let result = SearchQuery::parse(".*").filter(&sample());
        assert_eq!(result, vec![TestDescriptor::new("FooTest", "")]);
    }

    #[test]
    fn test_filter_is_exact_not_prefix() {
        assert!(SearchQuery::parse("Login").filter(&sample()).is_empty());
        assert!(SearchQuery::parse("com.consol.*").filter(&sample()).is_empty());
    }

    #[test]
    fn test_filter_all() {
        assert_eq!(SearchQuery::All.filter(&sample()), sample());
    }
}
