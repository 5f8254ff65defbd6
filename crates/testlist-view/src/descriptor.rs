//! Test descriptor as served by the `testcase` resource.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifying metadata of one test case.
///
/// Only `name` and `packageName` are interpreted. Any other field of the
/// response object is kept verbatim in `extra` so the details pane can show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestDescriptor {
    pub name: String,
    /// Dotted namespace; empty for the default package.
    #[serde(rename = "packageName", default)]
    pub package_name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl TestDescriptor {
    pub fn new(name: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            package_name: package_name.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Fully qualified name, `package.Name` or just `Name` in the default package.
    pub fn qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package_name, self.name)
        }
    }

    /// Package shown in tables; the default package has no name of its own.
    pub fn display_package(&self) -> &str {
        if self.package_name.is_empty() {
            "(default)"
        } else {
            &self.package_name
        }
    }
}
