//! API client module for the test-management server.
//!
//! Fetches the test case list with a plain `GET` on the `testcase` resource.

mod client;

pub use client::{ApiError, TestCaseClient};
