//! Testlist-Admin: test case browser for the admin console.
//!
//! A TUI that lists the test cases served by the `testcase` resource,
//! filters them by name or package, and opens one detail tab per test.
//!
//! ## Architecture
//!
//! The screen state is the [`testlist_view::TestListView`] model. This crate
//! turns terminal events into messages, executes the commands the model
//! returns (the HTTP fetch), and renders the model's templates.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  TESTLIST-ADMIN v0.1.0   12/40 tests · 10:42:07     [R] [Q] [?] │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Search │ LoginTest [x] │ LogoutTest [x]                        │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Search: auth.*                                                 │
//! │  #  Name          Package                                       │
//! │  1  LoginTest     auth                                          │
//! │  2  LogoutTest    auth                                          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod demo;
pub mod input;
pub mod logging;
pub mod source;
pub mod ui;

pub use api::{ApiError, TestCaseClient};
pub use config::{AdminConfig, Args, ConfigError, LogConfig};
pub use source::TestSource;
