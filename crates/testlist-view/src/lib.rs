//! # Test List View
//!
//! View model for the test list screen of the admin console. It lists test
//! cases served by the `testcase` resource, filters them by exact name or by
//! package wildcard, and manages one detail tab per opened test.
//!
//! ## Design Principles
//!
//! - **Single update path**: every user action and every fetch completion is a
//!   [`Msg`] routed through [`update`]. Side effects come back as [`Cmd`]
//!   values for the runtime to execute.
//! - **Explicit tab state**: open tabs live in a [`TabRegistry`] keyed by
//!   [`TabId`]; rendering is a projection of that state.
//! - **Typed templates**: each screen region is described by a [`Template`]
//!   variant carrying its own data contract.
//!
//! ```text
//! ┌──────────────┐   Msg    ┌────────────────┐   Cmd    ┌─────────────┐
//! │ input / HTTP │ ───────→ │ update(view)   │ ───────→ │   runtime   │
//! └──────────────┘          └────────────────┘          └─────────────┘
//!                                   │ screen()
//!                                   ↓
//!                             Template values
//! ```

pub mod autocomplete;
pub mod descriptor;
pub mod errors;
pub mod search;
pub mod tabs;
pub mod template;
pub mod view;

pub use autocomplete::{Autocomplete, MAX_SUGGESTIONS, MIN_TRIGGER_LEN};
pub use descriptor::TestDescriptor;
pub use errors::LoadError;
pub use search::{SearchQuery, PACKAGE_WILDCARD};
pub use tabs::{ActiveTab, DetailTab, TabId, TabRegistry};
pub use template::{Screen, Template};
pub use view::{update, Cmd, Focus, LoadState, Msg, TestListView};
