//! Typed render contexts.
//!
//! Each screen region has its own data contract. The front end picks the
//! render function by matching on [`Template`]; there is no lookup by name.

use crate::descriptor::TestDescriptor;
use crate::tabs::TabId;
use crate::view::{Focus, LoadState};

/// Static shell around the table: search input, suggestions and load status.
#[derive(Debug, Clone)]
pub struct ShellContext<'a> {
    pub query: &'a str,
    pub focus: Focus,
    pub suggestions: Vec<&'a str>,
    pub highlighted: Option<usize>,
    pub load: &'a LoadState,
    pub total: usize,
    pub shown: usize,
}

#[derive(Debug, Clone)]
pub struct TableContext<'a> {
    pub tests: &'a [TestDescriptor],
    pub selected: Option<usize>,
}

/// Header entry of one detail tab.
#[derive(Debug, Clone)]
pub struct TabContext<'a> {
    pub hash: &'a TabId,
    pub name: &'a str,
    pub active: bool,
}

/// Content pane of one detail tab.
#[derive(Debug, Clone)]
pub struct PaneContext<'a> {
    pub hash: &'a TabId,
    pub test: &'a TestDescriptor,
}

#[derive(Debug, Clone)]
pub enum Template<'a> {
    TestListShell(ShellContext<'a>),
    TestTable(TableContext<'a>),
    DetailsTab(TabContext<'a>),
    DetailsPane(PaneContext<'a>),
}

impl Template<'_> {
    /// Stable template name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Template::TestListShell(_) => "TestListView",
            Template::TestTable(_) => "TestTableView",
            Template::DetailsTab(_) => "test-details-tab",
            Template::DetailsPane(_) => "test-details-tab-pane",
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone)]
pub struct Screen<'a> {
    /// Always [`Template::TestListShell`].
    pub shell: Template<'a>,
    /// One [`Template::DetailsTab`] per open detail tab, in open order.
    pub tabs: Vec<Template<'a>>,
    /// [`Template::TestTable`] on the search tab, [`Template::DetailsPane`] otherwise.
    pub body: Template<'a>,
    pub search_active: bool,
    pub show_help: bool,
}
