//! Open tab registry.
//!
//! The search tab is always present and cannot be closed. Detail tabs are
//! created lazily when a test is opened and removed entirely when closed;
//! there is no cached closed state.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::descriptor::TestDescriptor;

/// Identifier of a detail tab: the lowercased test name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(String);

impl TabId {
    pub fn for_test(test: &TestDescriptor) -> Self {
        Self(test.name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `tab-<hash>`
    pub fn tab_element(&self) -> String {
        format!("tab-{}", self.0)
    }

    /// `tab-close-<hash>`
    pub fn close_element(&self) -> String {
        format!("tab-close-{}", self.0)
    }

    /// `test-case-details-<hash>`
    pub fn details_element(&self) -> String {
        format!("test-case-details-{}", self.0)
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which tab is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveTab {
    /// The first tab, holding the search form and table.
    #[default]
    Search,
    Detail(TabId),
}

/// An open detail tab bound to one descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailTab {
    pub id: TabId,
    pub test: TestDescriptor,
}

/// Open detail tabs in the order they were opened, plus the active tab.
#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    tabs: HashMap<TabId, DetailTab>,
    order: Vec<TabId>,
    active: ActiveTab,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn active(&self) -> &ActiveTab {
        &self.active
    }

    /// The detail tab currently shown, if any.
    pub fn active_detail(&self) -> Option<&DetailTab> {
        match &self.active {
            ActiveTab::Search => None,
            ActiveTab::Detail(id) => self.tabs.get(id),
        }
    }

    /// Detail tabs in open order.
    pub fn iter(&self) -> impl Iterator<Item = &DetailTab> {
        self.order.iter().filter_map(|id| self.tabs.get(id))
    }

    /// Open a tab for `test` unless one with the same id exists, then show it.
    ///
    /// Returns `true` if a new tab was created.
    pub fn open(&mut self, test: &TestDescriptor) -> bool {
        let id = TabId::for_test(test);
        let created = !self.tabs.contains_key(&id);

        if created {
            debug!(tab = %id.tab_element(), test = %test.name, "Opening detail tab");
            self.order.push(id.clone());
            self.tabs.insert(
                id.clone(),
                DetailTab {
                    id: id.clone(),
                    test: test.clone(),
                },
            );
        }

        self.active = ActiveTab::Detail(id);
        created
    }

    /// Remove a detail tab. If it was shown, the search tab is shown instead.
    ///
    /// Returns `false` if no such tab was open.
    pub fn close(&mut self, id: &TabId) -> bool {
        if self.tabs.remove(id).is_none() {
            return false;
        }
        self.order.retain(|open| open != id);

        if self.active == ActiveTab::Detail(id.clone()) {
            self.active = ActiveTab::Search;
        }

        debug!(tab = %id.close_element(), "Closed detail tab");
        true
    }

    /// Close the shown detail tab. No-op on the search tab.
    pub fn close_active(&mut self) -> bool {
        match self.active.clone() {
            ActiveTab::Search => false,
            ActiveTab::Detail(id) => self.close(&id),
        }
    }

    pub fn activate_search(&mut self) {
        self.active = ActiveTab::Search;
    }

    /// Show an open tab. Unknown ids are ignored.
    pub fn activate(&mut self, id: &TabId) -> bool {
        if self.tabs.contains_key(id) {
            self.active = ActiveTab::Detail(id.clone());
            true
        } else {
            false
        }
    }

    /// Position of the active tab in `[Search, detail tabs...]`.
    pub fn active_position(&self) -> usize {
        match &self.active {
            ActiveTab::Search => 0,
            ActiveTab::Detail(id) => self
                .order
                .iter()
                .position(|open| open == id)
                .map(|i| i + 1)
                .unwrap_or(0),
        }
    }

    /// Cycle forward through `[Search, detail tabs...]`, wrapping around.
    pub fn next(&mut self) {
        let count = self.order.len() + 1;
        let next = (self.active_position() + 1) % count;
        self.activate_position(next);
    }

    /// Cycle backward through `[Search, detail tabs...]`, wrapping around.
    pub fn prev(&mut self) {
        let count = self.order.len() + 1;
        let current = self.active_position();
        let prev = if current == 0 { count - 1 } else { current - 1 };
        self.activate_position(prev);
    }

    fn activate_position(&mut self, position: usize) {
        self.active = match position.checked_sub(1).and_then(|i| self.order.get(i)) {
            Some(id) => ActiveTab::Detail(id.clone()),
            None => ActiveTab::Search,
        };
    }
}
