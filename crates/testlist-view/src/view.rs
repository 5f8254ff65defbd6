//! Test list view model and its update function.
//!
//! `update()` takes the current view and a message, mutates the view, and
//! returns a [`Cmd`] describing the side effect the runtime should perform.
//! This module performs no I/O.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::autocomplete::Autocomplete;
use crate::descriptor::TestDescriptor;
use crate::errors::LoadError;
use crate::search::SearchQuery;
use crate::tabs::{ActiveTab, TabId, TabRegistry};
use crate::template::{PaneContext, Screen, ShellContext, TabContext, TableContext, Template};

/// Status of the test collection fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Last fetch succeeded.
    Loaded { at: DateTime<Utc> },
    /// Last fetch failed; any previously loaded collection is kept.
    Failed(LoadError),
}

/// Where key input goes on the search tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Table,
    Search,
}

/// Everything that can happen to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Render the shell and request the collection.
    Render,
    /// Request the collection again, keeping open tabs.
    Reload,
    /// Fetch completed.
    Loaded(Result<Vec<TestDescriptor>, LoadError>),

    FocusSearch,
    FocusTable,
    InputChar(char),
    Backspace,
    ClearQuery,
    NextSuggestion,
    PrevSuggestion,
    /// Replace the query with the highlighted (or first) suggestion.
    AcceptSuggestion,
    /// Replace the query with the suggestion at this index.
    PickSuggestion(usize),
    /// Search form submitted.
    SubmitSearch,

    SelectNext,
    SelectPrev,
    /// Open the row under the cursor.
    ShowSelected,
    /// Open a table row; `row` counts data rows only, header excluded.
    ShowDetails { row: usize },

    CloseTab(TabId),
    CloseActiveTab,
    ActivateTab(TabId),
    NextTab,
    PrevTab,
    ShowSearchTab,

    ToggleHelp,
    Quit,
}

/// Side effect requested by [`update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    None,
    /// `GET testcase` and answer with [`Msg::Loaded`].
    FetchTests,
    Quit,
}

/// State of the test list screen.
#[derive(Debug, Clone, Default)]
pub struct TestListView {
    /// Full collection as fetched.
    pub tests: Vec<TestDescriptor>,
    /// Currently displayed subset of `tests`.
    pub search_results: Vec<TestDescriptor>,
    pub query: String,
    pub focus: Focus,
    pub selected: usize,
    pub tabs: TabRegistry,
    pub load: LoadState,
    pub show_help: bool,
    autocomplete: Autocomplete,
    highlighted: Option<usize>,
    quit: bool,
}

impl TestListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn autocomplete(&self) -> &Autocomplete {
        &self.autocomplete
    }

    /// Reset the shell and ask for the collection.
    ///
    /// Ignored while a fetch is already in flight.
    pub fn render(&mut self) -> Cmd {
        if self.load == LoadState::Loading {
            debug!("Fetch already in flight, ignoring render");
            return Cmd::None;
        }

        // The table follows the cleared query even if the fetch fails.
        self.query.clear();
        self.search_results = self.tests.clone();
        self.selected = 0;
        self.highlighted = None;
        self.focus = Focus::Table;
        self.load = LoadState::Loading;
        Cmd::FetchTests
    }

    /// Apply the fetch result.
    pub fn loaded(&mut self, result: Result<Vec<TestDescriptor>, LoadError>) {
        match result {
            Ok(tests) => {
                info!(count = tests.len(), "Loaded test cases");
                self.search_results = tests.clone();
                self.tests = tests;
                self.selected = 0;
                self.load = LoadState::Loaded { at: Utc::now() };
                self.after_render();
            }
            Err(e) => {
                warn!(error = %e, "Failed to load test cases");
                self.load = LoadState::Failed(e);
            }
        }
    }

    /// Rebuild the autocomplete source from the full collection.
    pub fn after_render(&mut self) {
        self.autocomplete = Autocomplete::from_tests(&self.tests);
        self.highlighted = None;
        debug!(keys = self.autocomplete.keys().len(), "Rebuilt autocomplete source");
    }

    /// Filter the full collection by the current query.
    pub fn search_tests(&mut self) {
        let query = SearchQuery::parse(&self.query);
        self.search_results = query.filter(&self.tests);
        self.selected = 0;
        self.highlighted = None;
        debug!(?query, results = self.search_results.len(), "Search submitted");
    }

    /// Open (or re-show) the detail tab of a row in the current results.
    pub fn show_details(&mut self, row: usize) {
        let Some(test) = self.search_results.get(row) else {
            debug!(row, results = self.search_results.len(), "No test at row");
            return;
        };
        self.tabs.open(test);
    }

    /// Suggestions for the current query, only while the input has focus.
    pub fn suggestions(&self) -> Vec<&str> {
        if self.focus != Focus::Search {
            return Vec::new();
        }
        self.autocomplete.suggest(&self.query)
    }

    fn accept_suggestion(&mut self) {
        let accepted = {
            let suggestions = self.suggestions();
            suggestions
                .get(self.highlighted.unwrap_or(0))
                .map(|s| s.to_string())
        };
        if let Some(accepted) = accepted {
            self.query = accepted;
        }
        self.highlighted = None;
    }

    fn move_highlight(&mut self, forward: bool) {
        let count = self.suggestions().len();
        if count == 0 {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(match (self.highlighted, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        });
    }

    /// Project the view into render contexts.
    pub fn screen(&self) -> Screen<'_> {
        let suggestions = self.suggestions();
        let highlighted = self.highlighted.filter(|i| *i < suggestions.len());

        let shell = Template::TestListShell(ShellContext {
            query: &self.query,
            focus: self.focus,
            suggestions,
            highlighted,
            load: &self.load,
            total: self.tests.len(),
            shown: self.search_results.len(),
        });

        let active = self.tabs.active();
        let tabs = self
            .tabs
            .iter()
            .map(|tab| {
                Template::DetailsTab(TabContext {
                    hash: &tab.id,
                    name: &tab.test.name,
                    active: *active == ActiveTab::Detail(tab.id.clone()),
                })
            })
            .collect();

        let body = match self.tabs.active_detail() {
            Some(tab) => Template::DetailsPane(PaneContext {
                hash: &tab.id,
                test: &tab.test,
            }),
            None => Template::TestTable(TableContext {
                tests: &self.search_results,
                selected: (!self.search_results.is_empty()).then_some(self.selected),
            }),
        };

        Screen {
            shell,
            tabs,
            body,
            search_active: *active == ActiveTab::Search,
            show_help: self.show_help,
        }
    }
}

/// Apply a message to the view and return the next command for the runtime.
pub fn update(view: &mut TestListView, msg: Msg) -> Cmd {
    match msg {
        Msg::Render | Msg::Reload => view.render(),
        Msg::Loaded(result) => {
            view.loaded(result);
            Cmd::None
        }

        Msg::FocusSearch => {
            view.tabs.activate_search();
            view.focus = Focus::Search;
            Cmd::None
        }
        Msg::FocusTable => {
            view.focus = Focus::Table;
            view.highlighted = None;
            Cmd::None
        }
        Msg::InputChar(c) => {
            view.query.push(c);
            view.highlighted = None;
            Cmd::None
        }
        Msg::Backspace => {
            view.query.pop();
            view.highlighted = None;
            Cmd::None
        }
        Msg::ClearQuery => {
            view.query.clear();
            view.highlighted = None;
            Cmd::None
        }
        Msg::NextSuggestion => {
            view.move_highlight(true);
            Cmd::None
        }
        Msg::PrevSuggestion => {
            view.move_highlight(false);
            Cmd::None
        }
        Msg::AcceptSuggestion => {
            view.accept_suggestion();
            Cmd::None
        }
        Msg::PickSuggestion(index) => {
            if index < view.suggestions().len() {
                view.highlighted = Some(index);
                view.accept_suggestion();
            }
            Cmd::None
        }
        Msg::SubmitSearch => {
            if view.highlighted.is_some() {
                view.accept_suggestion();
            }
            view.search_tests();
            view.focus = Focus::Table;
            Cmd::None
        }

        Msg::SelectNext => {
            let last = view.search_results.len().saturating_sub(1);
            view.selected = (view.selected + 1).min(last);
            Cmd::None
        }
        Msg::SelectPrev => {
            view.selected = view.selected.saturating_sub(1);
            Cmd::None
        }
        Msg::ShowSelected => {
            view.show_details(view.selected);
            Cmd::None
        }
        Msg::ShowDetails { row } => {
            view.selected = row.min(view.search_results.len().saturating_sub(1));
            view.show_details(row);
            Cmd::None
        }

        Msg::CloseTab(id) => {
            view.tabs.close(&id);
            Cmd::None
        }
        Msg::CloseActiveTab => {
            view.tabs.close_active();
            Cmd::None
        }
        Msg::ActivateTab(id) => {
            view.tabs.activate(&id);
            Cmd::None
        }
        Msg::NextTab => {
            view.tabs.next();
            Cmd::None
        }
        Msg::PrevTab => {
            view.tabs.prev();
            Cmd::None
        }
        Msg::ShowSearchTab => {
            view.tabs.activate_search();
            Cmd::None
        }

        Msg::ToggleHelp => {
            view.show_help = !view.show_help;
            Cmd::None
        }
        Msg::Quit => {
            view.quit = true;
            Cmd::Quit
        }
    }
}

// ──────────────────── tests ────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TestDescriptor> {
        vec![
            TestDescriptor::new("LoginTest", "auth"),
            TestDescriptor::new("LogoutTest", "auth"),
        ]
    }

    fn loaded_view(tests: Vec<TestDescriptor>) -> TestListView {
        let mut view = TestListView::new();
        assert_eq!(update(&mut view, Msg::Render), Cmd::FetchTests);
        update(&mut view, Msg::Loaded(Ok(tests)));
        view
    }

    fn search(view: &mut TestListView, query: &str) {
        update(view, Msg::FocusSearch);
        update(view, Msg::ClearQuery);
        for c in query.chars() {
            update(view, Msg::InputChar(c));
        }
        update(view, Msg::SubmitSearch);
    }

    fn names(tests: &[TestDescriptor]) -> Vec<&str> {
        tests.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_initial_results_equal_collection() {
        let view = loaded_view(sample());
        assert_eq!(view.search_results, view.tests);
        assert_eq!(view.tests, sample());
        assert!(matches!(view.load, LoadState::Loaded { .. }));
    }

    #[test]
    fn test_example_queries() {
        let mut view = loaded_view(sample());

        search(&mut view, "auth.*");
        assert_eq!(names(&view.search_results), vec!["LoginTest", "LogoutTest"]);

        search(&mut view, "LoginTest");
        assert_eq!(names(&view.search_results), vec!["LoginTest"]);

        search(&mut view, "");
        assert_eq!(names(&view.search_results), vec!["LoginTest", "LogoutTest"]);
    }

    #[test]
    fn test_empty_search_restores_after_empty_result() {
        let mut view = loaded_view(sample());
        search(&mut view, "NoSuchTest");
        assert!(view.search_results.is_empty());

        search(&mut view, "");
        assert_eq!(view.search_results, view.tests);
    }

    #[test]
    fn test_search_resets_selection_and_focus() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::SelectNext);
        assert_eq!(view.selected, 1);

        search(&mut view, "auth.*");
        assert_eq!(view.selected, 0);
        assert_eq!(view.focus, Focus::Table);
    }

    #[test]
    fn test_show_details_indexes_filtered_results() {
        let mut view = loaded_view(sample());
        search(&mut view, "LogoutTest");

        update(&mut view, Msg::ShowDetails { row: 0 });

        let tab = view.tabs.active_detail().unwrap();
        assert_eq!(tab.test.name, "LogoutTest");
        assert_eq!(tab.id.as_str(), "logouttest");
    }

    #[test]
    fn test_show_details_twice_creates_one_tab() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::ShowDetails { row: 0 });
        update(&mut view, Msg::ShowSearchTab);
        update(&mut view, Msg::ShowDetails { row: 0 });

        assert_eq!(view.tabs.len(), 1);
        assert!(view.tabs.active_detail().is_some());
    }

    #[test]
    fn test_show_details_out_of_range_is_ignored() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::ShowDetails { row: 7 });
        assert!(view.tabs.is_empty());
        assert_eq!(view.tabs.active(), &ActiveTab::Search);
    }

    #[test]
    fn test_close_active_tab_shows_search() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::ShowDetails { row: 0 });
        update(&mut view, Msg::ShowDetails { row: 1 });

        update(&mut view, Msg::CloseActiveTab);
        assert_eq!(view.tabs.active(), &ActiveTab::Search);
        assert_eq!(view.tabs.len(), 1);

        let screen = view.screen();
        assert!(screen.search_active);
        assert!(matches!(screen.body, Template::TestTable(_)));
    }

    #[test]
    fn test_close_tab_by_id() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::ShowDetails { row: 0 });
        update(&mut view, Msg::CloseTab(TabId::for_test(&sample()[0])));
        assert!(view.tabs.is_empty());
        assert_eq!(view.tabs.active(), &ActiveTab::Search);
    }

    #[test]
    fn test_failed_load_is_visible_and_retryable() {
        let mut view = TestListView::new();
        update(&mut view, Msg::Render);
        update(
            &mut view,
            Msg::Loaded(Err(LoadError::Transport("connection refused".into()))),
        );
        assert!(matches!(view.load, LoadState::Failed(LoadError::Transport(_))));
        assert!(view.tests.is_empty());

        assert_eq!(update(&mut view, Msg::Reload), Cmd::FetchTests);
        assert_eq!(view.load, LoadState::Loading);
    }

    #[test]
    fn test_failed_reload_keeps_previous_collection() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::Reload);
        update(&mut view, Msg::Loaded(Err(LoadError::Status { code: 503 })));
        assert_eq!(view.tests, sample());
        assert_eq!(view.load, LoadState::Failed(LoadError::Status { code: 503 }));
    }

    #[test]
    fn test_failed_reload_after_search_shows_full_table() {
        let mut view = loaded_view(sample());
        search(&mut view, "LoginTest");
        assert_eq!(names(&view.search_results), vec!["LoginTest"]);

        update(&mut view, Msg::Reload);
        update(&mut view, Msg::Loaded(Err(LoadError::Status { code: 503 })));

        assert_eq!(view.query, "");
        assert_eq!(view.search_results, view.tests);
        assert_eq!(view.selected, 0);
    }

    #[test]
    fn test_pick_suggestion_replaces_query() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::FocusSearch);
        update(&mut view, Msg::InputChar('L'));
        assert_eq!(view.suggestions(), vec!["LoginTest", "LogoutTest"]);

        update(&mut view, Msg::PickSuggestion(1));
        assert_eq!(view.query, "LogoutTest");

        update(&mut view, Msg::PickSuggestion(7));
        assert_eq!(view.query, "LogoutTest");
    }

    #[test]
    fn test_reload_ignored_while_loading() {
        let mut view = TestListView::new();
        assert_eq!(update(&mut view, Msg::Render), Cmd::FetchTests);
        assert_eq!(update(&mut view, Msg::Reload), Cmd::None);
    }

    #[test]
    fn test_reload_keeps_tabs() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::ShowDetails { row: 0 });
        update(&mut view, Msg::Reload);
        update(&mut view, Msg::Loaded(Ok(sample())));
        assert_eq!(view.tabs.len(), 1);
    }

    #[test]
    fn test_autocomplete_uses_full_collection() {
        let mut view = loaded_view(sample());
        search(&mut view, "LoginTest");

        update(&mut view, Msg::FocusSearch);
        update(&mut view, Msg::ClearQuery);
        update(&mut view, Msg::InputChar('L'));
        assert_eq!(view.suggestions(), vec!["LoginTest", "LogoutTest"]);
    }

    #[test]
    fn test_suggestions_hidden_without_focus() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::FocusSearch);
        update(&mut view, Msg::InputChar('a'));
        assert!(!view.suggestions().is_empty());
        update(&mut view, Msg::FocusTable);
        assert!(view.suggestions().is_empty());
    }

    #[test]
    fn test_submit_applies_highlighted_suggestion() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::FocusSearch);
        update(&mut view, Msg::InputChar('a'));
        update(&mut view, Msg::NextSuggestion);
        update(&mut view, Msg::SubmitSearch);

        assert_eq!(view.query, "auth.*");
        assert_eq!(view.search_results.len(), 2);
    }

    #[test]
    fn test_accept_suggestion_without_highlight_takes_first() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::FocusSearch);
        update(&mut view, Msg::InputChar('o'));
        update(&mut view, Msg::InputChar('u'));
        update(&mut view, Msg::AcceptSuggestion);
        assert_eq!(view.query, "LogoutTest");
    }

    #[test]
    fn test_highlight_wraps() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::FocusSearch);
        update(&mut view, Msg::InputChar('L'));
        update(&mut view, Msg::PrevSuggestion);
        update(&mut view, Msg::NextSuggestion);
        update(&mut view, Msg::AcceptSuggestion);
        assert_eq!(view.query, "LoginTest");
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::SelectPrev);
        assert_eq!(view.selected, 0);
        for _ in 0..5 {
            update(&mut view, Msg::SelectNext);
        }
        assert_eq!(view.selected, 1);
    }

    #[test]
    fn test_screen_lists_tabs_in_open_order() {
        let mut view = loaded_view(sample());
        update(&mut view, Msg::ShowDetails { row: 1 });
        update(&mut view, Msg::ShowDetails { row: 0 });

        let screen = view.screen();
        let tabs: Vec<_> = screen
            .tabs
            .iter()
            .map(|t| match t {
                Template::DetailsTab(ctx) => (ctx.name, ctx.active),
                other => panic!("unexpected template {}", other.name()),
            })
            .collect();
        assert_eq!(tabs, vec![("LogoutTest", false), ("LoginTest", true)]);
        assert!(matches!(screen.body, Template::DetailsPane(ref p) if p.test.name == "LoginTest"));
    }

    #[test]
    fn test_quit() {
        let mut view = TestListView::new();
        assert_eq!(update(&mut view, Msg::Quit), Cmd::Quit);
        assert!(view.should_quit());
    }
}
