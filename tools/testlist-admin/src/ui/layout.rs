//! Main layout orchestration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  TESTLIST-ADMIN v0.1.0   status                  [R] [Q] [?]    │  header
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Search │ LoginTest [x] │ ...                                   │  tab bar
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Search: ...                                                    │  search (search tab only)
//! ├─────────────────────────────────────────────────────────────────┤
//! │  table or detail pane                                           │  body
//! └─────────────────────────────────────────────────────────────────┘
//! │  [/] Search   [↑↓] Select   [Enter] Open   [Tab] Next Tab       │  footer
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use testlist_view::{Msg, Template, TestListView};
use tracing::debug;

use super::{details, shell, tab_bar, table, widgets};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub tab_bar: Rect,
    /// Search input, only on the search tab.
    pub search: Option<Rect>,
    /// Table on the search tab, detail pane otherwise.
    pub body: Rect,
    pub footer: Rect,
}

/// Split the terminal area into regions.
pub fn regions(area: Rect, search_active: bool) -> Regions {
    let [header, tab_bar, content, footer] = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Length(3), // Tab bar
        Constraint::Min(6),    // Content
        Constraint::Length(3), // Footer (keybinds)
    ])
    .areas(area);

    if search_active {
        let [search, body] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(content);
        Regions {
            header,
            tab_bar,
            search: Some(search),
            body,
            footer,
        }
    } else {
        Regions {
            header,
            tab_bar,
            search: None,
            body: content,
            footer,
        }
    }
}

/// Render the entire UI.
pub fn render(frame: &mut Frame, view: &TestListView) {
    let screen = view.screen();
    let regions = regions(frame.area(), screen.search_active);

    tab_bar::render(frame, regions.tab_bar, &screen);

    match &screen.body {
        Template::TestTable(ctx) => table::render(frame, regions.body, ctx),
        Template::DetailsPane(ctx) => details::render(frame, regions.body, ctx),
        other => debug!(template = other.name(), "Template cannot fill the body"),
    }

    // Shell last so the suggestion list overlays the table.
    if let Template::TestListShell(ctx) = &screen.shell {
        shell::render(frame, &regions, ctx);
    }

    render_footer(frame, regions.footer, screen.search_active);

    if screen.show_help {
        widgets::render_help_overlay(frame);
    }
}

/// Translate a left click at (`column`, `row`) into a message.
///
/// Table rows are counted below the header row, so the first data row is 0.
pub fn click(area: Rect, view: &TestListView, column: u16, row: u16) -> Option<Msg> {
    let screen = view.screen();
    if screen.show_help {
        return Some(Msg::ToggleHelp);
    }

    let regions = regions(area, screen.search_active);
    let position = Position::new(column, row);

    if regions.tab_bar.contains(position) {
        return tab_bar::hit(regions.tab_bar, &screen, column);
    }

    if let (Some(search), Template::TestListShell(ctx)) = (regions.search, &screen.shell) {
        if search.contains(position) {
            return Some(Msg::FocusSearch);
        }
        if let Some(list) = shell::suggestions_area(search, area, ctx) {
            if list.contains(position) {
                return shell::suggestion_hit(list, ctx, row).map(Msg::PickSuggestion);
            }
        }
    }

    match &screen.body {
        Template::TestTable(ctx) if regions.body.contains(position) => {
            table::hit(regions.body, ctx, row).map(|row| Msg::ShowDetails { row })
        }
        _ => None,
    }
}

/// Render the footer with keyboard shortcuts.
fn render_footer(frame: &mut Frame, area: Rect, search_active: bool) {
    let key = Style::default().fg(Color::Yellow);

    let keybinds = if search_active {
        vec![
            Span::styled("[/]", key),
            Span::raw(" Search  "),
            Span::styled("[↑↓]", key),
            Span::raw(" Select  "),
            Span::styled("[Enter]", key),
            Span::raw(" Open  "),
            Span::styled("[Tab]", key),
            Span::raw(" Next Tab  "),
            Span::styled("[R]", key),
            Span::raw(" Reload  "),
        ]
    } else {
        vec![
            Span::styled("[Tab]", key),
            Span::raw(" Next Tab  "),
            Span::styled("[X]", key),
            Span::raw(" Close Tab  "),
            Span::styled("[Esc]", key),
            Span::raw(" Back to Search  "),
        ]
    };

    let footer = Paragraph::new(Line::from(keybinds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .centered();

    frame.render_widget(footer, area);
}
