//! Terminal events to view messages.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use testlist_view::{ActiveTab, Focus, Msg, TestListView};

use crate::ui;

/// Map a key press to a message. Key releases are ignored.
pub fn map_key(view: &TestListView, key: KeyEvent) -> Option<Msg> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Msg::Quit);
    }

    // Any key closes help
    if view.show_help {
        return Some(Msg::ToggleHelp);
    }

    let on_search_tab = *view.tabs.active() == ActiveTab::Search;

    if on_search_tab && view.focus == Focus::Search {
        return match key.code {
            KeyCode::Char(c) => Some(Msg::InputChar(c)),
            KeyCode::Backspace => Some(Msg::Backspace),
            KeyCode::Enter => Some(Msg::SubmitSearch),
            KeyCode::Tab => Some(Msg::AcceptSuggestion),
            KeyCode::Down => Some(Msg::NextSuggestion),
            KeyCode::Up => Some(Msg::PrevSuggestion),
            KeyCode::Esc => Some(Msg::FocusTable),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Msg::Quit),
        KeyCode::Esc if on_search_tab => Some(Msg::Quit),
        KeyCode::Esc => Some(Msg::ShowSearchTab),
        KeyCode::Char('?') => Some(Msg::ToggleHelp),
        KeyCode::Char('/') | KeyCode::Char('s') | KeyCode::Char('S') => Some(Msg::FocusSearch),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Msg::Reload),
        KeyCode::Tab | KeyCode::Right => Some(Msg::NextTab),
        KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevTab),
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => Some(Msg::CloseActiveTab),
        KeyCode::Up | KeyCode::Char('k') if on_search_tab => Some(Msg::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') if on_search_tab => Some(Msg::SelectNext),
        KeyCode::Enter if on_search_tab => Some(Msg::ShowSelected),
        _ => None,
    }
}

/// Map a left click to a message; `area` is the full terminal area.
pub fn map_mouse(view: &TestListView, event: MouseEvent, area: Rect) -> Option<Msg> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => ui::click(area, view, event.column, event.row),
        MouseEventKind::ScrollDown if *view.tabs.active() == ActiveTab::Search => {
            Some(Msg::SelectNext)
        }
        MouseEventKind::ScrollUp if *view.tabs.active() == ActiveTab::Search => {
            Some(Msg::SelectPrev)
        }
        _ => None,
    }
}
