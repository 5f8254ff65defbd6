//! Help overlay widget.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(description),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
}

/// Render a centered help overlay.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(60, 80, frame.area());

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(Span::styled(
            "TESTLIST-ADMIN HELP",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        section("Search"),
        key_line("  /        ", "Focus the search input"),
        key_line("  Tab      ", "Complete with the highlighted suggestion"),
        key_line("  ↑/↓      ", "Move through suggestions"),
        key_line("  Enter    ", "Submit (empty shows all tests)"),
        key_line("  Esc      ", "Leave the search input"),
        Line::raw(""),
        section("Query Syntax"),
        key_line("  Name     ", "Exact test name, e.g. LoginTest"),
        key_line("  pkg.*    ", "Every test in package pkg"),
        key_line("  .*       ", "Tests in the default package"),
        Line::raw(""),
        section("Tabs"),
        key_line("  ↑/↓ j/k  ", "Select a test"),
        key_line("  Enter    ", "Open the selected test in a tab"),
        key_line("  Tab/→    ", "Next tab"),
        key_line("  S-Tab/←  ", "Previous tab"),
        key_line("  X        ", "Close the current detail tab"),
        key_line("  Esc      ", "Back to the search tab"),
        Line::raw(""),
        section("Actions"),
        key_line("  R        ", "Reload test cases"),
        key_line("  Q        ", "Quit"),
        key_line("  ?        ", "Toggle this help"),
        Line::raw(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(paragraph, popup_area);
}

/// Create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
