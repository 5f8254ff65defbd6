//! Test case table.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use testlist_view::template::TableContext;

fn block(count: usize) -> Block<'static> {
    Block::default()
        .title(format!(" Test Cases ({count}) "))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

/// First visible data row so that `selected` stays on screen.
pub(super) fn scroll_offset(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        selected.saturating_sub(visible - 1)
    }
}

/// Render the table for the current search results.
pub(super) fn render(frame: &mut Frame, area: Rect, ctx: &TableContext) {
    let block = block(ctx.tests.len());

    if ctx.tests.is_empty() {
        let empty = Paragraph::new(Line::styled(
            "No test cases",
            Style::default().fg(Color::DarkGray),
        ))
        .centered()
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let visible = block.inner(area).height.saturating_sub(1) as usize;
    let selected = ctx.selected.unwrap_or(0);

    let header = Row::new(vec!["#", "Name", "Package"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .height(1);

    let rows: Vec<Row> = ctx
        .tests
        .iter()
        .enumerate()
        .map(|(i, test)| {
            let package_style = if test.package_name.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Row::new(vec![
                Cell::from(format!("{}", i + 1)).style(Style::default().fg(Color::DarkGray)),
                Cell::from(test.name.as_str()),
                Cell::from(test.display_package()).style(package_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Percentage(45),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = TableState::default()
        .with_offset(scroll_offset(selected, visible))
        .with_selected(ctx.selected);

    frame.render_stateful_widget(table, area, &mut state);
}

/// Data row under screen row `y`, header excluded.
pub(super) fn hit(area: Rect, ctx: &TableContext, y: u16) -> Option<usize> {
    let inner = block(ctx.tests.len()).inner(area);
    if y <= inner.y || y >= inner.bottom() {
        return None;
    }

    let visible = inner.height.saturating_sub(1) as usize;
    let offset = scroll_offset(ctx.selected.unwrap_or(0), visible);
    let row = offset + (y - inner.y - 1) as usize;

    (row < ctx.tests.len()).then_some(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
        assert_eq!(scroll_offset(3, 0), 0);
    }
}
