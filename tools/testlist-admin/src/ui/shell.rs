//! List shell: header bar, search input and autocomplete suggestions.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};
use testlist_view::template::ShellContext;
use testlist_view::{Focus, LoadState};

use super::Regions;

pub(super) fn render(frame: &mut Frame, regions: &Regions, ctx: &ShellContext) {
    render_header(frame, regions.header, ctx);

    if let Some(search) = regions.search {
        render_search(frame, search, ctx);
        if let Some(list) = suggestions_area(search, frame.area(), ctx) {
            render_suggestions(frame, list, ctx);
        }
    }
}

/// Render the header bar.
fn render_header(frame: &mut Frame, area: Rect, ctx: &ShellContext) {
    let title = vec![
        Span::styled(
            " TESTLIST-ADMIN ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            concat!("v", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let status = match ctx.load {
        LoadState::Idle => Span::styled(" No data ", Style::default().fg(Color::DarkGray)),
        LoadState::Loading => Span::styled(
            " Loading test cases... ",
            Style::default().fg(Color::Yellow),
        ),
        LoadState::Loaded { at } => Span::styled(
            format!(
                " {}/{} tests · loaded {} ",
                ctx.shown,
                ctx.total,
                at.with_timezone(&chrono::Local).format("%H:%M:%S")
            ),
            Style::default().fg(Color::DarkGray),
        ),
        LoadState::Failed(err) => Span::styled(
            format!(" ⚠ {}: {} (R to retry) ", err.label(), err),
            Style::default().fg(Color::Red),
        ),
    };

    let hints = vec![
        Span::styled("[R]", Style::default().fg(Color::Yellow)),
        Span::raw("eload "),
        Span::styled("[Q]", Style::default().fg(Color::Yellow)),
        Span::raw("uit "),
        Span::styled("[?]", Style::default().fg(Color::Yellow)),
        Span::raw("Help "),
    ];

    let title_len: usize = title.iter().map(|s| s.width()).sum();
    let hints_len: usize = hints.iter().map(|s| s.width()).sum();
    let padding = area
        .width
        .saturating_sub(2)
        .saturating_sub((title_len + status.width() + hints_len) as u16);

    let mut spans = title;
    spans.push(status);
    spans.push(Span::raw(" ".repeat(padding as usize)));
    spans.extend(hints);

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(header, area);
}

fn render_search(frame: &mut Frame, area: Rect, ctx: &ShellContext) {
    let focused = ctx.focus == Focus::Search;
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let line = if ctx.query.is_empty() && !focused {
        Line::from(Span::styled(
            "press / to search by test name or <package>.*",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::raw(ctx.query))
    };

    let block = Block::default()
        .title(" Search ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused {
        let width = u16::try_from(Span::raw(ctx.query).width()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(width).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}

/// Where the suggestion list goes: just below the search input.
pub(super) fn suggestions_area(search: Rect, bounds: Rect, ctx: &ShellContext) -> Option<Rect> {
    if ctx.suggestions.is_empty() {
        return None;
    }

    let longest = ctx
        .suggestions
        .iter()
        .map(|s| Span::raw(*s).width())
        .max()
        .unwrap_or(0);
    let longest = u16::try_from(longest).unwrap_or(u16::MAX);
    let width = longest
        .saturating_add(4)
        .max(16)
        .min(search.width.saturating_sub(2));
    let y = search.bottom();
    let rows = u16::try_from(ctx.suggestions.len()).unwrap_or(u16::MAX);
    let height = rows
        .saturating_add(2)
        .min(bounds.bottom().saturating_sub(y));

    if height < 3 || width < 3 {
        return None;
    }

    Some(Rect {
        x: search.x + 1,
        y,
        width,
        height,
    })
}

/// Index of the suggestion drawn on `row` of the list at `area`.
pub(super) fn suggestion_hit(area: Rect, ctx: &ShellContext, row: u16) -> Option<usize> {
    let first = area.y.saturating_add(1);
    if row < first || row >= area.bottom().saturating_sub(1) {
        return None;
    }
    let index = usize::from(row - first);
    (index < ctx.suggestions.len()).then_some(index)
}

fn render_suggestions(frame: &mut Frame, area: Rect, ctx: &ShellContext) {
    let items: Vec<ListItem> = ctx
        .suggestions
        .iter()
        .enumerate()
        .map(|(i, suggestion)| {
            let style = if ctx.highlighted == Some(i) {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::raw(*suggestion))).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}
