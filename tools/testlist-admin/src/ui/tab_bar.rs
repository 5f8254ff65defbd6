//! Tab bar: the search tab followed by one header per open detail tab.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use testlist_view::template::TabContext;
use testlist_view::{Msg, Screen, Template};

/// One clickable piece of the tab bar.
struct Segment {
    text: String,
    style: Style,
    target: Option<Msg>,
}

fn tab_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn detail_segments(ctx: &TabContext) -> [Segment; 3] {
    [
        Segment {
            text: "│".to_string(),
            style: Style::default().fg(Color::DarkGray),
            target: None,
        },
        Segment {
            text: format!(" {} ", ctx.name),
            style: tab_style(ctx.active),
            target: Some(Msg::ActivateTab(ctx.hash.clone())),
        },
        Segment {
            text: "[x]".to_string(),
            style: Style::default().fg(Color::Red),
            target: Some(Msg::CloseTab(ctx.hash.clone())),
        },
    ]
}

fn segments(screen: &Screen) -> Vec<Segment> {
    let mut segments = vec![Segment {
        text: " Search ".to_string(),
        style: tab_style(screen.search_active),
        target: Some(Msg::ShowSearchTab),
    }];

    for tab in &screen.tabs {
        if let Template::DetailsTab(ctx) = tab {
            segments.extend(detail_segments(ctx));
        }
    }

    segments
}

pub(super) fn render(frame: &mut Frame, area: Rect, screen: &Screen) {
    let spans: Vec<Span> = segments(screen)
        .into_iter()
        .map(|segment| Span::styled(segment.text, segment.style))
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block()), area);
}

/// Message for a click at `column` inside the tab bar.
pub(super) fn hit(area: Rect, screen: &Screen, column: u16) -> Option<Msg> {
    let inner = block().inner(area);
    let mut x = inner.x;

    for segment in segments(screen) {
        let width = u16::try_from(Span::raw(segment.text.as_str()).width()).unwrap_or(u16::MAX);
        let end = x.saturating_add(width);
        if column >= x && column < end {
            return segment.target;
        }
        x = end;
    }

    None
}
