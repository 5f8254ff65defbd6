//! Detail pane of one test case.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use serde_json::Value;
use testlist_view::template::PaneContext;

/// Strings unquoted, everything else as compact JSON.
fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn field<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label:<12}"), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

pub(super) fn render(frame: &mut Frame, area: Rect, ctx: &PaneContext) {
    let test = ctx.test;

    let mut lines = vec![
        Line::raw(""),
        field("Name", test.name.clone()),
        field("Package", test.display_package().to_string()),
        field("Qualified", test.qualified_name()),
        Line::raw(""),
        Line::from(Span::styled(
            "  Attributes",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    if test.extra.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none)",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.extend(test.extra.iter().map(|(key, value)| field(key, value_text(value))));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", ctx.hash.details_element()),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(format!(" {} ", test.name))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("XML")), "XML");
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!(["a", "b"])), r#"["a","b"]"#);
    }
}
