//! Inspector modal rendering.
//!
//! Draws the centered modal for the selected node. In viewing state it
//! shows the projected JSON (lightly syntax-highlighted) and the node path
//! as read-only blocks with copy hints; in editing state, one labeled text
//! input per editable field with a block cursor on the focused one.

use crate::document::node::NodeData;
use crate::document::projection::node_json;
use crate::inspector::{InspectorMode, NodeInspector};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Renders the inspector modal over the node list.
pub fn render_inspector(
    f: &mut Frame,
    area: Rect,
    node: &NodeData,
    inspector: &NodeInspector,
    colors: &ThemeColors,
) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    match inspector.mode() {
        InspectorMode::Viewing => render_view(f, popup, node, colors),
        InspectorMode::Editing => render_edit(f, popup, inspector, colors),
    }
}

/// Read-only view: content block, path block, key hints.
fn render_view(f: &mut Frame, area: Rect, node: &NodeData, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Node ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Path
            Constraint::Length(1), // Hints
        ])
        .split(inner);

    let content_text = node_json(node.rows());
    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Content",
        Style::default()
            .fg(colors.foreground)
            .add_modifier(Modifier::BOLD),
    ))];
    for line in content_text.lines() {
        lines.push(highlight_json_line(line, colors));
    }
    let content = Paragraph::new(lines).style(Style::default().bg(colors.background));
    f.render_widget(content, chunks[0]);

    let path_line = Line::from(vec![
        Span::styled(
            "Path ",
            Style::default()
                .fg(colors.foreground)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(node.path().to_string(), Style::default().fg(colors.info)),
    ]);
    f.render_widget(
        Paragraph::new(path_line).style(Style::default().bg(colors.background)),
        chunks[1],
    );

    render_hints(f, chunks[2], "[e] edit  [y] copy content  [Y] copy path  [esc] close", colors);
}

/// Edit form: one labeled input per field, block cursor on the focused one.
fn render_edit(f: &mut Frame, area: Rect, inspector: &NodeInspector, colors: &ThemeColors) {
    let block = Block::default()
        .title(" Edit Node ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let focus = inspector.focus();
    let mut lines: Vec<Line> = Vec::with_capacity(inspector.field_count());
    for (index, (key, value)) in inspector.fields().enumerate() {
        let focused = index == focus;
        let label_style = if focused {
            Style::default()
                .fg(colors.key)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.key)
        };

        let mut spans = vec![
            Span::styled(format!("{}: ", key), label_style),
            Span::styled(
                value.to_string(),
                Style::default().fg(colors.foreground).bg(colors.background),
            ),
        ];
        if focused {
            // Block cursor after the text, like a terminal input.
            spans.push(Span::styled(
                " ",
                Style::default().fg(colors.background).bg(colors.cursor),
            ));
        }
        lines.push(Line::from(spans));
    }

    let form = Paragraph::new(lines).style(Style::default().bg(colors.background));
    f.render_widget(form, chunks[0]);

    render_hints(
        f,
        chunks[1],
        "[enter] save  [tab] next field  [esc] cancel",
        colors,
    );
}

fn render_hints(f: &mut Frame, area: Rect, text: &str, colors: &ThemeColors) {
    let hints = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(colors.null),
    )))
    .style(Style::default().bg(colors.background));
    f.render_widget(hints, area);
}

/// Applies light syntax highlighting to one line of projected JSON.
///
/// Splits `"key": value` lines at the separator and colors the value by
/// its leading character; structural lines render in the foreground color.
fn highlight_json_line<'a>(line: &'a str, colors: &ThemeColors) -> Line<'a> {
    if let Some(separator) = line.find("\": ") {
        let (key_part, rest) = line.split_at(separator + 2);
        let value_part = rest.trim_end_matches(',');
        let trailing = &rest[value_part.len()..];
        return Line::from(vec![
            Span::styled(key_part, Style::default().fg(colors.key)),
            Span::styled(value_part, Style::default().fg(value_color(value_part, colors))),
            Span::styled(trailing, Style::default().fg(colors.foreground)),
        ]);
    }

    let trimmed = line.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('}') {
        Line::from(Span::styled(line, Style::default().fg(colors.foreground)))
    } else {
        Line::from(Span::styled(
            line,
            Style::default().fg(value_color(trimmed, colors)),
        ))
    }
}

fn value_color(value: &str, colors: &ThemeColors) -> ratatui::style::Color {
    let value = value.trim_start();
    match value.chars().next() {
        Some('"') => colors.string,
        Some('t') | Some('f') => colors.boolean,
        Some('n') => colors.null,
        Some(c) if c.is_ascii_digit() || c == '-' => colors.number,
        _ => colors.foreground,
    }
}

/// Helper function to create a centered rect using up certain percentage of
/// the available rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_color_classification() {
        let colors = ThemeColors::default_dark();
        assert_eq!(value_color("\"text\"", &colors), colors.string);
        assert_eq!(value_color("42", &colors), colors.number);
        assert_eq!(value_color("-1.5", &colors), colors.number);
        assert_eq!(value_color("true", &colors), colors.boolean);
        assert_eq!(value_color("null", &colors), colors.null);
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(70, 80, outer);
        assert!(inner.width <= 70);
        assert!(inner.x >= outer.x && inner.y >= outer.y);
        assert!(inner.right() <= outer.right() && inner.bottom() <= outer.bottom());
    }
}
