//! Node list rendering.
//!
//! One line per derived node: its path in bracket notation plus a short
//! content preview. The selected line is highlighted; the list scrolls to
//! keep the selection visible.

use crate::document::node::{NodeData, RowValue};
use crate::store::GraphStore;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the node list pane.
pub fn render_node_list(f: &mut Frame, area: Rect, graph: &GraphStore, colors: &ThemeColors) {
    let height = area.height as usize;
    let selected = graph.selected_index().unwrap_or(0);

    // Keep the selection in view.
    let offset = if selected >= height {
        selected + 1 - height
    } else {
        0
    };

    let lines: Vec<Line> = graph
        .nodes()
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(index, node)| {
            let is_selected = graph.selected_index() == Some(index);
            let base = if is_selected {
                Style::default()
                    .fg(colors.foreground)
                    .bg(colors.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.foreground).bg(colors.background)
            };

            let marker = if is_selected { "> " } else { "  " };
            Line::from(vec![
                Span::styled(marker.to_string(), base),
                Span::styled(node.path().to_string(), base.fg(colors.info)),
                Span::styled("  ".to_string(), base),
                Span::styled(preview(node), base),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(colors.background));
    f.render_widget(paragraph, area);
}

/// Builds a one-line preview of a node's content.
fn preview(node: &NodeData) -> String {
    if node.rows().len() == 1 && node.rows()[0].key().is_none() {
        return truncate(&node.rows()[0].value().to_string(), 40);
    }

    let scalars = node
        .rows()
        .iter()
        .filter(|row| !row.value().is_container())
        .count();
    let containers = node.rows().len() - scalars;

    let mut parts = Vec::new();
    for row in node.rows().iter().take(3) {
        if let Some(key) = row.key() {
            match row.value() {
                RowValue::Object(_) | RowValue::Array(_) => parts.push(format!("{}…", key)),
                value => parts.push(format!("{}: {}", key, truncate(&value.to_string(), 12))),
            }
        }
    }
    let summary = parts.join(", ");
    if node.rows().len() > 3 {
        format!("{{{} +{} more}}", summary, scalars + containers - 3)
    } else {
        format!("{{{}}}", summary)
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}…", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::builder::build_nodes;

    #[test]
    fn test_preview_primitive_node() {
        let nodes = build_nodes(&serde_json::json!("hello"));
        assert_eq!(preview(&nodes[0]), "hello");
    }

    #[test]
    fn test_preview_object_node() {
        let nodes = build_nodes(&serde_json::json!({"a": 1, "kids": {"x": 2}}));
        let text = preview(&nodes[0]);
        assert!(text.contains("a: 1"));
        assert!(text.contains("kids…"));
    }

    #[test]
    fn test_truncate_long_values() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("0123456789abc", 10), "0123456789…");
    }
}
