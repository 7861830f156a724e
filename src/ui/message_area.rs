//! Message area rendering.

use crate::app::mode::AppMode;
use crate::app::state::{AppState, MessageLevel};
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the message area at the bottom of the screen.
///
/// Shows the current message (error, warning, info) when one is set,
/// otherwise a short key-hint line for the current mode.
pub fn render_message_area(f: &mut Frame, area: Rect, state: &AppState, colors: &ThemeColors) {
    let content = if let Some(message) = state.message() {
        let color = match message.level {
            MessageLevel::Error => colors.error,
            MessageLevel::Warning => colors.warning,
            MessageLevel::Info => colors.info,
        };
        Line::from(vec![Span::styled(
            message.text.clone(),
            Style::default().fg(color),
        )])
    } else {
        let hints = match state.mode() {
            AppMode::Browse => "[j/k] move  [enter] inspect  [w] write  [q] quit",
            AppMode::Inspect => "",
        };
        Line::from(vec![Span::styled(
            hints,
            Style::default().fg(colors.null),
        )])
    };

    let paragraph =
        Paragraph::new(content).style(Style::default().bg(colors.background).fg(colors.foreground));

    f.render_widget(paragraph, area);
}
