//! Status line widget for displaying application state information.
//!
//! The status line shows:
//! - Current mode (BROWSE, or the inspector's VIEW/EDIT)
//! - Filename (or "[stdin]" for piped documents)
//! - Dirty indicator "[+]" for unsaved changes
//! - Document format and node counter
//!
//! Example status line: `BROWSE | data.json [+] | JSON          3/17`

use crate::app::mode::AppMode;
use crate::app::state::AppState;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the status line showing mode, filename, format, and position.
pub fn render_status_line(f: &mut Frame, area: Rect, state: &AppState, colors: &ThemeColors) {
    let mode_text = match state.mode() {
        AppMode::Browse => "BROWSE".to_string(),
        AppMode::Inspect => format!("{}", state.inspector().mode()),
    };
    let filename = state.filename().unwrap_or("[stdin]");
    let dirty_indicator = if state.file().is_dirty() { " [+]" } else { "" };

    let position = match state.graph().selected_index() {
        Some(index) => format!("{}/{}", index + 1, state.graph().nodes().len()),
        None => "-/0".to_string(),
    };

    let left = format!(
        " {} | {}{} | {}",
        mode_text,
        filename,
        dirty_indicator,
        state.file().format()
    );

    // Right-align the position within the remaining width.
    let used = left.chars().count() + position.chars().count() + 1;
    let padding = (area.width as usize).saturating_sub(used);
    let text = format!("{}{}{} ", left, " ".repeat(padding), position);

    let paragraph = Paragraph::new(Line::from(Span::raw(text))).style(
        Style::default()
            .bg(colors.status_line_bg)
            .fg(colors.status_line_fg),
    );
    f.render_widget(paragraph, area);
}
