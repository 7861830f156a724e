//! UI module for the nodelens terminal interface.
//!
//! This module provides the main UI structure for rendering the terminal
//! interface: the node list, the inspector modal overlay, the status line,
//! and the message area.

pub mod inspector;
pub mod message_area;
pub mod node_list;
pub mod status_line;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::app::mode::AppMode;
use crate::app::state::AppState;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The screen is composed of three areas:
/// - Node list (top): one line per derived node
/// - Status line (middle): mode, file info, node counter
/// - Message area (bottom): messages and key hints
///
/// When the inspector is open it renders as a centered modal over the list.
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders the UI to the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        state: &AppState,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Node list
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message area
                ])
                .split(f.area());

            node_list::render_node_list(f, chunks[0], state.graph(), &self.theme.colors);
            status_line::render_status_line(f, chunks[1], state, &self.theme.colors);
            message_area::render_message_area(f, chunks[2], state, &self.theme.colors);

            if state.mode() == AppMode::Inspect {
                if let Some(node) = state.selected_node() {
                    inspector::render_inspector(
                        f,
                        chunks[0],
                        node,
                        state.inspector(),
                        &self.theme.colors,
                    );
                }
            }
        })?;

        Ok(())
    }
}
