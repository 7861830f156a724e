//! Application state management.
//!
//! `AppState` is the central state container: it owns the two stores (file
//! and graph), the inspector, the current UI mode, and transient UI state
//! (message, quit flag). The input layer calls its operations; the UI layer
//! reads it.
//!
//! # Example
//!
//! ```
//! use nodelens::app::state::AppState;
//! use nodelens::app::mode::AppMode;
//! use nodelens::config::Config;
//! use nodelens::store::FileFormat;
//!
//! let mut state = AppState::new(
//!     r#"{"name": "Ada"}"#.to_string(),
//!     FileFormat::Json,
//!     Some("data.json".to_string()),
//!     Config::default(),
//! );
//!
//! assert_eq!(state.mode(), AppMode::Browse);
//! state.open_inspector();
//! assert_eq!(state.mode(), AppMode::Inspect);
//! ```

use crate::config::Config;
use crate::document::builder::build_nodes;
use crate::document::node::NodeData;
use crate::document::projection::node_json;
use crate::file::saver::save_document;
use crate::inspector::NodeInspector;
use crate::store::{FileFormat, FileStore, GraphStore};
use crate::utils::clipboard;
use tracing::{error, warn};

use super::mode::AppMode;

/// Represents a message to display to the user.
#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub level: MessageLevel,
}

/// Message severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Manages the complete runtime state of the application.
pub struct AppState {
    file: FileStore,
    graph: GraphStore,
    inspector: NodeInspector,
    mode: AppMode,
    filename: Option<String>,
    message: Option<Message>,
    config: Config,
    should_quit: bool,
    quit_confirmed: bool,
}

impl AppState {
    /// Creates the application state around freshly loaded document text.
    ///
    /// The node list is derived immediately; text that fails to parse
    /// (which the loader normally prevents) leaves an empty graph and an
    /// error message.
    pub fn new(
        contents: String,
        format: FileFormat,
        filename: Option<String>,
        config: Config,
    ) -> Self {
        let file = FileStore::new(contents, format);
        let (graph, message) = match serde_json::from_str(file.contents()) {
            Ok(document) => (GraphStore::new(build_nodes(&document)), None),
            Err(err) => {
                error!("failed to parse document: {err}");
                (
                    GraphStore::new(vec![]),
                    Some(Message {
                        text: format!("Document is not valid JSON: {err}"),
                        level: MessageLevel::Error,
                    }),
                )
            }
        };

        Self {
            file,
            graph,
            inspector: NodeInspector::new(),
            mode: AppMode::Browse,
            filename,
            message,
            config,
            should_quit: false,
            quit_confirmed: false,
        }
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn file(&self) -> &FileStore {
        &self.file
    }

    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    pub fn inspector(&self) -> &NodeInspector {
        &self.inspector
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the message shown in the message area.
    pub fn set_message(&mut self, text: String, level: MessageLevel) {
        self.message = Some(Message { text, level });
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Moves the list selection down.
    pub fn select_next(&mut self) {
        self.graph.select_next();
    }

    /// Moves the list selection up.
    pub fn select_previous(&mut self) {
        self.graph.select_previous();
    }

    /// Opens the inspector modal on the selected node.
    pub fn open_inspector(&mut self) {
        if self.graph.selected_node().is_some() {
            self.mode = AppMode::Inspect;
            self.clear_message();
        }
    }

    /// Closes the inspector, discarding any edit session.
    pub fn close_inspector(&mut self) {
        self.inspector.cancel();
        self.mode = AppMode::Browse;
    }

    /// Starts an edit session over the selected node.
    ///
    /// The Edit action is disabled for nodes with no editable rows.
    pub fn start_edit(&mut self) {
        let Some(node) = self.graph.selected_node().cloned() else {
            return;
        };
        if !self.inspector.begin_edit(&node) {
            self.set_message(
                "Node has no editable fields".to_string(),
                MessageLevel::Info,
            );
        }
    }

    /// Discards the in-progress edit session.
    pub fn cancel_edit(&mut self) {
        self.inspector.cancel();
    }

    /// Commits the edit session through the stores.
    ///
    /// Failures are logged and surfaced in the message area; the session
    /// stays open so nothing the user typed is lost.
    pub fn save_edit(&mut self) {
        match self.inspector.save(&mut self.file, &mut self.graph) {
            Ok(_) => {
                self.set_message("Node updated".to_string(), MessageLevel::Info);
            }
            Err(err) => {
                error!("node save failed: {err}");
                self.set_message(format!("Save failed: {err}"), MessageLevel::Error);
            }
        }
    }

    /// Mutable access for the editing keystroke handlers.
    pub fn inspector_mut(&mut self) -> &mut NodeInspector {
        &mut self.inspector
    }

    /// Re-derives the node list if a store write requested it.
    ///
    /// Called once per event-loop turn; the request is recorded by
    /// `FileStore::set_contents` with `skip_update = false`.
    pub fn process_update_request(&mut self) {
        if !self.file.take_update_request() {
            return;
        }
        match serde_json::from_str(self.file.contents()) {
            Ok(document) => self.graph.replace_nodes(build_nodes(&document)),
            Err(err) => {
                // The store only ever receives text that already parsed.
                error!("document became unparseable after update: {err}");
            }
        }
    }

    /// Writes the document to disk at its original filename.
    pub fn save_file(&mut self) {
        let Some(filename) = self.filename.clone() else {
            self.set_message(
                "No filename (document came from stdin)".to_string(),
                MessageLevel::Warning,
            );
            return;
        };

        let format = self.file.format();
        match save_document(&filename, self.file.contents(), format, &self.config) {
            Ok(()) => {
                self.file.clear_dirty();
                self.quit_confirmed = false;
                self.set_message(format!("Wrote {filename}"), MessageLevel::Info);
            }
            Err(err) => {
                error!("write failed: {err:#}");
                self.set_message(format!("Write failed: {err}"), MessageLevel::Error);
            }
        }
    }

    /// Requests quit; with unsaved changes the first request only warns.
    pub fn request_quit(&mut self) {
        if self.file.is_dirty() && !self.quit_confirmed {
            self.quit_confirmed = true;
            self.set_message(
                "Unsaved changes - press q again to discard, w to write".to_string(),
                MessageLevel::Warning,
            );
            return;
        }
        self.should_quit = true;
    }

    /// Quits unconditionally.
    pub fn force_quit(&mut self) {
        self.should_quit = true;
    }

    /// Copies the selected node's projected JSON to the clipboard.
    pub fn copy_node_json(&mut self) {
        let Some(node) = self.graph.selected_node() else {
            return;
        };
        let text = node_json(node.rows());
        self.copy_to_clipboard(text, "Content copied");
    }

    /// Copies the selected node's path string to the clipboard.
    pub fn copy_node_path(&mut self) {
        let Some(node) = self.graph.selected_node() else {
            return;
        };
        let text = node.path().to_string();
        self.copy_to_clipboard(text, "Path copied");
    }

    fn copy_to_clipboard(&mut self, text: String, success: &str) {
        match clipboard::copy(&text) {
            Ok(()) => self.set_message(success.to_string(), MessageLevel::Info),
            Err(err) => {
                warn!("clipboard copy failed: {err:#}");
                self.set_message(format!("Clipboard unavailable: {err}"), MessageLevel::Warning);
            }
        }
    }

    /// Returns the selected node, if any.
    pub fn selected_node(&self) -> Option<&NodeData> {
        self.graph.selected_node()
    }
}
