//! Modal node inspector: view a node, edit its scalar fields, write back.
//!
//! The inspector is a two-state machine. In `Viewing` it renders the
//! selected node's projected JSON and path; in `Editing` it owns an
//! insertion-ordered mapping of key → in-progress text value, created from
//! the node's scalar rows when the session starts and discarded on cancel
//! or after a successful save.
//!
//! Save reconciles the node's rows with the edited values, then derives the
//! document patch from the reconciled rows — one source of truth for both
//! the in-memory node and the persisted document. Failures are typed and
//! leave the edit session open; the input layer decides how to surface
//! them.
//!
//! # Example
//!
//! ```
//! use nodelens::document::builder::build_nodes;
//! use nodelens::inspector::NodeInspector;
//! use nodelens::store::{FileStore, FileFormat, GraphStore};
//!
//! let text = r#"{"name": "Ada", "age": 36}"#;
//! let document = serde_json::from_str(text).unwrap();
//! let mut graph = GraphStore::new(build_nodes(&document));
//! let mut file = FileStore::new(text.to_string(), FileFormat::Json);
//!
//! let mut inspector = NodeInspector::new();
//! let node = graph.selected_node().unwrap().clone();
//! assert!(inspector.begin_edit(&node));
//!
//! inspector.set_value("age", "37".to_string());
//! inspector.save(&mut file, &mut graph).unwrap();
//!
//! assert!(file.contents().contains("\"age\": \"37\""));
//! assert!(!inspector.is_editing());
//! ```

use crate::document::node::{NodeData, Row, RowValue};
use crate::document::patch::{apply_values_at_path, PatchError};
use crate::store::{FileStore, GraphStore, SetContents};
use indexmap::IndexMap;
use std::fmt;

/// The inspector's two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectorMode {
    /// Read-only presentation of the node's JSON and path.
    #[default]
    Viewing,
    /// An edit session over the node's scalar fields.
    Editing,
}

impl fmt::Display for InspectorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectorMode::Viewing => write!(f, "VIEW"),
            InspectorMode::Editing => write!(f, "EDIT"),
        }
    }
}

/// Errors from the save sequence.
#[derive(Debug)]
pub enum InspectorError {
    /// Save was requested outside an edit session.
    NotEditing,
    /// There is no selected node to save against.
    NoSelection,
    /// The document patch failed; the stores are untouched.
    Patch(PatchError),
}

impl fmt::Display for InspectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectorError::NotEditing => write!(f, "No edit session in progress"),
            InspectorError::NoSelection => write!(f, "No node selected"),
            InspectorError::Patch(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for InspectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InspectorError::Patch(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PatchError> for InspectorError {
    fn from(err: PatchError) -> Self {
        InspectorError::Patch(err)
    }
}

/// Owns the edit-session state for the selected node.
#[derive(Debug, Default)]
pub struct NodeInspector {
    mode: InspectorMode,
    edited: IndexMap<String, String>,
    focus: usize,
}

impl NodeInspector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InspectorMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == InspectorMode::Editing
    }

    /// Starts an edit session over `node`.
    ///
    /// Returns false — and stays in `Viewing` — when the node has no
    /// editable rows, matching the disabled Edit action. Otherwise the
    /// edited-values mapping is (re)initialized from the node's scalar
    /// keyed rows, each value coerced to text.
    pub fn begin_edit(&mut self, node: &NodeData) -> bool {
        let edited: IndexMap<String, String> = node
            .editable_rows()
            .filter_map(|row| {
                row.key()
                    .map(|key| (key.to_string(), row.value().to_string()))
            })
            .collect();

        if edited.is_empty() {
            return false;
        }

        self.edited = edited;
        self.focus = 0;
        self.mode = InspectorMode::Editing;
        true
    }

    /// Discards the edit session without touching the stores.
    pub fn cancel(&mut self) {
        self.edited.clear();
        self.focus = 0;
        self.mode = InspectorMode::Viewing;
    }

    /// The in-progress fields, in row order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.edited
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn field_count(&self) -> usize {
        self.edited.len()
    }

    /// Index of the field that currently has input focus.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if !self.edited.is_empty() {
            self.focus = (self.focus + 1) % self.edited.len();
        }
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_previous(&mut self) {
        if !self.edited.is_empty() {
            self.focus = (self.focus + self.edited.len() - 1) % self.edited.len();
        }
    }

    /// Replaces the in-progress value for `key`.
    ///
    /// Returns false for keys outside the session, keeping the mapping
    /// aligned with the node's rows.
    pub fn set_value(&mut self, key: &str, value: String) -> bool {
        match self.edited.get_mut(key) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Appends a character to the focused field.
    pub fn push_char(&mut self, ch: char) {
        if let Some((_, value)) = self.edited.get_index_mut(self.focus) {
            value.push(ch);
        }
    }

    /// Deletes the last character of the focused field.
    pub fn pop_char(&mut self) {
        if let Some((_, value)) = self.edited.get_index_mut(self.focus) {
            value.pop();
        }
    }

    /// Commits the edit session.
    ///
    /// Reconciles the selected node's rows with the edited values, builds
    /// the updated node, patches the document at the node's path with
    /// values derived from the reconciled rows, writes the patched text
    /// back through the file store (dirty, update requested, format
    /// preserved), and replaces the selected node in the graph store.
    ///
    /// On error the stores are untouched and the session stays open.
    pub fn save(
        &mut self,
        file: &mut FileStore,
        graph: &mut GraphStore,
    ) -> Result<NodeData, InspectorError> {
        if self.mode != InspectorMode::Editing {
            return Err(InspectorError::NotEditing);
        }
        let node = graph
            .selected_node()
            .cloned()
            .ok_or(InspectorError::NoSelection)?;

        let rows: Vec<Row> = node
            .rows()
            .iter()
            .map(|row| match row.key().and_then(|key| self.edited.get(key)) {
                Some(value) if row.is_editable() => {
                    row.with_value(RowValue::String(value.clone()))
                }
                _ => row.clone(),
            })
            .collect();
        let updated = node.with_rows(rows);

        // Patch values come from the reconciled rows, not the raw edit
        // buffer, so the persisted document and the in-memory node cannot
        // drift apart.
        let values: IndexMap<String, String> = updated
            .rows()
            .iter()
            .filter(|row| row.is_editable())
            .filter_map(|row| {
                let key = row.key()?;
                self.edited
                    .contains_key(key)
                    .then(|| (key.to_string(), row.value().to_string()))
            })
            .collect();

        let format = file.format();
        let patched = apply_values_at_path(file.contents(), updated.path(), &values)?;

        file.set_contents(SetContents {
            contents: patched,
            has_changes: true,
            skip_update: false,
            format,
        });
        graph.set_selected_node(updated.clone());

        self.edited.clear();
        self.focus = 0;
        self.mode = InspectorMode::Viewing;
        Ok(updated)
    }
}
