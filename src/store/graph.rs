//! Graph store: the derived node list and the current selection.
//!
//! The node list is a projection of the document (see
//! `document::builder`); the store owns it together with the selected
//! index. The inspector reads the selected node and, after a save, replaces
//! it wholesale with [`GraphStore::set_selected_node`].

use crate::document::node::NodeData;

/// Owns the node list and selection state.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: Vec<NodeData>,
    selected: Option<usize>,
}

impl GraphStore {
    /// Creates a store over a freshly derived node list.
    ///
    /// The first node (if any) starts selected.
    pub fn new(nodes: Vec<NodeData>) -> Self {
        let selected = if nodes.is_empty() { None } else { Some(0) };
        Self { nodes, selected }
    }

    /// Replaces the node list after a document change, keeping the
    /// selection index when it still points at a node.
    pub fn replace_nodes(&mut self, nodes: Vec<NodeData>) {
        self.selected = match self.selected {
            Some(index) if index < nodes.len() => Some(index),
            _ if nodes.is_empty() => None,
            _ => Some(0),
        };
        self.nodes = nodes;
    }

    pub fn nodes(&self) -> &[NodeData] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Index of the selected node, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the currently selected node.
    pub fn selected_node(&self) -> Option<&NodeData> {
        self.selected.and_then(|index| self.nodes.get(index))
    }

    /// Replaces the selected node wholesale.
    ///
    /// No-op when nothing is selected.
    pub fn set_selected_node(&mut self, node: NodeData) {
        if let Some(index) = self.selected {
            if let Some(slot) = self.nodes.get_mut(index) {
                *slot = node;
            }
        }
    }

    /// Moves the selection down, stopping at the last node.
    pub fn select_next(&mut self) {
        if let Some(index) = self.selected {
            if index + 1 < self.nodes.len() {
                self.selected = Some(index + 1);
            }
        }
    }

    /// Moves the selection up, stopping at the first node.
    pub fn select_previous(&mut self) {
        if let Some(index) = self.selected {
            self.selected = Some(index.saturating_sub(1));
        }
    }
}
