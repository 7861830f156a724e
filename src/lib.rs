//! nodelens - A terminal-based node inspector for JSON documents.
//!
//! nodelens loads a JSON (or YAML) document, projects it into a flat list
//! of graph nodes, and opens a modal inspector on the selected node: view
//! its content as formatted JSON and its path, copy either to the
//! clipboard, edit scalar fields inline, and write the edits back into the
//! document at the node's path.

pub mod app;
pub mod config;
pub mod document;
pub mod file;
pub mod input;
pub mod inspector;
pub mod path;
pub mod store;
pub mod theme;
pub mod ui;
pub mod utils;
