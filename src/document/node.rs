//! Row-based node representation for the graph view.
//!
//! This module provides the core data structures for the node list nodelens
//! displays. Each addressable unit of the document becomes a [`NodeData`]:
//! an ordered sequence of [`Row`]s (one per displayed field) plus the
//! [`JsonPath`] locating the node inside the document root.
//!
//! # Example
//!
//! ```
//! use nodelens::document::node::{NodeData, Row, RowValue, JsonNumber};
//! use nodelens::path::JsonPath;
//!
//! let node = NodeData::new(
//!     vec![
//!         Row::new(Some("name".to_string()), RowValue::String("nodelens".to_string())),
//!         Row::new(Some("stars".to_string()), RowValue::Number(JsonNumber::Integer(12))),
//!         Row::new(Some("tags".to_string()), RowValue::Array(3)),
//!     ],
//!     JsonPath::root(),
//! );
//!
//! // Container rows are never editable
//! assert_eq!(node.editable_rows().count(), 2);
//! ```

use crate::path::JsonPath;
use std::fmt;

/// A JSON number, kept as integer or float like the source document.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonNumber {
    Integer(i64),
    Float(f64),
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonNumber::Integer(i) => write!(f, "{}", i),
            JsonNumber::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl JsonNumber {
    /// Converts back to a `serde_json::Number` for projection output.
    pub fn to_json(&self) -> serde_json::Number {
        match self {
            JsonNumber::Integer(i) => serde_json::Number::from(*i),
            // Finite by construction: parsed out of a JSON document.
            JsonNumber::Float(f) => {
                serde_json::Number::from_f64(*f).unwrap_or_else(|| serde_json::Number::from(0))
            }
        }
    }
}

/// The value of one displayed row.
///
/// Scalar variants carry the field's value. The `Object`/`Array` variants
/// stand in for nested containers and carry only the child count for
/// preview; they are never editable and never enter the edited-values
/// projection.
#[derive(Debug, Clone, PartialEq)]
pub enum RowValue {
    String(String),
    Number(JsonNumber),
    Boolean(bool),
    Null,
    /// Nested object with the given entry count (display only).
    Object(usize),
    /// Nested array with the given element count (display only).
    Array(usize),
}

impl RowValue {
    /// Returns true for the `Object`/`Array` placeholder variants.
    ///
    /// # Example
    ///
    /// ```
    /// use nodelens::document::node::RowValue;
    ///
    /// assert!(RowValue::Object(2).is_container());
    /// assert!(RowValue::Array(0).is_container());
    /// assert!(!RowValue::Boolean(true).is_container());
    /// ```
    pub fn is_container(&self) -> bool {
        matches!(self, RowValue::Object(_) | RowValue::Array(_))
    }

    /// Converts a scalar row value to a `serde_json::Value`.
    ///
    /// Returns `None` for container placeholders, which have no scalar
    /// JSON representation.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            RowValue::String(s) => Some(serde_json::Value::String(s.clone())),
            RowValue::Number(n) => Some(serde_json::Value::Number(n.to_json())),
            RowValue::Boolean(b) => Some(serde_json::Value::Bool(*b)),
            RowValue::Null => Some(serde_json::Value::Null),
            RowValue::Object(_) | RowValue::Array(_) => None,
        }
    }
}

impl fmt::Display for RowValue {
    /// Coerces the value to plain text: strings unquoted, numbers and
    /// booleans bare, `null` literal, containers as a count preview.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowValue::String(s) => write!(f, "{}", s),
            RowValue::Number(n) => write!(f, "{}", n),
            RowValue::Boolean(b) => write!(f, "{}", b),
            RowValue::Null => write!(f, "null"),
            RowValue::Object(len) => write!(f, "{{{}}}", len),
            RowValue::Array(len) => write!(f, "[{}]", len),
        }
    }
}

/// One displayed field of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    key: Option<String>,
    value: RowValue,
}

impl Row {
    /// Creates a row. Keyless rows appear only on primitive nodes (array
    /// elements and scalar roots).
    pub fn new(key: Option<String>, value: RowValue) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> &RowValue {
        &self.value
    }

    /// A row is editable when it is scalar and has a key to edit by.
    pub fn is_editable(&self) -> bool {
        self.key.is_some() && !self.value.is_container()
    }

    /// Returns a copy of this row with its value replaced.
    pub fn with_value(&self, value: RowValue) -> Self {
        Self {
            key: self.key.clone(),
            value,
        }
    }
}

/// One node of the visualized graph: its rows and its location in the
/// document.
///
/// Owned by the graph store; the inspector reads it and replaces it
/// wholesale through `GraphStore::set_selected_node`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeData {
    rows: Vec<Row>,
    path: JsonPath,
}

impl NodeData {
    pub fn new(rows: Vec<Row>, path: JsonPath) -> Self {
        Self { rows, path }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn path(&self) -> &JsonPath {
        &self.path
    }

    /// Iterates the rows an edit session can touch: scalar and keyed.
    pub fn editable_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_editable())
    }

    /// Returns an updated node with only the row sequence replaced.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Self {
            rows,
            path: self.path.clone(),
        }
    }
}
