//! Node-list derivation from a parsed document.
//!
//! Walks a `serde_json::Value` and produces the flat, path-addressed node
//! list the graph store is populated from. One node per JSON object (its
//! entries become rows, nested containers shown as child-count rows); array
//! elements are visited in order, with scalar elements becoming single
//! keyless-row nodes; a scalar root becomes a keyless-row node at the root
//! path.
//!
//! # Example
//!
//! ```
//! use nodelens::document::builder::build_nodes;
//!
//! let doc: serde_json::Value =
//!     serde_json::from_str(r#"{"name": "Ada", "jobs": ["math", "code"]}"#).unwrap();
//! let nodes = build_nodes(&doc);
//!
//! // Root object node plus one node per scalar array element.
//! assert_eq!(nodes.len(), 3);
//! assert_eq!(nodes[0].path().to_string(), "$");
//! assert_eq!(nodes[1].path().to_string(), "$[\"jobs\"][0]");
//! ```

use super::node::{JsonNumber, NodeData, Row, RowValue};
use crate::path::{JsonPath, PathSegment};
use serde_json::Value;

/// Builds the flat node list for a document root.
pub fn build_nodes(root: &Value) -> Vec<NodeData> {
    let mut nodes = Vec::new();
    walk(root, JsonPath::root(), &mut nodes);
    nodes
}

fn walk(value: &Value, path: JsonPath, nodes: &mut Vec<NodeData>) {
    match value {
        Value::Object(map) => {
            let rows = map
                .iter()
                .map(|(key, child)| Row::new(Some(key.clone()), row_value(child)))
                .collect();
            nodes.push(NodeData::new(rows, path.clone()));

            for (key, child) in map {
                if child.is_object() || child.is_array() {
                    walk(child, path.child(PathSegment::Key(key.clone())), nodes);
                }
            }
        }
        Value::Array(items) => {
            // Arrays do not get a node of their own; their elements do.
            for (index, child) in items.iter().enumerate() {
                walk(child, path.child(PathSegment::Index(index)), nodes);
            }
        }
        scalar => {
            let row = Row::new(None, row_value(scalar));
            nodes.push(NodeData::new(vec![row], path));
        }
    }
}

/// Projects a child value into its row form.
fn row_value(value: &Value) -> RowValue {
    match value {
        Value::Object(map) => RowValue::Object(map.len()),
        Value::Array(items) => RowValue::Array(items.len()),
        Value::String(s) => RowValue::String(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                RowValue::Number(JsonNumber::Integer(i))
            } else {
                RowValue::Number(JsonNumber::Float(n.as_f64().unwrap_or(0.0)))
            }
        }
        Value::Bool(b) => RowValue::Boolean(*b),
        Value::Null => RowValue::Null,
    }
}
