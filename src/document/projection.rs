//! Projection of a node's rows into displayable JSON text.
//!
//! The inspector's read view shows the selected node as formatted JSON.
//! The projection is shallow and lossy on purpose: container rows are
//! previews of other nodes and are excluded, keyless rows cannot form an
//! object entry, and a primitive node (exactly one keyless row) renders as
//! its bare value text.

use super::node::Row;
use serde_json::{Map, Value};

/// Renders a node's rows as the text shown in the read view.
///
/// - no rows: the literal `"{}"`;
/// - exactly one keyless row: the row's value coerced to plain text (not
///   JSON-encoded), used for primitive nodes;
/// - otherwise: a key → value object over the scalar keyed rows,
///   pretty-printed with 2-space indent.
///
/// There is no error path; malformed input degenerates to `"{}"`.
///
/// # Example
///
/// ```
/// use nodelens::document::node::{Row, RowValue, JsonNumber};
/// use nodelens::document::projection::node_json;
///
/// assert_eq!(node_json(&[]), "{}");
///
/// // Primitive node: bare text, unquoted
/// let primitive = [Row::new(None, RowValue::Number(JsonNumber::Integer(5)))];
/// assert_eq!(node_json(&primitive), "5");
///
/// // Container rows are excluded from the object projection
/// let rows = [
///     Row::new(Some("a".to_string()), RowValue::Number(JsonNumber::Integer(1))),
///     Row::new(Some("b".to_string()), RowValue::Object(3)),
/// ];
/// assert_eq!(node_json(&rows), "{\n  \"a\": 1\n}");
/// ```
pub fn node_json(rows: &[Row]) -> String {
    if rows.is_empty() {
        return "{}".to_string();
    }

    if rows.len() == 1 && rows[0].key().is_none() {
        return rows[0].value().to_string();
    }

    let mut map = Map::new();
    for row in rows {
        if row.value().is_container() {
            continue;
        }
        let (Some(key), Some(value)) = (row.key(), row.value().to_json()) else {
            continue;
        };
        map.insert(key.to_string(), value);
    }

    // Serializing a Map cannot fail; fall back to the empty object anyway.
    serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::node::{JsonNumber, RowValue};

    #[test]
    fn test_empty_rows_project_to_empty_object() {
        assert_eq!(node_json(&[]), "{}");
    }

    #[test]
    fn test_single_keyless_row_passes_through_as_text() {
        let rows = [Row::new(None, RowValue::String("5".to_string()))];
        assert_eq!(node_json(&rows), "5");

        let rows = [Row::new(None, RowValue::Boolean(true))];
        assert_eq!(node_json(&rows), "true");
    }

    #[test]
    fn test_container_rows_excluded() {
        let rows = [
            Row::new(
                Some("a".to_string()),
                RowValue::Number(JsonNumber::Integer(1)),
            ),
            Row::new(Some("b".to_string()), RowValue::Object(2)),
            Row::new(Some("c".to_string()), RowValue::Array(5)),
        ];
        assert_eq!(node_json(&rows), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_keyless_rows_skipped_in_object_projection() {
        let rows = [
            Row::new(None, RowValue::Null),
            Row::new(Some("k".to_string()), RowValue::String("v".to_string())),
        ];
        assert_eq!(node_json(&rows), "{\n  \"k\": \"v\"\n}");
    }

    #[test]
    fn test_all_scalar_kinds_serialize() {
        let rows = [
            Row::new(Some("s".to_string()), RowValue::String("x".to_string())),
            Row::new(
                Some("f".to_string()),
                RowValue::Number(JsonNumber::Float(1.5)),
            ),
            Row::new(Some("t".to_string()), RowValue::Boolean(true)),
            Row::new(Some("n".to_string()), RowValue::Null),
        ];
        let text = node_json(&rows);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            parsed,
            serde_json::json!({"s": "x", "f": 1.5, "t": true, "n": null})
        );
    }

    #[test]
    fn test_single_keyed_row_is_an_object() {
        // Only keyless single rows pass through bare.
        let rows = [Row::new(
            Some("a".to_string()),
            RowValue::Number(JsonNumber::Integer(5)),
        )];
        assert_eq!(node_json(&rows), "{\n  \"a\": 5\n}");
    }
}
