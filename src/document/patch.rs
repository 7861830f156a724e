//! Localized write-back of edited values into the full document.
//!
//! [`apply_values_at_path`] parses the document text, resolves the target
//! container with a checked path walk, overwrites (or inserts) each edited
//! key, and re-serializes the whole document as pretty-printed JSON. Every
//! failure mode is a typed [`PatchError`] so the caller decides what to
//! surface; the document text passed in is never mutated on error.

use crate::path::{JsonPath, PathError};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Errors from applying an edited-values mapping to a document.
#[derive(Debug)]
pub enum PatchError {
    /// The document text is not valid JSON.
    Parse(serde_json::Error),
    /// A step of the path walk failed.
    Path(PathError),
    /// The path resolved, but not to a JSON object.
    TargetNotObject { path: String },
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchError::Parse(err) => write!(f, "Document is not valid JSON: {}", err),
            PatchError::Path(err) => write!(f, "Path resolution failed: {}", err),
            PatchError::TargetNotObject { path } => {
                write!(f, "Target at {} is not an object", path)
            }
        }
    }
}

impl std::error::Error for PatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatchError::Parse(err) => Some(err),
            PatchError::Path(err) => Some(err),
            PatchError::TargetNotObject { .. } => None,
        }
    }
}

impl From<PathError> for PatchError {
    fn from(err: PathError) -> Self {
        PatchError::Path(err)
    }
}

/// Applies `values` to the container addressed by `path` inside `text`.
///
/// Each entry overwrites or inserts its key on the target object, in
/// iteration order (keys are distinct, so order does not affect the
/// result). The returned document is re-serialized with 2-space indent —
/// also when `values` is empty, in which case the call is a plain
/// parse/re-serialize round-trip.
///
/// Edited values are written as JSON strings verbatim; the edit session
/// works in text and no scalar re-typing happens here.
///
/// # Example
///
/// ```
/// use indexmap::IndexMap;
/// use nodelens::document::patch::apply_values_at_path;
/// use nodelens::path::{JsonPath, PathSegment};
///
/// let path = JsonPath::from_segments(vec![PathSegment::Key("a".to_string())]);
/// let mut values = IndexMap::new();
/// values.insert("b".to_string(), "2".to_string());
///
/// let patched = apply_values_at_path(r#"{"a":{"b":1}}"#, &path, &values).unwrap();
/// assert_eq!(patched, "{\n  \"a\": {\n    \"b\": \"2\"\n  }\n}");
/// ```
pub fn apply_values_at_path(
    text: &str,
    path: &JsonPath,
    values: &IndexMap<String, String>,
) -> Result<String, PatchError> {
    let mut document: Value = serde_json::from_str(text).map_err(PatchError::Parse)?;

    let target = path.resolve_mut(&mut document)?;

    if !values.is_empty() {
        let Value::Object(map) = target else {
            return Err(PatchError::TargetNotObject {
                path: path.to_string(),
            });
        };
        for (key, value) in values {
            map.insert(key.clone(), Value::String(value.clone()));
        }
    }

    serde_json::to_string_pretty(&document).map_err(PatchError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathSegment;

    fn path_of(segments: Vec<PathSegment>) -> JsonPath {
        JsonPath::from_segments(segments)
    }

    fn values_of(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_overwrite_nested_value() {
        let path = path_of(vec![PathSegment::Key("a".to_string())]);
        let patched =
            apply_values_at_path(r#"{"a":{"b":1}}"#, &path, &values_of(&[("b", "2")])).unwrap();
        assert_eq!(patched, "{\n  \"a\": {\n    \"b\": \"2\"\n  }\n}");
    }

    #[test]
    fn test_insert_missing_key() {
        let path = JsonPath::root();
        let patched =
            apply_values_at_path(r#"{"a": 1}"#, &path, &values_of(&[("b", "new")])).unwrap();
        let parsed: Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(parsed, serde_json::json!({"a": 1, "b": "new"}));
    }

    #[test]
    fn test_parse_failure_is_typed() {
        let result = apply_values_at_path("not json", &JsonPath::root(), &IndexMap::new());
        assert!(matches!(result, Err(PatchError::Parse(_))));
    }

    #[test]
    fn test_empty_values_round_trips_pretty() {
        let patched =
            apply_values_at_path(r#"{"a":1,"b":[2,3]}"#, &JsonPath::root(), &IndexMap::new())
                .unwrap();
        assert_eq!(patched, "{\n  \"a\": 1,\n  \"b\": [\n    2,\n    3\n  ]\n}");
    }

    #[test]
    fn test_bad_path_is_typed() {
        let path = path_of(vec![PathSegment::Key("missing".to_string())]);
        let result = apply_values_at_path(r#"{"a": 1}"#, &path, &values_of(&[("x", "y")]));
        assert!(matches!(
            result,
            Err(PatchError::Path(PathError::KeyNotFound { .. }))
        ));
    }

    #[test]
    fn test_non_object_target_with_values_is_rejected() {
        let path = path_of(vec![PathSegment::Key("a".to_string())]);
        let result = apply_values_at_path(r#"{"a": [1, 2]}"#, &path, &values_of(&[("x", "y")]));
        assert!(matches!(result, Err(PatchError::TargetNotObject { .. })));
    }

    #[test]
    fn test_non_object_target_with_empty_values_round_trips() {
        let path = path_of(vec![PathSegment::Key("a".to_string())]);
        let patched = apply_values_at_path(r#"{"a": [1, 2]}"#, &path, &IndexMap::new()).unwrap();
        let parsed: Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(parsed, serde_json::json!({"a": [1, 2]}));
    }

    #[test]
    fn test_values_written_as_strings() {
        // Edits are textual; "30" stays a JSON string on write-back.
        let patched = apply_values_at_path(
            r#"{"age": 29}"#,
            &JsonPath::root(),
            &values_of(&[("age", "30")]),
        )
        .unwrap();
        let parsed: Value = serde_json::from_str(&patched).unwrap();
        assert_eq!(parsed, serde_json::json!({"age": "30"}));
    }
}
