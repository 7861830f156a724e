//! Integration tests for path resolution and document patching.

use indexmap::IndexMap;
use nodelens::document::patch::{apply_values_at_path, PatchError};
use nodelens::path::{JsonPath, PathError, PathSegment};

fn key(name: &str) -> PathSegment {
    PathSegment::Key(name.to_string())
}

fn values(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_path_rendering() {
    assert_eq!(JsonPath::root().to_string(), "$");

    let path = JsonPath::from_segments(vec![key("customer"), PathSegment::Index(0), key("id")]);
    assert_eq!(path.to_string(), "$[\"customer\"][0][\"id\"]");
}

#[test]
fn test_patch_nested_object() {
    let path = JsonPath::from_segments(vec![key("a")]);
    let patched = apply_values_at_path(r#"{"a":{"b":1}}"#, &path, &values(&[("b", "2")])).unwrap();
    assert_eq!(patched, "{\n  \"a\": {\n    \"b\": \"2\"\n  }\n}");
}

#[test]
fn test_patch_through_array_index() {
    let path = JsonPath::from_segments(vec![key("users"), PathSegment::Index(1)]);
    let patched = apply_values_at_path(
        r#"{"users": [{"name": "Ada"}, {"name": "Bob"}]}"#,
        &path,
        &values(&[("name", "Grace")]),
    )
    .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&patched).unwrap();
    assert_eq!(parsed["users"][0]["name"], serde_json::json!("Ada"));
    assert_eq!(parsed["users"][1]["name"], serde_json::json!("Grace"));
}

#[test]
fn test_patch_applies_all_entries() {
    let patched = apply_values_at_path(
        r#"{"a": 1, "b": 2}"#,
        &JsonPath::root(),
        &values(&[("a", "x"), ("b", "y"), ("c", "z")]),
    )
    .unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&patched).unwrap();
    assert_eq!(parsed, serde_json::json!({"a": "x", "b": "y", "c": "z"}));
}

#[test]
fn test_invalid_document_returns_parse_error() {
    let result = apply_values_at_path("not json", &JsonPath::root(), &IndexMap::new());
    assert!(matches!(result, Err(PatchError::Parse(_))));
}

#[test]
fn test_empty_values_reserializes_document() {
    let patched =
        apply_values_at_path("{\"a\":1}", &JsonPath::root(), &IndexMap::new()).unwrap();
    assert_eq!(patched, "{\n  \"a\": 1\n}");
}

#[test]
fn test_missing_key_error_names_the_step() {
    let path = JsonPath::from_segments(vec![key("a"), key("nope")]);
    let err = apply_values_at_path(r#"{"a": {"b": 1}}"#, &path, &values(&[("x", "y")]))
        .unwrap_err();
    match err {
        PatchError::Path(PathError::KeyNotFound { key, at }) => {
            assert_eq!(key, "nope");
            assert_eq!(at, "$[\"a\"]");
        }
        other => panic!("expected KeyNotFound, got {other:?}"),
    }
}

#[test]
fn test_index_past_end_is_reported() {
    let path = JsonPath::from_segments(vec![key("items"), PathSegment::Index(5)]);
    let err = apply_values_at_path(r#"{"items": [1]}"#, &path, &values(&[("x", "y")]))
        .unwrap_err();
    assert!(matches!(
        err,
        PatchError::Path(PathError::IndexOutOfBounds { index: 5, len: 1, .. })
    ));
}

#[test]
fn test_descending_into_scalar_is_reported() {
    let path = JsonPath::from_segments(vec![key("a"), key("b")]);
    let err =
        apply_values_at_path(r#"{"a": 7}"#, &path, &values(&[("x", "y")])).unwrap_err();
    assert!(matches!(
        err,
        PatchError::Path(PathError::NotAContainer { .. })
    ));
}

#[test]
fn test_scalar_target_with_values_is_rejected() {
    let path = JsonPath::from_segments(vec![key("a")]);
    let err =
        apply_values_at_path(r#"{"a": null}"#, &path, &values(&[("x", "y")])).unwrap_err();
    assert!(matches!(err, PatchError::TargetNotObject { .. }));
}

#[test]
fn test_error_messages_are_descriptive() {
    let path = JsonPath::from_segments(vec![key("missing")]);
    let err = apply_values_at_path(r#"{}"#, &path, &values(&[("x", "y")])).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("missing"));
    assert!(text.contains('$'));
}
