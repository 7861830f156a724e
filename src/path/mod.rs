//! Path addressing for document nodes.
//!
//! A [`JsonPath`] locates one node inside the parsed document root as an
//! ordered list of object keys and array indices. Paths render in bracket
//! notation (`$["customer"][0]["id"]`) and resolve against a
//! `serde_json::Value` with a checked, step-by-step walk that reports which
//! step failed instead of panicking.
//!
//! # Example
//!
//! ```
//! use nodelens::path::{JsonPath, PathSegment};
//!
//! let path = JsonPath::from_segments(vec![
//!     PathSegment::Key("customer".to_string()),
//!     PathSegment::Index(0),
//!     PathSegment::Key("id".to_string()),
//! ]);
//! assert_eq!(path.to_string(), "$[\"customer\"][0][\"id\"]");
//!
//! let doc: serde_json::Value =
//!     serde_json::from_str(r#"{"customer": [{"id": 7}]}"#).unwrap();
//! let node = path.resolve(&doc).unwrap();
//! assert_eq!(node, &serde_json::json!(7));
//! ```

pub mod error;

pub use error::PathError;

use serde_json::Value;
use std::fmt;

/// One step in a document path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Named entry of an object.
    Key(String),
    /// Positional element of an array.
    Index(usize),
}

impl fmt::Display for PathSegment {
    /// Renders the segment in bracket notation: keys quoted, indices bare.
    ///
    /// Keys are assumed to not contain `"` in this domain, so no escaping
    /// is applied.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "[\"{}\"]", key),
            PathSegment::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// An ordered sequence of segments locating a node inside the document root.
///
/// The empty path addresses the root itself and renders as `"$"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<PathSegment>,
}

impl JsonPath {
    /// Creates the root path (no segments).
    ///
    /// # Example
    ///
    /// ```
    /// use nodelens::path::JsonPath;
    ///
    /// assert_eq!(JsonPath::root().to_string(), "$");
    /// assert!(JsonPath::root().is_root());
    /// ```
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from an explicit segment list.
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Returns the segments in order.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Returns true if this path addresses the document root.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns a new path with `segment` appended.
    ///
    /// Used by the node-list builder while walking the document.
    pub fn child(&self, segment: PathSegment) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        Self { segments }
    }

    /// Resolves this path against `root`, returning the addressed value.
    ///
    /// Each step is checked: descending into a scalar, indexing past the end
    /// of an array, or naming a missing object key all produce a
    /// [`PathError`] that identifies the failing step by the path prefix
    /// walked so far.
    ///
    /// # Example
    ///
    /// ```
    /// use nodelens::path::{JsonPath, PathSegment, PathError};
    ///
    /// let doc: serde_json::Value = serde_json::from_str(r#"{"a": [1, 2]}"#).unwrap();
    ///
    /// let good = JsonPath::from_segments(vec![
    ///     PathSegment::Key("a".to_string()),
    ///     PathSegment::Index(1),
    /// ]);
    /// assert_eq!(good.resolve(&doc).unwrap(), &serde_json::json!(2));
    ///
    /// let bad = JsonPath::from_segments(vec![PathSegment::Key("b".to_string())]);
    /// assert!(matches!(bad.resolve(&doc), Err(PathError::KeyNotFound { .. })));
    /// ```
    pub fn resolve<'a>(&self, root: &'a Value) -> Result<&'a Value, PathError> {
        let mut current = root;
        for (depth, segment) in self.segments.iter().enumerate() {
            current = step(current, segment, || prefix_string(&self.segments[..depth]))?;
        }
        Ok(current)
    }

    /// Resolves this path against `root`, returning a mutable reference.
    ///
    /// Follows the same rules as [`JsonPath::resolve`].
    pub fn resolve_mut<'a>(&self, root: &'a mut Value) -> Result<&'a mut Value, PathError> {
        let mut current = root;
        for (depth, segment) in self.segments.iter().enumerate() {
            let at = || prefix_string(&self.segments[..depth]);
            current = match (segment, current) {
                (PathSegment::Key(key), Value::Object(map)) => map
                    .get_mut(key)
                    .ok_or_else(|| PathError::KeyNotFound {
                        key: key.clone(),
                        at: at(),
                    })?,
                (PathSegment::Index(index), Value::Array(items)) => {
                    let len = items.len();
                    items.get_mut(*index).ok_or(PathError::IndexOutOfBounds {
                        index: *index,
                        len,
                        at: at(),
                    })?
                }
                (_, _) => return Err(PathError::NotAContainer { at: at() }),
            };
        }
        Ok(current)
    }
}

impl fmt::Display for JsonPath {
    /// Renders the path in bracket notation rooted at `$`.
    ///
    /// # Example
    ///
    /// ```
    /// use nodelens::path::{JsonPath, PathSegment};
    ///
    /// assert_eq!(JsonPath::root().to_string(), "$");
    ///
    /// let path = JsonPath::from_segments(vec![
    ///     PathSegment::Key("items".to_string()),
    ///     PathSegment::Index(3),
    /// ]);
    /// assert_eq!(path.to_string(), "$[\"items\"][3]");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// Takes one checked step from `value` through `segment`.
fn step<'a, F>(value: &'a Value, segment: &PathSegment, at: F) -> Result<&'a Value, PathError>
where
    F: Fn() -> String,
{
    match (segment, value) {
        (PathSegment::Key(key), Value::Object(map)) => {
            map.get(key).ok_or_else(|| PathError::KeyNotFound {
                key: key.clone(),
                at: at(),
            })
        }
        (PathSegment::Index(index), Value::Array(items)) => {
            items.get(*index).ok_or(PathError::IndexOutOfBounds {
                index: *index,
                len: items.len(),
                at: at(),
            })
        }
        (_, _) => Err(PathError::NotAContainer { at: at() }),
    }
}

/// Renders the prefix of segments already walked, for error messages.
fn prefix_string(segments: &[PathSegment]) -> String {
    let mut out = String::from("$");
    for segment in segments {
        out.push_str(&segment.to_string());
    }
    out
}
