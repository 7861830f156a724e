//! File store: the document text and its serialization format.
//!
//! Holds the full document as canonical JSON text plus the on-disk dialect
//! tag. Mutation goes through [`FileStore::set_contents`], which records the
//! dirty state and, unless the writer asked to skip it, a pending
//! downstream-update request the application consumes to re-derive the node
//! list.
//!
//! # Example
//!
//! ```
//! use nodelens::store::{FileStore, FileFormat, SetContents};
//!
//! let mut store = FileStore::new("{}".to_string(), FileFormat::Json);
//! assert!(!store.is_dirty());
//!
//! store.set_contents(SetContents {
//!     contents: "{\n  \"a\": 1\n}".to_string(),
//!     has_changes: true,
//!     skip_update: false,
//!     format: FileFormat::Json,
//! });
//! assert!(store.is_dirty());
//! assert!(store.take_update_request());
//! assert!(!store.take_update_request()); // consumed
//! ```

use std::fmt;

/// The document's on-disk serialization dialect.
///
/// The store's contents are always JSON text; the format tag records which
/// dialect the document came from and will be written back as. Conversion
/// happens in the file loader/saver, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Json => write!(f, "JSON"),
            FileFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// Arguments for a full document replacement.
#[derive(Debug, Clone)]
pub struct SetContents {
    /// The new document text (canonical JSON).
    pub contents: String,
    /// Marks the document as having unsaved changes.
    pub has_changes: bool,
    /// When false, requests downstream recomputation (node-list rebuild).
    pub skip_update: bool,
    /// The serialization format to keep for the document.
    pub format: FileFormat,
}

/// Owns the document text, format tag, and dirty state.
#[derive(Debug, Clone)]
pub struct FileStore {
    contents: String,
    format: FileFormat,
    dirty: bool,
    update_requested: bool,
}

impl FileStore {
    /// Creates a store around freshly loaded document text.
    pub fn new(contents: String, format: FileFormat) -> Self {
        Self {
            contents,
            format,
            dirty: false,
            update_requested: false,
        }
    }

    /// Returns the current full document text.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Returns the document's serialization format.
    pub fn format(&self) -> FileFormat {
        self.format
    }

    /// Returns whether the document has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clears the dirty flag after a successful save to disk.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Replaces the document text wholesale.
    ///
    /// `has_changes` marks the dirty state; `skip_update = false` records a
    /// pending update request for the application loop.
    pub fn set_contents(&mut self, args: SetContents) {
        self.contents = args.contents;
        self.format = args.format;
        if args.has_changes {
            self.dirty = true;
        }
        if !args.skip_update {
            self.update_requested = true;
        }
    }

    /// Consumes the pending update request, if any.
    ///
    /// Returns true exactly once per recorded request.
    pub fn take_update_request(&mut self) -> bool {
        std::mem::take(&mut self.update_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_clean() {
        let store = FileStore::new("{}".to_string(), FileFormat::Json);
        assert!(!store.is_dirty());
        assert_eq!(store.contents(), "{}");
        assert_eq!(store.format(), FileFormat::Json);
    }

    #[test]
    fn test_set_contents_marks_dirty_and_requests_update() {
        let mut store = FileStore::new("{}".to_string(), FileFormat::Json);
        store.set_contents(SetContents {
            contents: "{\"a\": 1}".to_string(),
            has_changes: true,
            skip_update: false,
            format: FileFormat::Json,
        });
        assert!(store.is_dirty());
        assert!(store.take_update_request());
        assert!(!store.take_update_request());
    }

    #[test]
    fn test_skip_update_suppresses_request() {
        let mut store = FileStore::new("{}".to_string(), FileFormat::Json);
        store.set_contents(SetContents {
            contents: "{}".to_string(),
            has_changes: false,
            skip_update: true,
            format: FileFormat::Json,
        });
        assert!(!store.is_dirty());
        assert!(!store.take_update_request());
    }

    #[test]
    fn test_format_preserved_through_replacement() {
        let mut store = FileStore::new("{}".to_string(), FileFormat::Yaml);
        let format = store.format();
        store.set_contents(SetContents {
            contents: "{\"x\": true}".to_string(),
            has_changes: true,
            skip_update: false,
            format,
        });
        assert_eq!(store.format(), FileFormat::Yaml);
    }

    #[test]
    fn test_clear_dirty() {
        let mut store = FileStore::new("{}".to_string(), FileFormat::Json);
        store.set_contents(SetContents {
            contents: "1".to_string(),
            has_changes: true,
            skip_update: true,
            format: FileFormat::Json,
        });
        assert!(store.is_dirty());
        store.clear_dirty();
        assert!(!store.is_dirty());
    }
}
