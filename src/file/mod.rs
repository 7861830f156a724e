//! File I/O for documents.
//!
//! This module loads documents from disk or stdin into the canonical JSON
//! text the file store holds, and saves them back in their original dialect
//! with atomic write operations and optional backups.

pub mod loader;
pub mod saver;
