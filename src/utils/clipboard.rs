//! System clipboard access for the copy affordances.
//!
//! Clipboard availability varies by platform and session (headless
//! terminals often have none), so failure here is expected and non-fatal;
//! callers report it through the message area.

use anyhow::{Context, Result};

/// Copies `text` to the system clipboard.
pub fn copy(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text.to_string())
        .context("Failed to write clipboard")?;
    Ok(())
}
