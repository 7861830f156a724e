//! Top-level UI mode.
//!
//! nodelens has two screens: the node list (`Browse`) and the modal
//! inspector over it (`Inspect`). The inspector's own Viewing/Editing
//! state lives in `inspector::InspectorMode`; this enum only tracks which
//! screen has the input focus.

use std::fmt;

/// Which screen currently receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Navigating the node list.
    #[default]
    Browse,
    /// The inspector modal is open over the list.
    Inspect,
}

impl fmt::Display for AppMode {
    /// Formats the mode for the status bar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppMode::Browse => write!(f, "BROWSE"),
            AppMode::Inspect => write!(f, "INSPECT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_browse() {
        assert_eq!(AppMode::default(), AppMode::Browse);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", AppMode::Browse), "BROWSE");
        assert_eq!(format!("{}", AppMode::Inspect), "INSPECT");
    }
}
