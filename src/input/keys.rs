//! Keyboard event mapping and input event types.

use crate::app::mode::AppMode;
use crate::inspector::InspectorMode;
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
///
/// These events represent user intentions (quit, open the inspector, save
/// the edit) rather than specific key presses, allowing for mode-specific
/// keybindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// User wants to quit (asks for confirmation when dirty)
    Quit,
    /// Quit discarding unsaved changes
    ForceQuit,
    /// Move the node selection down
    MoveDown,
    /// Move the node selection up
    MoveUp,
    /// Open the inspector on the selected node
    OpenInspector,
    /// Close the inspector (viewing state)
    CloseInspector,
    /// Write the document to disk
    WriteFile,
    /// Start an edit session (inspector viewing state)
    StartEdit,
    /// Commit the edit session
    SaveEdit,
    /// Discard the edit session
    CancelEdit,
    /// Focus the next edit field
    NextField,
    /// Focus the previous edit field
    PreviousField,
    /// Append a character to the focused field
    InsertChar(char),
    /// Delete the last character of the focused field
    DeleteChar,
    /// Copy the node's projected JSON to the clipboard
    CopyJson,
    /// Copy the node's path to the clipboard
    CopyPath,
    /// Key has no binding in the current mode
    Unknown,
}

/// Maps a terminal event to an [`InputEvent`] for the current mode.
///
/// Browse mode navigates the node list; the inspector has separate
/// bindings for its viewing and editing states. In editing state most
/// printable characters feed the focused field.
pub fn map_key_event(event: Event, mode: AppMode, inspector: InspectorMode) -> InputEvent {
    // We only care about key events; mouse events are handled separately.
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    match (mode, inspector) {
        (AppMode::Browse, _) => match key {
            Key::Char('q') => InputEvent::Quit,
            Key::Char('Q') => InputEvent::ForceQuit,
            Key::Char('j') | Key::Down => InputEvent::MoveDown,
            Key::Char('k') | Key::Up => InputEvent::MoveUp,
            Key::Char('\n') | Key::Char('o') => InputEvent::OpenInspector,
            Key::Char('w') => InputEvent::WriteFile,
            Key::Char('y') => InputEvent::CopyJson,
            Key::Char('Y') => InputEvent::CopyPath,
            _ => InputEvent::Unknown,
        },
        (AppMode::Inspect, InspectorMode::Viewing) => match key {
            Key::Esc | Key::Char('q') => InputEvent::CloseInspector,
            Key::Char('e') => InputEvent::StartEdit,
            Key::Char('y') => InputEvent::CopyJson,
            Key::Char('Y') => InputEvent::CopyPath,
            _ => InputEvent::Unknown,
        },
        (AppMode::Inspect, InspectorMode::Editing) => match key {
            Key::Esc => InputEvent::CancelEdit,
            Key::Char('\n') => InputEvent::SaveEdit,
            Key::Char('\t') | Key::Down => InputEvent::NextField,
            Key::BackTab | Key::Up => InputEvent::PreviousField,
            Key::Backspace => InputEvent::DeleteChar,
            Key::Char(c) => InputEvent::InsertChar(c),
            _ => InputEvent::Unknown,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: Key) -> Event {
        Event::Key(k)
    }

    #[test]
    fn test_browse_bindings() {
        let mode = AppMode::Browse;
        let insp = InspectorMode::Viewing;
        assert_eq!(map_key_event(key(Key::Char('q')), mode, insp), InputEvent::Quit);
        assert_eq!(
            map_key_event(key(Key::Char('j')), mode, insp),
            InputEvent::MoveDown
        );
        assert_eq!(map_key_event(key(Key::Down), mode, insp), InputEvent::MoveDown);
        assert_eq!(
            map_key_event(key(Key::Char('\n')), mode, insp),
            InputEvent::OpenInspector
        );
    }

    #[test]
    fn test_viewing_bindings() {
        let mode = AppMode::Inspect;
        let insp = InspectorMode::Viewing;
        assert_eq!(
            map_key_event(key(Key::Char('e')), mode, insp),
            InputEvent::StartEdit
        );
        assert_eq!(
            map_key_event(key(Key::Esc), mode, insp),
            InputEvent::CloseInspector
        );
        assert_eq!(
            map_key_event(key(Key::Char('Y')), mode, insp),
            InputEvent::CopyPath
        );
    }

    #[test]
    fn test_editing_captures_text() {
        let mode = AppMode::Inspect;
        let insp = InspectorMode::Editing;
        // 'q' types a q instead of quitting
        assert_eq!(
            map_key_event(key(Key::Char('q')), mode, insp),
            InputEvent::InsertChar('q')
        );
        assert_eq!(
            map_key_event(key(Key::Char('\n')), mode, insp),
            InputEvent::SaveEdit
        );
        assert_eq!(map_key_event(key(Key::Esc), mode, insp), InputEvent::CancelEdit);
        assert_eq!(
            map_key_event(key(Key::Backspace), mode, insp),
            InputEvent::DeleteChar
        );
        assert_eq!(
            map_key_event(key(Key::Char('\t')), mode, insp),
            InputEvent::NextField
        );
    }

    #[test]
    fn test_mouse_event_is_unknown_here() {
        use termion::event::{MouseButton, MouseEvent};
        let event = Event::Mouse(MouseEvent::Press(MouseButton::WheelUp, 1, 1));
        assert_eq!(
            map_key_event(event, AppMode::Browse, InspectorMode::Viewing),
            InputEvent::Unknown
        );
    }
}
