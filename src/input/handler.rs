//! Input event handler for polling and processing keyboard events.

use super::keys::{map_key_event, InputEvent};
use crate::app::state::AppState;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use termion::event::{Event, MouseButton, MouseEvent};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, preventing character loss during rapid input (paste).
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Handles terminal input events and updates application state.
///
/// The InputHandler polls for termion events, converts them to high-level
/// [`InputEvent`]s for the current mode, and applies them to the state.
pub struct InputHandler {
    /// Event source iterator (maintains position in the input buffer)
    events: EventSource,
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped document data.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Polls for the next terminal event.
    ///
    /// Returns `Some(Event)` if an event occurred, `None` otherwise.
    pub fn poll_event(&mut self) -> Result<Option<Event>> {
        match &mut self.events {
            EventSource::Stdin(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
            EventSource::Tty(events) => {
                if let Some(event_result) = events.next() {
                    return Ok(Some(event_result?));
                }
            }
        }

        Ok(None)
    }

    /// Handles a terminal event and updates application state.
    ///
    /// Mouse wheel events scroll the node list when mouse support is
    /// enabled; everything else goes through the per-mode key mapping.
    pub fn handle_event(&mut self, event: Event, state: &mut AppState) {
        if let Event::Mouse(mouse_event) = event {
            if state.config().enable_mouse {
                match mouse_event {
                    MouseEvent::Press(MouseButton::WheelUp, _, _) => state.select_previous(),
                    MouseEvent::Press(MouseButton::WheelDown, _, _) => state.select_next(),
                    _ => {}
                }
            }
            return;
        }

        let input = map_key_event(event, state.mode(), state.inspector().mode());
        Self::apply(input, state);
    }

    /// Applies a mapped input event to the state.
    fn apply(input: InputEvent, state: &mut AppState) {
        match input {
            InputEvent::Quit => state.request_quit(),
            InputEvent::ForceQuit => state.force_quit(),
            InputEvent::MoveDown => state.select_next(),
            InputEvent::MoveUp => state.select_previous(),
            InputEvent::OpenInspector => state.open_inspector(),
            InputEvent::CloseInspector => state.close_inspector(),
            InputEvent::WriteFile => state.save_file(),
            InputEvent::StartEdit => state.start_edit(),
            InputEvent::SaveEdit => state.save_edit(),
            InputEvent::CancelEdit => state.cancel_edit(),
            InputEvent::NextField => state.inspector_mut().focus_next(),
            InputEvent::PreviousField => state.inspector_mut().focus_previous(),
            InputEvent::InsertChar(c) => state.inspector_mut().push_char(c),
            InputEvent::DeleteChar => state.inspector_mut().pop_char(),
            InputEvent::CopyJson => state.copy_node_json(),
            InputEvent::CopyPath => state.copy_node_path(),
            InputEvent::Unknown => {}
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
