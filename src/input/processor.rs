//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position and
//! the drag session) and the key-binding map. It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::EduEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::command::EduCommand;
use crate::options::KeybindingOptions;

/// A pointer drag in progress: the last cursor position seen while the
/// primary button was held.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    last: Vec2,
}

/// Converts raw window events into [`EduCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyN") {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last known cursor position in physical pixels.
    cursor: Vec2,
    /// Active drag, if the primary button is held.
    drag: Option<DragSession>,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: Vec2::ZERO,
            drag: None,
            key_bindings,
        }
    }

    /// Whether a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Replace the key bindings (e.g. after loading a preset).
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// End the drag session without producing a command.
    pub fn release(&mut self) {
        self.drag = None;
    }

    /// Look up a key press and return the corresponding command, if bound.
    ///
    /// `key` uses the `winit::keyboard::KeyCode` debug format
    /// (`"KeyN"`, `"Digit3"`, `"Escape"`).
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<EduCommand> {
        let command = self
            .key_bindings
            .lookup(key)
            .map(super::KeyAction::to_command);
        if command.is_none() {
            log::debug!("unbound key {key}");
        }
        command
    }

    /// Process a platform-agnostic input event.
    ///
    /// Returns a command for the engine when the event maps to one: cursor
    /// motion during a drag yields [`EduCommand::RotateObjects`], scrolling
    /// yields [`EduCommand::Zoom`].
    pub fn handle_event(&mut self, event: InputEvent) -> Option<EduCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.handle_cursor_moved(Vec2::new(x, y))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed);
                None
            }
            InputEvent::Scroll { delta } => Some(EduCommand::Zoom { delta }),
            InputEvent::CursorLeft => {
                self.drag = None;
                None
            }
        }
    }

    fn handle_cursor_moved(&mut self, position: Vec2) -> Option<EduCommand> {
        self.cursor = position;
        let drag = self.drag.as_mut()?;
        let delta = position - drag.last;
        drag.last = position;
        Some(EduCommand::RotateObjects { delta })
    }

    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button != MouseButton::Left {
            return;
        }
        self.drag = pressed.then_some(DragSession { last: self.cursor });
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subject::SubjectId;

    fn press(input: &mut InputProcessor, pressed: bool) {
        let cmd = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
        assert!(cmd.is_none());
    }

    #[test]
    fn hover_without_press_does_nothing() {
        let mut input = InputProcessor::new();
        let cmd = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 5.0 });
        assert!(cmd.is_none());
        assert!(!input.is_dragging());

        // A later press anchors the drag at the hovered position.
        press(&mut input, true);
        assert_eq!(
            input.handle_event(InputEvent::CursorMoved { x: 12.0, y: 5.0 }),
            Some(EduCommand::RotateObjects {
                delta: Vec2::new(2.0, 0.0)
            })
        );
    }

    #[test]
    fn drag_yields_deltas_from_last_position() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        press(&mut input, true);
        assert!(input.is_dragging());

        let first = input.handle_event(InputEvent::CursorMoved { x: 110.0, y: 95.0 });
        assert_eq!(
            first,
            Some(EduCommand::RotateObjects {
                delta: Vec2::new(10.0, -5.0)
            })
        );
        let second = input.handle_event(InputEvent::CursorMoved { x: 111.0, y: 95.0 });
        assert_eq!(
            second,
            Some(EduCommand::RotateObjects {
                delta: Vec2::new(1.0, 0.0)
            })
        );

        press(&mut input, false);
        assert!(!input.is_dragging());
        let after = input.handle_event(InputEvent::CursorMoved { x: 150.0, y: 0.0 });
        assert!(after.is_none());
    }

    #[test]
    fn secondary_buttons_do_not_drag() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(!input.is_dragging());
    }

    #[test]
    fn leaving_the_window_ends_the_drag() {
        let mut input = InputProcessor::new();
        press(&mut input, true);
        let _ = input.handle_event(InputEvent::CursorLeft);
        assert!(!input.is_dragging());
    }

    #[test]
    fn scroll_maps_to_zoom() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_event(InputEvent::Scroll { delta: 120.0 }),
            Some(EduCommand::Zoom { delta: 120.0 })
        );
    }

    #[test]
    fn default_key_bindings() {
        let input = InputProcessor::new();
        assert_eq!(input.handle_key_press("KeyN"), Some(EduCommand::NextModel));
        assert_eq!(input.handle_key_press("KeyM"), Some(EduCommand::ToggleMode));
        assert_eq!(input.handle_key_press("Escape"), Some(EduCommand::Reset));
        assert_eq!(
            input.handle_key_press("Digit6"),
            Some(EduCommand::SelectSubject(SubjectId::Physics))
        );
        assert_eq!(input.handle_key_press("KeyQ"), None);
    }
}
