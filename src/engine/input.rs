//! Command dispatch and input routing for `EduEngine`.

use super::command::EduCommand;
use super::EduEngine;
use crate::input::InputEvent;

impl EduEngine {
    /// Process a platform-agnostic input event.
    ///
    /// Drag motion and wheel events become commands through the input
    /// processor and are executed immediately. Returns the command that
    /// ran, if any.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<EduCommand> {
        let command = self.input.handle_event(event)?;
        self.execute(command);
        Some(command)
    }

    /// Look up a key (`winit::keyboard::KeyCode` debug format) in the
    /// bindings and execute its command.
    pub fn handle_key_press(&mut self, key: &str) -> Option<EduCommand> {
        let command = self.input.handle_key_press(key)?;
        self.execute(command);
        Some(command)
    }

    /// Execute a single command.
    pub fn execute(&mut self, command: EduCommand) {
        match command {
            EduCommand::SelectSubject(subject) => {
                self.selection.select_subject(subject);
            }
            EduCommand::NextModel => {
                if self.selection.subject().is_some() {
                    self.selection.next_model();
                } else {
                    log::debug!("next model ignored: no subject");
                }
            }
            EduCommand::ToggleMode => self.selection.toggle_mode(),
            EduCommand::SetMode(mode) => self.selection.set_mode(mode),
            EduCommand::Reset => {
                log::info!("back to subject picker");
                self.selection.reset();
                self.input.release();
                self.pending_drag = glam::Vec2::ZERO;
            }
            EduCommand::RotateObjects { delta } => {
                self.pending_drag += delta;
            }
            EduCommand::Zoom { delta } => self.camera_controller.zoom(delta),
            EduCommand::ToggleAutoRotate => {
                self.auto_rotate = !self.auto_rotate;
                log::debug!("auto-rotate {}", self.auto_rotate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::options::Options;
    use crate::selection::Mode;
    use crate::subject::SubjectId;

    #[test]
    fn wheel_zoom_is_clamped() {
        let mut e = EduEngine::with_seed(Options::default(), 1);
        for _ in 0..20 {
            let _ = e.handle_input(InputEvent::Scroll { delta: 100.0 });
        }
        assert_eq!(e.camera_controller.distance(), 10.0);
        for _ in 0..40 {
            let _ = e.handle_input(InputEvent::Scroll { delta: -100.0 });
        }
        assert_eq!(e.camera_controller.distance(), 2.0);
    }

    #[test]
    fn key_presses_route_through_bindings() {
        let mut e = EduEngine::with_seed(Options::default(), 1);
        assert_eq!(
            e.handle_key_press("Digit2"),
            Some(EduCommand::SelectSubject(SubjectId::Space))
        );
        assert!(e.is_loading());
        assert_eq!(e.handle_key_press("KeyM"), Some(EduCommand::ToggleMode));
        assert_eq!(e.mode(), Mode::Play);
        assert_eq!(e.handle_key_press("F13"), None);
    }

    #[test]
    fn next_model_without_subject_is_ignored() {
        let mut e = EduEngine::with_seed(Options::default(), 1);
        e.execute(EduCommand::NextModel);
        assert_eq!(e.model_index(), 0);
    }

    #[test]
    fn set_mode_is_idempotent() {
        let mut e = EduEngine::with_seed(Options::default(), 1);
        e.execute(EduCommand::SetMode(Mode::Play));
        e.execute(EduCommand::SetMode(Mode::Play));
        assert_eq!(e.mode(), Mode::Play);
    }

    #[test]
    fn programmatic_rotation_applies_next_frame() {
        let mut e = EduEngine::with_seed(Options::default(), 1);
        e.execute(EduCommand::SelectSubject(SubjectId::Physics));
        let _ = e.update(1.0);
        let before = e.scene().nodes()[0].transform.rotation;
        e.execute(EduCommand::RotateObjects {
            delta: Vec2::new(10.0, 20.0),
        });
        let _ = e.update(0.0);
        let after = e.scene().nodes()[0].transform.rotation;
        assert!((after.y - before.y - 0.1).abs() < 1e-5);
        assert!((after.x - before.x - 0.2).abs() < 1e-5);
    }
}
