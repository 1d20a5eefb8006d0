//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture or a programmatic call, is represented as an `EduCommand`.
//! Consumers construct commands and pass them to
//! [`EduEngine::execute`](super::EduEngine::execute).

use glam::Vec2;

use crate::selection::Mode;
use crate::subject::SubjectId;

/// A discrete action the engine can perform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EduCommand {
    // ── Selection ───────────────────────────────────────────────────
    /// Pick a subject. The scene switches once the loading delay elapses.
    SelectSubject(SubjectId),

    /// Advance to the next of the subject's three models.
    NextModel,

    /// Flip between learn and play mode.
    ToggleMode,

    /// Set the mode explicitly.
    SetMode(Mode),

    /// Back to the subject picker: no subject, learn mode, empty scene.
    Reset,

    // ── View ────────────────────────────────────────────────────────
    /// Rotate every top-level object by `delta` pixels of drag.
    RotateObjects {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Move the camera along its view axis by `delta` wheel units.
    Zoom {
        /// Scroll amount (positive = further away).
        delta: f32,
    },

    /// Toggle idle auto-rotation.
    ToggleAutoRotate,
}
