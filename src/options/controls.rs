use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Drag rotation and idle auto-rotation.
pub struct ControlOptions {
    /// Radians of rotation per pixel of drag.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.05), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Spin the scene while the user is not dragging.
    #[schemars(title = "Auto Rotate")]
    pub auto_rotate: bool,
    /// Auto-rotation about Y per frame (radians).
    #[schemars(skip)]
    pub auto_rotate_yaw: f32,
    /// Auto-rotation about X per frame (radians).
    #[schemars(skip)]
    pub auto_rotate_pitch: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.01,
            auto_rotate: true,
            auto_rotate_yaw: 0.005,
            auto_rotate_pitch: 0.002,
        }
    }
}
