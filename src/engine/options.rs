//! Options methods for `EduEngine`.

use super::EduEngine;
use crate::camera::controller::CameraController;
use crate::options::Options;

impl EduEngine {
    /// Replace options and apply all changes to subsystems.
    pub fn set_options(&mut self, new: Options) {
        self.options = new;
        self.auto_rotate = self.options.controls.auto_rotate;
        self.apply_options();
    }

    /// Push current option values to the animator, camera, input bindings
    /// and loading delay.
    pub fn apply_options(&mut self) {
        self.apply_animation();
        self.apply_camera();
        self.input
            .set_key_bindings(self.options.keybindings.clone());
        self.selection.set_loading_delay(
            self.options.display.loading_delay_ms as f32 / 1000.0,
        );
    }

    fn apply_animation(&mut self) {
        let ao = &self.options.animation;
        self.animator.set_enabled(ao.enabled);
        self.animator.set_time_scale(ao.time_scale);
    }

    /// Rebuild the camera controller from options, keeping the viewport
    /// aspect.
    fn apply_camera(&mut self) {
        let aspect = self.camera_controller.camera.aspect;
        self.camera_controller =
            CameraController::new(&self.options.camera, aspect);
    }

    /// Update the camera aspect after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera_controller.resize(width, height);
    }
}
