use glam::Vec3;

use crate::camera::core::{Camera, CameraUniform};
use crate::options::CameraOptions;

/// Owns the camera and its distance from the origin.
///
/// The camera never turns; dragging rotates the objects instead. Only the
/// eye's z coordinate changes, clamped to the configured range.
#[derive(Debug, Clone)]
pub struct CameraController {
    distance: f32,
    min_distance: f32,
    max_distance: f32,
    zoom_speed: f32,

    /// Camera derived from the current distance and viewport.
    pub camera: Camera,
    /// CPU copy of the GPU uniform, refreshed by [`Self::uniform`].
    uniform: CameraUniform,
}

impl CameraController {
    /// Camera at the configured initial distance with the given aspect.
    #[must_use]
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let options = options.sanitized();
        let (min_distance, max_distance) =
            (options.min_distance, options.max_distance);
        let distance = options.initial_distance.clamp(min_distance, max_distance);

        let camera = Camera {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        };

        Self {
            distance,
            min_distance,
            max_distance,
            zoom_speed: options.zoom_speed,
            camera,
            uniform: CameraUniform::new(),
        }
    }

    /// Current eye distance along +Z.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Move the eye by `delta` wheel units (positive = further away),
    /// clamped to the allowed range.
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            log::debug!("ignoring non-finite zoom delta {delta}");
            return;
        }
        self.distance = (self.distance + delta * self.zoom_speed)
            .clamp(self.min_distance, self.max_distance);
        self.camera.eye = Vec3::new(0.0, 0.0, self.distance);
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.camera.aspect = width as f32 / height as f32;
    }

    /// Refresh and return the uniform for the current camera state.
    pub fn uniform(&mut self) -> CameraUniform {
        self.uniform.update_view_proj(&self.camera);
        self.uniform
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn controller() -> CameraController {
        CameraController::new(&CameraOptions::default(), 1.0)
    }

    #[test]
    fn starts_at_initial_distance() {
        let c = controller();
        assert_eq!(c.distance(), 5.0);
        assert_eq!(c.camera.eye, Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn zoom_scales_wheel_delta() {
        let mut c = controller();
        c.zoom(100.0);
        assert!((c.distance() - 6.0).abs() < 1e-5);
        c.zoom(-150.0);
        assert!((c.distance() - 4.5).abs() < 1e-5);
    }

    #[test]
    fn zoom_clamps_at_both_ends() {
        let mut c = controller();
        c.zoom(10_000.0);
        assert_eq!(c.distance(), 10.0);
        c.zoom(-10_000.0);
        assert_eq!(c.distance(), 2.0);
    }

    #[test]
    fn distance_stays_in_range_for_any_wheel_sequence() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..64 {
            let mut c = controller();
            for _ in 0..200 {
                c.zoom(rng.random_range(-500.0..500.0));
                assert!((2.0..=10.0).contains(&c.distance()));
                assert_eq!(c.camera.eye.z, c.distance());
            }
        }
    }

    #[test]
    fn non_finite_zoom_is_ignored() {
        let mut c = controller();
        c.zoom(f32::NAN);
        c.zoom(f32::INFINITY);
        assert_eq!(c.distance(), 5.0);
    }

    #[test]
    fn inverted_range_is_normalised() {
        let options = CameraOptions {
            min_distance: 10.0,
            max_distance: 2.0,
            ..CameraOptions::default()
        };
        let mut c = CameraController::new(&options, 1.0);
        c.zoom(-10_000.0);
        assert_eq!(c.distance(), 2.0);
        c.zoom(10_000.0);
        assert_eq!(c.distance(), 10.0);
    }

    #[test]
    fn non_finite_options_fall_back_to_defaults() {
        let options = CameraOptions {
            min_distance: f32::NAN,
            max_distance: f32::NAN,
            initial_distance: f32::NAN,
            zoom_speed: f32::INFINITY,
            ..CameraOptions::default()
        };
        let mut c = CameraController::new(&options, 1.0);
        assert_eq!(c.distance(), 5.0);
        c.zoom(100.0);
        assert!((c.distance() - 6.0).abs() < 1e-5);
        c.zoom(-10_000.0);
        assert_eq!(c.distance(), 2.0);
    }

    #[test]
    fn resize_updates_aspect() {
        let mut c = controller();
        c.resize(1600, 800);
        assert_eq!(c.camera.aspect, 2.0);
        c.resize(0, 800);
        assert_eq!(c.camera.aspect, 2.0);
    }
}
