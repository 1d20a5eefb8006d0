use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and zoom parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Camera distance from the origin when a scene opens.
    #[schemars(title = "Start Distance", range(min = 2.0, max = 10.0), extend("step" = 0.1))]
    pub initial_distance: f32,
    /// Closest allowed camera distance.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed camera distance.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Distance change per unit of wheel delta.
    #[schemars(title = "Zoom Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub zoom_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 75.0,
            znear: 0.1,
            zfar: 1000.0,
            initial_distance: 5.0,
            min_distance: 2.0,
            max_distance: 10.0,
            zoom_speed: 0.01,
        }
    }
}

impl CameraOptions {
    /// Copy with non-finite values replaced by the defaults and the
    /// distance range put in order.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f32, fallback: f32| {
            if v.is_finite() {
                v
            } else {
                log::warn!("non-finite camera option {v}, using {fallback}");
                fallback
            }
        };
        let min = finite_or(self.min_distance, defaults.min_distance);
        let max = finite_or(self.max_distance, defaults.max_distance);
        Self {
            fovy: finite_or(self.fovy, defaults.fovy),
            znear: finite_or(self.znear, defaults.znear),
            zfar: finite_or(self.zfar, defaults.zfar),
            initial_distance: finite_or(
                self.initial_distance,
                defaults.initial_distance,
            ),
            min_distance: min.min(max),
            max_distance: min.max(max),
            zoom_speed: finite_or(self.zoom_speed, defaults.zoom_speed),
        }
    }
}
