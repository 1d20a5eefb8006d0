use crate::camera::core::CameraUniform;
use crate::options::DisplayOptions;
use crate::scene::hex;

/// Ambient plus one directional light.
/// NOTE: Must match the WGSL `Lights` struct layout exactly (32 bytes)
///
/// WGSL layout:
///   ambient: vec3<f32>         (offset 0,  align 16)
///   ambient_intensity: f32     (offset 12)
///   direction: vec3<f32>       (offset 16, align 16)
///   intensity: f32             (offset 28)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    /// Linear ambient color.
    pub ambient: [f32; 3],
    /// Ambient multiplier.
    pub ambient_intensity: f32,
    /// Unit vector from the scene toward the light.
    pub direction: [f32; 3],
    /// Directional light multiplier.
    pub intensity: f32,
}

impl LightUniform {
    /// Lights described by the display options. The directional light
    /// shines from `light_position` toward the origin.
    #[must_use]
    pub fn from_display(display: &DisplayOptions) -> Self {
        let direction = glam::Vec3::from_array(display.light_position)
            .normalize_or(glam::Vec3::Z);
        Self {
            ambient: hex(display.ambient_color),
            ambient_intensity: display.ambient_intensity,
            direction: direction.to_array(),
            intensity: display.light_intensity,
        }
    }
}

/// Everything bound at group 0: camera then lights (128 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    /// View-projection and eye.
    pub camera: CameraUniform,
    /// Ambient and directional light.
    pub lights: LightUniform,
}

/// Background clear color in linear space.
#[must_use]
pub fn clear_color(display: &DisplayOptions) -> wgpu::Color {
    let [r, g, b] = hex(display.background);
    wgpu::Color {
        r: f64::from(r),
        g: f64::from(g),
        b: f64::from(b),
        a: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sizes_match_wgsl() {
        assert_eq!(size_of::<CameraUniform>(), 96);
        assert_eq!(size_of::<LightUniform>(), 32);
        assert_eq!(size_of::<SceneUniform>(), 128);
    }

    #[test]
    fn default_light_points_from_upper_right_front() {
        let lights = LightUniform::from_display(&DisplayOptions::default());
        let dir = glam::Vec3::from_array(lights.direction);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.x > 0.0 && dir.y > 0.0 && dir.z > 0.0);
        assert_eq!(lights.ambient_intensity, 0.6);
        assert!(lights.ambient[0] > 0.0 && lights.ambient[0] < 0.1);
    }

    #[test]
    fn background_is_near_black() {
        let color = clear_color(&DisplayOptions::default());
        assert!(color.r < 0.01 && color.r > 0.0);
        assert_eq!(color.a, 1.0);
    }
}
