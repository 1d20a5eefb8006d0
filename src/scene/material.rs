//! Surface appearance of scene primitives, plus sRGB/HSL color helpers.

/// Convert one sRGB channel in `[0, 1]` to linear.
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear RGB from a `0xRRGGBB` sRGB literal.
#[must_use]
pub fn hex(rgb: u32) -> [f32; 3] {
    let channel = |shift: u32| {
        srgb_to_linear(((rgb >> shift) & 0xff) as f32 / 255.0)
    };
    [channel(16), channel(8), channel(0)]
}

/// Linear RGB from sRGB hue/saturation/lightness, all in `[0, 1]`.
#[must_use]
pub fn hsl(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        let v = srgb_to_linear(l);
        return [v, v, v];
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let hue_to_rgb = |mut t: f32| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * 6.0 * (2.0 / 3.0 - t)
        } else {
            p
        }
    };
    [
        srgb_to_linear(hue_to_rgb(h + 1.0 / 3.0)),
        srgb_to_linear(hue_to_rgb(h)),
        srgb_to_linear(hue_to_rgb(h - 1.0 / 3.0)),
    ]
}

/// Color, transparency and shading model of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Linear base color.
    pub color: [f32; 3],
    /// Alpha in `[0, 1]`; anything below 1 is drawn in the transparent pass.
    pub opacity: f32,
    /// Linear emissive color added on top of shading.
    pub emissive: [f32; 3],
    /// Whether the directional/ambient lights affect this material.
    pub lit: bool,
    /// Draw triangle edges instead of filled faces.
    pub wireframe: bool,
}

impl Material {
    /// Lit (Phong-style) opaque material from an sRGB hex literal.
    #[must_use]
    pub fn phong(rgb: u32) -> Self {
        Self::phong_linear(hex(rgb))
    }

    /// Lit opaque material from a linear color.
    #[must_use]
    pub const fn phong_linear(color: [f32; 3]) -> Self {
        Self {
            color,
            opacity: 1.0,
            emissive: [0.0; 3],
            lit: true,
            wireframe: false,
        }
    }

    /// Unlit flat-color material from an sRGB hex literal.
    #[must_use]
    pub fn basic(rgb: u32) -> Self {
        Self::basic_linear(hex(rgb))
    }

    /// Unlit flat-color material from a linear color.
    #[must_use]
    pub const fn basic_linear(color: [f32; 3]) -> Self {
        Self {
            color,
            opacity: 1.0,
            emissive: [0.0; 3],
            lit: false,
            wireframe: false,
        }
    }

    /// Same material with the given opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Same material drawn as wireframe.
    #[must_use]
    pub const fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }

    /// Whether this material needs the blended pass.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_extremes_are_exact() {
        assert_eq!(hex(0x000000), [0.0, 0.0, 0.0]);
        assert!(hex(0xffffff).iter().all(|c| (c - 1.0).abs() < 1e-5));
        let red = hex(0xff0000);
        assert!((red[0] - 1.0).abs() < 1e-5);
        assert_eq!(&red[1..], &[0.0, 0.0]);
    }

    #[test]
    fn hsl_primary_hues() {
        let red = hsl(0.0, 1.0, 0.5);
        assert!((red[0] - 1.0).abs() < 1e-5);
        assert!(red[1].abs() < 1e-5 && red[2].abs() < 1e-5);

        let green = hsl(1.0 / 3.0, 1.0, 0.5);
        assert!((green[1] - 1.0).abs() < 1e-5);

        let grey = hsl(0.7, 0.0, 0.5);
        assert_eq!(grey[0], grey[1]);
        assert_eq!(grey[1], grey[2]);
    }

    #[test]
    fn opacity_selects_pass() {
        assert!(!Material::phong(0x123456).is_transparent());
        assert!(Material::basic(0x123456).with_opacity(0.3).is_transparent());
    }
}
