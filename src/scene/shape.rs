use glam::Vec3;

/// Built-in primitive geometry a scene node can carry.
///
/// Dimensions follow the usual conventions: radial shapes are centred on the
/// origin with their axis along +Y, boxes and planes are centred on the
/// origin, planes face +Z.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// UV sphere.
    Sphere {
        /// Sphere radius.
        radius: f32,
        /// Longitudinal segment count.
        segments: u32,
        /// Latitudinal ring count.
        rings: u32,
    },
    /// Axis-aligned box.
    Cuboid {
        /// Extent along X, Y and Z.
        size: Vec3,
    },
    /// Cone with its apex at +height/2.
    Cone {
        /// Base radius.
        radius: f32,
        /// Apex-to-base height.
        height: f32,
        /// Radial segment count (3 gives a triangular prism-like pyramid).
        segments: u32,
    },
    /// Capped cylinder, possibly tapered.
    Cylinder {
        /// Radius at +height/2.
        radius_top: f32,
        /// Radius at -height/2.
        radius_bottom: f32,
        /// Height along Y.
        height: f32,
    },
    /// Torus lying in the XY plane.
    Torus {
        /// Distance from the centre to the tube centre.
        radius: f32,
        /// Tube radius.
        tube: f32,
    },
    /// Regular tetrahedron inscribed in a sphere of `radius`.
    Tetrahedron {
        /// Circumscribed radius.
        radius: f32,
    },
    /// Flat rectangle facing +Z.
    Plane {
        /// Extent along X.
        width: f32,
        /// Extent along Y.
        height: f32,
    },
    /// Tube swept along a Catmull-Rom curve through `points`.
    Tube {
        /// Control points of the centre curve.
        points: Vec<Vec3>,
        /// Tube radius.
        radius: f32,
    },
}

impl Shape {
    /// Sphere with the given radius and tessellation.
    #[must_use]
    pub const fn sphere(radius: f32, segments: u32, rings: u32) -> Self {
        Self::Sphere {
            radius,
            segments,
            rings,
        }
    }

    /// Box with the given extents.
    #[must_use]
    pub const fn cuboid(width: f32, height: f32, depth: f32) -> Self {
        Self::Cuboid {
            size: Vec3::new(width, height, depth),
        }
    }

    /// Cone with the given base radius, height and segment count.
    #[must_use]
    pub const fn cone(radius: f32, height: f32, segments: u32) -> Self {
        Self::Cone {
            radius,
            height,
            segments,
        }
    }

    /// Cylinder with the given top/bottom radii and height.
    #[must_use]
    pub const fn cylinder(
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    ) -> Self {
        Self::Cylinder {
            radius_top,
            radius_bottom,
            height,
        }
    }

    /// Torus ring.
    #[must_use]
    pub const fn torus(radius: f32, tube: f32) -> Self {
        Self::Torus { radius, tube }
    }

    /// Regular tetrahedron.
    #[must_use]
    pub const fn tetrahedron(radius: f32) -> Self {
        Self::Tetrahedron { radius }
    }

    /// Flat rectangle.
    #[must_use]
    pub const fn plane(width: f32, height: f32) -> Self {
        Self::Plane { width, height }
    }

    /// Tube along a smooth curve through `points`.
    #[must_use]
    pub fn tube(points: Vec<Vec3>, radius: f32) -> Self {
        Self::Tube { points, radius }
    }
}
