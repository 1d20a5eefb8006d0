//! CPU tessellation of [`Shape`]s into indexed triangle meshes.
//!
//! Tessellation densities follow the shapes' own parameters where they have
//! them; tori, tubes and cylinders use fixed counts.

use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec3};
use rustc_hash::FxHashSet;

use crate::scene::Shape;

/// Radial segments of every cylinder.
pub const CYLINDER_SEGMENTS: u32 = 32;
/// Segments around a torus tube.
pub const TORUS_RADIAL: u32 = 8;
/// Segments along a torus ring.
pub const TORUS_TUBULAR: u32 = 100;
/// Segments along a tube's centre curve.
pub const TUBE_TUBULAR: u32 = 100;
/// Segments around a tube.
pub const TUBE_RADIAL: u32 = 8;

/// Indexed triangle list in local space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Unit vertex normals, parallel to `positions`.
    pub normals: Vec<Vec3>,
    /// Triangle list indices.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal.normalize_or_zero());
        index
    }

    fn triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Unique undirected triangle edges, sorted, for wireframe drawing.
    #[must_use]
    pub fn edges(&self) -> Vec<[u32; 2]> {
        let mut seen = FxHashSet::default();
        for tri in self.indices.chunks_exact(3) {
            for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let _ = seen.insert([a.min(b), a.max(b)]);
            }
        }
        let mut edges: Vec<_> = seen.into_iter().collect();
        edges.sort_unstable();
        edges
    }
}

/// Tessellate a shape.
#[must_use]
pub fn tessellate(shape: &Shape) -> MeshData {
    match shape {
        Shape::Sphere {
            radius,
            segments,
            rings,
        } => sphere(*radius, *segments, *rings),
        Shape::Cuboid { size } => cuboid(*size),
        Shape::Cone {
            radius,
            height,
            segments,
        } => cylinder(0.0, *radius, *height, *segments),
        Shape::Cylinder {
            radius_top,
            radius_bottom,
            height,
        } => cylinder(*radius_top, *radius_bottom, *height, CYLINDER_SEGMENTS),
        Shape::Torus { radius, tube } => {
            torus(*radius, *tube, TORUS_RADIAL, TORUS_TUBULAR)
        }
        Shape::Tetrahedron { radius } => tetrahedron(*radius),
        Shape::Plane { width, height } => plane(*width, *height),
        Shape::Tube { points, radius } => {
            tube(points, *radius, TUBE_TUBULAR, TUBE_RADIAL)
        }
    }
}

/// UV sphere. Pole rows produce one triangle per segment, other rows two.
fn sphere(radius: f32, segments: u32, rings: u32) -> MeshData {
    let (w, h) = (segments.max(3), rings.max(2));
    let mut mesh = MeshData::default();

    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let dir = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            let _ = mesh.push(dir * radius, dir);
        }
    }

    let row = w + 1;
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.triangle(a, b, d);
            }
            if iy != h - 1 {
                mesh.triangle(b, c, d);
            }
        }
    }
    mesh
}

fn cuboid(size: Vec3) -> MeshData {
    let half = size / 2.0;
    let mut mesh = MeshData::default();
    // (normal, u axis, v axis) per face; u × v = normal.
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    for (normal, u, v) in faces {
        let center = normal * half;
        let (du, dv) = (u * half, v * half);
        let base = mesh.push(center - du - dv, normal);
        let _ = mesh.push(center + du - dv, normal);
        let _ = mesh.push(center + du + dv, normal);
        let _ = mesh.push(center - du + dv, normal);
        mesh.triangle(base, base + 1, base + 2);
        mesh.triangle(base, base + 2, base + 3);
    }
    mesh
}

/// Capped, possibly tapered cylinder along Y. A zero radius collapses that
/// end to a point and drops its cap (a cone).
fn cylinder(
    radius_top: f32,
    radius_bottom: f32,
    height: f32,
    segments: u32,
) -> MeshData {
    let segments = segments.max(3);
    let half = height / 2.0;
    let slope = if height > 0.0 {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };
    let mut mesh = MeshData::default();

    let row = segments + 1;
    for (y, radius) in [(half, radius_top), (-half, radius_bottom)] {
        for x in 0..=segments {
            let theta = x as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let _ = mesh.push(
                Vec3::new(radius * sin, y, radius * cos),
                Vec3::new(sin, slope, cos),
            );
        }
    }
    for x in 0..segments {
        let a = x;
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        if radius_top > 0.0 {
            mesh.triangle(a, b, d);
        }
        if radius_bottom > 0.0 {
            mesh.triangle(b, c, d);
        }
    }

    for (y, radius, sign) in [(half, radius_top, 1.0), (-half, radius_bottom, -1.0)]
    {
        if radius <= 0.0 {
            continue;
        }
        let normal = Vec3::Y * sign;
        let center = mesh.push(Vec3::new(0.0, y, 0.0), normal);
        for x in 0..=segments {
            let theta = x as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let _ = mesh.push(Vec3::new(radius * sin, y, radius * cos), normal);
        }
        for x in 0..segments {
            mesh.triangle(center, center + 1 + x, center + 2 + x);
        }
    }
    mesh
}

/// Torus in the XY plane around the Z axis.
fn torus(radius: f32, tube: f32, radial: u32, tubular: u32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = Vec3::new(u.cos(), u.sin(), 0.0);
            let position = ring * (radius + tube * v.cos())
                + Vec3::Z * (tube * v.sin());
            let _ = mesh.push(position, position - ring * radius);
        }
    }
    let row = tubular + 1;
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.triangle(a, b, d);
            mesh.triangle(b, c, d);
        }
    }
    mesh
}

/// Flat-shaded regular tetrahedron: four faces, three vertices each.
fn tetrahedron(radius: f32) -> MeshData {
    let corners = [
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(1.0, -1.0, -1.0),
    ]
    .map(|c| c.normalize() * radius);

    let mut mesh = MeshData::default();
    for [i, j, k] in [[2, 1, 0], [0, 3, 2], [1, 3, 0], [2, 3, 1]] {
        let (mut a, mut b, c) = (corners[i], corners[j], corners[k]);
        let mut normal = (b - a).cross(c - a);
        if normal.dot(a + b + c) < 0.0 {
            std::mem::swap(&mut a, &mut b);
            normal = -normal;
        }
        let base = mesh.push(a, normal);
        let _ = mesh.push(b, normal);
        let _ = mesh.push(c, normal);
        mesh.triangle(base, base + 1, base + 2);
    }
    mesh
}

fn plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width / 2.0, height / 2.0);
    let mut mesh = MeshData::default();
    for (x, y) in [(-hw, -hh), (hw, -hh), (hw, hh), (-hw, hh)] {
        let _ = mesh.push(Vec3::new(x, y, 0.0), Vec3::Z);
    }
    mesh.triangle(0, 1, 2);
    mesh.triangle(0, 2, 3);
    mesh
}

/// Point on a uniform Catmull-Rom spline through `points` at `t` in [0, 1].
/// End segments mirror their neighbour to get the missing control point.
fn catmull_rom(points: &[Vec3], t: f32) -> Vec3 {
    let last = points.len() - 1;
    let p = t.clamp(0.0, 1.0) * last as f32;
    let i = (p.floor() as usize).min(last - 1);
    let s = p - i as f32;

    let p1 = points[i];
    let p2 = points[i + 1];
    let p0 = if i == 0 { p1 * 2.0 - p2 } else { points[i - 1] };
    let p3 = if i + 1 == last {
        p2 * 2.0 - p1
    } else {
        points[i + 2]
    };

    let (s2, s3) = (s * s, s * s * s);
    0.5 * ((2.0 * p1)
        + (p2 - p0) * s
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * s2
        + (3.0 * p1 - p0 - 3.0 * p2 + p3) * s3)
}

/// Open tube swept along the Catmull-Rom curve through `points`, framed by
/// parallel transport so it does not twist. Fewer than two points give an
/// empty mesh.
fn tube(points: &[Vec3], radius: f32, tubular: u32, radial: u32) -> MeshData {
    let mut mesh = MeshData::default();
    if points.len() < 2 {
        return mesh;
    }

    let centers: Vec<Vec3> = (0..=tubular)
        .map(|i| catmull_rom(points, i as f32 / tubular as f32))
        .collect();
    let tangents: Vec<Vec3> = (0..centers.len())
        .map(|i| {
            let prev = centers[i.saturating_sub(1)];
            let next = centers[(i + 1).min(centers.len() - 1)];
            (next - prev).normalize_or(Vec3::Y)
        })
        .collect();

    let mut normal = tangents[0].any_orthonormal_vector();
    for (i, (&center, &tangent)) in centers.iter().zip(&tangents).enumerate() {
        if i > 0 {
            normal = Quat::from_rotation_arc(tangents[i - 1], tangent) * normal;
        }
        let binormal = tangent.cross(normal);
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let dir = normal * v.cos() + binormal * v.sin();
            let _ = mesh.push(center + dir * radius, dir);
        }
    }

    let row = radial + 1;
    for i in 1..=tubular {
        for j in 1..=radial {
            let a = row * (i - 1) + j - 1;
            let b = row * i + j - 1;
            let c = row * i + j;
            let d = row * (i - 1) + j;
            mesh.triangle(a, b, d);
            mesh.triangle(b, c, d);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(mesh: &MeshData) {
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.indices.len() % 3, 0);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
        for normal in &mesh.normals {
            assert!((normal.length() - 1.0).abs() < 1e-4, "{normal:?}");
        }
    }

    #[test]
    fn sphere_counts() {
        let mesh = tessellate(&Shape::sphere(1.0, 8, 6));
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), 9 * 7);
        assert_eq!(mesh.triangle_count(), 8 * (2 * 6 - 2));
        for p in &mesh.positions {
            assert!((p.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn cuboid_counts_and_extent() {
        let mesh = tessellate(&Shape::cuboid(2.0, 1.5, 1.0));
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        let max = mesh
            .positions
            .iter()
            .fold(Vec3::splat(f32::MIN), |m, p| m.max(*p));
        assert!((max - Vec3::new(1.0, 0.75, 0.5)).length() < 1e-6);
        assert_eq!(mesh.edges().len(), 30);
    }

    #[test]
    fn cone_drops_apex_triangles_and_cap() {
        let mesh = tessellate(&Shape::cone(0.5, 1.0, 8));
        assert_well_formed(&mesh);
        // 8 lateral + 8 base cap.
        assert_eq!(mesh.triangle_count(), 16);
        let top = mesh.positions.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!((top - 0.5).abs() < 1e-6);
    }

    #[test]
    fn cylinder_counts() {
        let mesh = tessellate(&Shape::cylinder(0.3, 0.2, 0.3));
        assert_well_formed(&mesh);
        let s = CYLINDER_SEGMENTS as usize;
        assert_eq!(mesh.triangle_count(), 2 * s + 2 * s);
    }

    #[test]
    fn torus_lies_in_xy_plane() {
        let mesh = tessellate(&Shape::torus(1.0, 0.01));
        assert_well_formed(&mesh);
        assert_eq!(
            mesh.triangle_count(),
            2 * (TORUS_RADIAL * TORUS_TUBULAR) as usize
        );
        assert!(mesh.positions.iter().all(|p| p.z.abs() <= 0.01 + 1e-6));
    }

    #[test]
    fn tetrahedron_faces_point_outward() {
        let mesh = tessellate(&Shape::tetrahedron(1.0));
        assert_well_formed(&mesh);
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 4);
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| mesh.positions[i as usize]);
            let centroid = (a + b + c) / 3.0;
            assert!(mesh.normals[tri[0] as usize].dot(centroid) > 0.0);
            let winding = (b - a).cross(c - a);
            assert!(winding.dot(centroid) > 0.0);
        }
    }

    #[test]
    fn plane_faces_z_and_has_five_edges() {
        let mesh = tessellate(&Shape::plane(1.0, 2.0));
        assert_well_formed(&mesh);
        assert!(mesh.normals.iter().all(|n| *n == Vec3::Z));
        assert_eq!(mesh.edges().len(), 5);
    }

    #[test]
    fn tube_follows_its_points() {
        let points: Vec<Vec3> =
            (0..10).map(|i| Vec3::new(0.0, i as f32 * 0.5, 0.0)).collect();
        let mesh = tessellate(&Shape::tube(points, 0.05));
        assert_well_formed(&mesh);
        assert_eq!(
            mesh.vertex_count(),
            ((TUBE_TUBULAR + 1) * (TUBE_RADIAL + 1)) as usize
        );
        assert_eq!(
            mesh.triangle_count(),
            2 * (TUBE_TUBULAR * TUBE_RADIAL) as usize
        );
        for p in &mesh.positions {
            let off_axis = Vec3::new(p.x, 0.0, p.z).length();
            assert!((off_axis - 0.05).abs() < 1e-4);
        }
    }

    #[test]
    fn degenerate_tube_is_empty() {
        let mesh = tessellate(&Shape::tube(vec![Vec3::ZERO], 0.1));
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn catmull_rom_passes_through_control_points() {
        let points = [
            Vec3::ZERO,
            Vec3::new(1.0, 2.0, 0.0),
            Vec3::new(3.0, 1.0, 1.0),
            Vec3::new(4.0, 0.0, 0.0),
        ];
        for (i, p) in points.iter().enumerate() {
            let t = i as f32 / 3.0;
            assert!((catmull_rom(&points, t) - *p).length() < 1e-5);
        }
    }
}
