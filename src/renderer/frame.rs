//! Per-frame flattening of the scene into world-space vertex streams.
//!
//! Every frame the animated transforms change, so meshes are re-expanded
//! into world space on the CPU. Tessellation itself is cached per scene
//! generation and shared between identical shapes.

use glam::{Mat3, Vec3};

use super::mesh::{tessellate, MeshData};
use crate::scene::{Material, Scene, Shape, WorldItem};

/// One world-space vertex with its material baked in.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// World-space unit normal.
    pub normal: [f32; 3],
    /// Linear RGB plus opacity.
    pub color: [f32; 4],
    /// Linear RGB added after lighting.
    pub emissive: [f32; 3],
    /// 1.0 for lit (Phong) materials, 0.0 for unlit.
    pub lit: f32,
}

impl FrameVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
        2 => Float32x4,
        3 => Float32x3,
        4 => Float32,
    ];

    /// Vertex buffer layout matching the WGSL `VertexInput`.
    #[must_use]
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Tessellated meshes for the scene's current structure.
#[derive(Debug, Default)]
pub struct MeshCache {
    generation: Option<u64>,
    /// Distinct shapes and their meshes.
    unique: Vec<(Shape, MeshData)>,
    /// `WorldItem::mesh_index` → index into `unique`.
    lookup: Vec<usize>,
}

impl MeshCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-tessellate if the scene structure changed since the last sync.
    /// Returns `true` when the cache was rebuilt.
    pub fn sync(&mut self, scene: &Scene) -> bool {
        if self.generation == Some(scene.generation()) {
            return false;
        }
        self.generation = Some(scene.generation());
        self.unique.clear();
        self.lookup.clear();

        for item in scene.world_items() {
            let shape = &item.primitive.shape;
            let slot = if let Some(i) =
                self.unique.iter().position(|(s, _)| s == shape)
            {
                i
            } else {
                self.unique.push((shape.clone(), tessellate(shape)));
                self.unique.len() - 1
            };
            self.lookup.push(slot);
        }
        log::debug!(
            "tessellated {} distinct shapes for {} meshes",
            self.unique.len(),
            self.lookup.len()
        );
        true
    }

    /// Mesh for the item with the given depth-first mesh index.
    #[must_use]
    pub fn mesh(&self, mesh_index: usize) -> Option<&MeshData> {
        let slot = *self.lookup.get(mesh_index)?;
        self.unique.get(slot).map(|(_, mesh)| mesh)
    }

    /// Number of distinct tessellations held.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.unique.len()
    }
}

/// The three vertex streams drawn each frame.
#[derive(Debug, Clone, Default)]
pub struct FrameGeometry {
    /// Opaque triangles, drawn first with depth writes.
    pub opaque: Vec<FrameVertex>,
    /// Translucent triangles, sorted back to front.
    pub transparent: Vec<FrameVertex>,
    /// Wireframe line segments.
    pub lines: Vec<FrameVertex>,
}

impl FrameGeometry {
    /// Flatten `scene` as seen from `eye`. `cache` must be synced to the
    /// scene's current generation.
    #[must_use]
    pub fn build(scene: &Scene, cache: &MeshCache, eye: Vec3) -> Self {
        let mut frame = Self::default();
        let mut translucent = Vec::new();

        for item in scene.world_items() {
            let Some(mesh) = cache.mesh(item.mesh_index) else {
                log::warn!("mesh cache out of date, skipping item");
                continue;
            };
            let material = &item.primitive.material;
            if material.wireframe {
                push_edges(&mut frame.lines, &item, mesh);
            } else if material.is_transparent() {
                let depth = item.world.w_axis.truncate().distance_squared(eye);
                translucent.push((depth, item, mesh));
            } else {
                push_triangles(&mut frame.opaque, &item, mesh);
            }
        }

        translucent.sort_by(|a, b| b.0.total_cmp(&a.0));
        for (_, item, mesh) in &translucent {
            push_triangles(&mut frame.transparent, item, mesh);
        }
        frame
    }

    /// Total vertices across the three streams.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.opaque.len() + self.transparent.len() + self.lines.len()
    }
}

fn vertex(material: &Material, position: Vec3, normal: Vec3) -> FrameVertex {
    let [r, g, b] = material.color;
    FrameVertex {
        position: position.to_array(),
        normal: normal.to_array(),
        color: [r, g, b, material.opacity],
        emissive: material.emissive,
        lit: if material.lit { 1.0 } else { 0.0 },
    }
}

fn push_triangles(
    out: &mut Vec<FrameVertex>,
    item: &WorldItem<'_>,
    mesh: &MeshData,
) {
    let normal_matrix = Mat3::from_mat4(item.world).inverse().transpose();
    let material = &item.primitive.material;
    out.reserve(mesh.indices.len());
    for &index in &mesh.indices {
        let i = index as usize;
        let position = item.world.transform_point3(mesh.positions[i]);
        let normal = (normal_matrix * mesh.normals[i]).normalize_or_zero();
        out.push(vertex(material, position, normal));
    }
}

fn push_edges(
    out: &mut Vec<FrameVertex>,
    item: &WorldItem<'_>,
    mesh: &MeshData,
) {
    let material = &item.primitive.material;
    for [a, b] in mesh.edges() {
        for index in [a, b] {
            let position =
                item.world.transform_point3(mesh.positions[index as usize]);
            out.push(vertex(material, position, Vec3::ZERO));
        }
    }
}
