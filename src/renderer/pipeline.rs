//! The three scene pipelines and their shared bind group layout.

use super::frame::FrameVertex;
use crate::gpu::pipeline_helpers::{
    create_scene_pipeline, uniform_buffer, ScenePipelineDesc,
};

/// Opaque triangles, translucent triangles, and wireframe lines.
pub struct ScenePipelines {
    /// Group 0 layout: the scene uniform.
    pub layout: wgpu::BindGroupLayout,
    /// Opaque lit/unlit triangles, depth write on.
    pub opaque: wgpu::RenderPipeline,
    /// Alpha-blended triangles, depth test only.
    pub transparent: wgpu::RenderPipeline,
    /// Wireframe edges, alpha-blended.
    pub lines: wgpu::RenderPipeline,
}

impl ScenePipelines {
    /// Compile the shader and build all three pipelines for `format`.
    #[must_use]
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device
            .create_shader_module(wgpu::include_wgsl!("shaders/scene.wgsl"));

        let layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Scene Bind Group Layout"),
                entries: &[uniform_buffer(0)],
            });
        let pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Scene Pipeline Layout"),
                bind_group_layouts: &[&layout],
                push_constant_ranges: &[],
            });

        let build = |desc: ScenePipelineDesc<'_>| {
            create_scene_pipeline(
                device,
                &shader,
                &pipeline_layout,
                FrameVertex::layout(),
                format,
                &desc,
            )
        };

        let opaque = build(ScenePipelineDesc {
            label: "Opaque Pipeline",
            fragment_entry: "fs_mesh",
            topology: wgpu::PrimitiveTopology::TriangleList,
            blend: None,
            depth_write: true,
        });
        let transparent = build(ScenePipelineDesc {
            label: "Transparent Pipeline",
            fragment_entry: "fs_mesh",
            topology: wgpu::PrimitiveTopology::TriangleList,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: false,
        });
        let lines = build(ScenePipelineDesc {
            label: "Wireframe Pipeline",
            fragment_entry: "fs_line",
            topology: wgpu::PrimitiveTopology::LineList,
            blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            depth_write: true,
        });

        Self {
            layout,
            opaque,
            transparent,
            lines,
        }
    }
}
