//! Rendering: CPU tessellation, per-frame world-space flattening, and the
//! wgpu forward pass that draws it.
//!
//! The [`Renderer`] owns every GPU resource. Each frame it re-flattens the
//! engine's scene (animations move nodes every frame), uploads three vertex
//! streams, and draws opaque triangles, wireframe lines, then translucent
//! triangles back to front.

/// Per-frame flattening into vertex streams.
pub mod frame;
/// Light and scene uniforms.
pub mod lighting;
/// Shape tessellation.
pub mod mesh;
/// Scene pipelines.
pub mod pipeline;

use wgpu::util::DeviceExt;

use self::frame::{FrameGeometry, FrameVertex, MeshCache};
use self::lighting::{clear_color, LightUniform, SceneUniform};
use self::pipeline::ScenePipelines;
use crate::engine::EduEngine;
use crate::error::EduError;
use crate::gpu::dynamic_buffer::DynamicBuffer;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::DepthTarget;
use crate::options::DisplayOptions;

/// Initial vertex capacity of each stream.
const INITIAL_VERTICES: usize = 16 * 1024;

/// GPU side of the viewer.
pub struct Renderer {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    pipelines: ScenePipelines,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth: DepthTarget,
    opaque: DynamicBuffer<FrameVertex>,
    transparent: DynamicBuffer<FrameVertex>,
    lines: DynamicBuffer<FrameVertex>,
    meshes: MeshCache,
    lights: LightUniform,
    clear: wgpu::Color,
}

impl Renderer {
    /// Create the GPU context for `window` and all scene resources.
    ///
    /// # Errors
    ///
    /// Returns [`EduError::Gpu`] if surface, adapter, or device creation
    /// fails.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        display: &DisplayOptions,
    ) -> Result<Self, EduError> {
        let context = RenderContext::new(window, size).await?;
        let device = &context.device;

        let pipelines = ScenePipelines::new(device, context.format());
        let lights = LightUniform::from_display(display);
        let uniform = SceneUniform {
            camera: crate::camera::core::CameraUniform::new(),
            lights,
        };
        let uniform_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Scene Uniform Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Scene Bind Group"),
            layout: &pipelines.layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let (width, height) = context.size();
        let depth = DepthTarget::new(device, width, height);
        let stream = |label| {
            DynamicBuffer::new(
                device,
                label,
                INITIAL_VERTICES,
                wgpu::BufferUsages::VERTEX,
            )
        };
        let opaque = stream("Opaque Vertices");
        let transparent = stream("Transparent Vertices");
        let lines = stream("Wireframe Vertices");

        Ok(Self {
            pipelines,
            uniform_buffer,
            bind_group,
            depth,
            opaque,
            transparent,
            lines,
            meshes: MeshCache::new(),
            lights,
            clear: clear_color(display),
            context,
        })
    }

    /// Reconfigure the surface and depth buffer. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.depth = DepthTarget::new(&self.context.device, width, height);
    }

    /// Draw the engine's current scene and present it.
    ///
    /// # Errors
    ///
    /// Returns the surface error when no frame could be acquired; the
    /// caller resizes on `Lost`/`Outdated`.
    pub fn render(
        &mut self,
        engine: &mut EduEngine,
    ) -> Result<(), wgpu::SurfaceError> {
        let _ = self.meshes.sync(engine.scene());
        let eye = engine.camera_controller.camera.eye;
        // The viewport shows only the background while a subject loads.
        let geometry = if engine.is_loading() {
            FrameGeometry::default()
        } else {
            FrameGeometry::build(engine.scene(), &self.meshes, eye)
        };
        engine.scene_mut().mark_rendered();

        let uniform = SceneUniform {
            camera: engine.camera_controller.uniform(),
            lights: self.lights,
        };
        self.upload(&geometry, &uniform);

        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.context.create_encoder();
        self.encode_pass(&mut encoder, &view);
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    fn upload(&mut self, geometry: &FrameGeometry, uniform: &SceneUniform) {
        let device = &self.context.device;
        let queue = &self.context.queue;
        let _ = self.opaque.write(device, queue, &geometry.opaque);
        let _ = self.transparent.write(device, queue, &geometry.transparent);
        let _ = self.lines.write(device, queue, &geometry.lines);
        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[*uniform]),
        );
    }

    fn encode_pass(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Scene Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                depth_slice: None,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.clear),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(
                wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                },
            ),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        pass.set_bind_group(0, &self.bind_group, &[]);

        for (pipeline, stream) in [
            (&self.pipelines.opaque, &self.opaque),
            (&self.pipelines.lines, &self.lines),
            (&self.pipelines.transparent, &self.transparent),
        ] {
            if stream.is_empty() {
                continue;
            }
            pass.set_pipeline(pipeline);
            pass.set_vertex_buffer(0, stream.buffer().slice(..));
            pass.draw(0..stream.count() as u32, 0..1);
        }
    }
}
