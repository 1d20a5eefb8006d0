//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, growable vertex buffers, the
//! depth target, and shared pipeline boilerplate.

/// Growable GPU buffers with automatic reallocation.
pub mod dynamic_buffer;
/// Shared wgpu boilerplate for the scene pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Depth attachment sized to the surface.
pub mod texture;
