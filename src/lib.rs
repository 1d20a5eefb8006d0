// -- Lint policy ---------------------------------------------------------
// Crate-wide lints. Cargo.toml mirrors these for the binary and benches.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![warn(unused_results)]
#![warn(unused_qualifications)]
// Cast hygiene
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]

//! Interactive 3D learning scenes rendered with wgpu.
//!
//! EduVerse shows six subjects (biology, space science, mathematics,
//! geography, chemistry, physics), each with three hand-built scenes. Every
//! scene is a small tree of primitive meshes; some nodes carry a behavior
//! marker that animates them each frame. The user rotates the objects by
//! dragging, zooms with the wheel, and steps through a subject's models.
//!
//! # Key entry points
//!
//! - [`EduEngine`] - headless core: selection, scene, camera, animation
//! - [`EduCommand`] - the commands input and keys resolve to
//! - [`scene::Scene`] - the scene graph and its per-subject builders
//! - [`animation`] - behavior markers and the per-frame animator
//! - [`renderer::Renderer`] - draws an engine's scene to a surface
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The engine owns all state and never touches the GPU. Each frame it
//! commits a pending subject once its loading delay has elapsed, rebuilds
//! the scene when the shown model changes, applies either the drag rotation
//! or the idle turntable, then runs every behavior marker. The renderer
//! tessellates shapes once per scene, flattens the tree into world-space
//! vertex streams and draws opaque meshes, wireframe edges and
//! back-to-front transparent meshes in three passes.

/// Per-object behaviors and the frame clock that drives them.
pub mod animation;
/// Zoom-only perspective camera and its GPU uniform.
pub mod camera;
/// Headless engine: selection, scene sync, rotation and animation.
pub mod engine;
/// Crate error type.
pub mod error;
/// wgpu device, buffers and pipeline helpers.
pub mod gpu;
/// Platform-neutral input events and drag tracking.
pub mod input;
/// Runtime options with TOML presets.
pub mod options;
/// Tessellation and the three-pass scene renderer.
pub mod renderer;
/// Scene graph and the per-subject builders.
pub mod scene;
/// Subject, model and mode selection with the loading delay.
pub mod selection;
/// The static subject catalog.
pub mod subject;
/// Standalone winit window.
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::command::EduCommand;
pub use engine::EduEngine;
pub use error::EduError;
pub use input::{InputEvent, MouseButton};
pub use options::Options;
pub use scene::Scene;
pub use subject::SubjectId;
#[cfg(feature = "viewer")]
pub use viewer::Viewer;
