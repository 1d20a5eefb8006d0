//! Scene graph: top-level nodes, mesh/group hierarchy, and the builders that
//! populate it per subject.
//!
//! A [`Scene`] holds at most one subject's tableau at a time. Builders
//! always [`clear`](Scene::clear) before adding, so switching subjects never
//! accumulates nodes.

pub mod builders;
mod material;
mod node;
mod shape;

use glam::Mat4;
pub use material::{hex, hsl, srgb_to_linear, Material};
pub use node::{Primitive, SceneNode, Transform};
use rustc_hash::FxHashMap;
pub use shape::Shape;

use crate::animation::BehaviorKind;

/// A mesh flattened into world space, ready for the renderer.
#[derive(Debug, Clone, Copy)]
pub struct WorldItem<'a> {
    /// The primitive to draw.
    pub primitive: &'a Primitive,
    /// Local-to-world matrix, including the baked geometry scale.
    pub world: Mat4,
    /// Depth-first index among meshes; stable while the scene is unchanged.
    pub mesh_index: usize,
}

/// The scene. Owns all top-level nodes in insertion order.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    /// Bumped on any structural mutation (add/clear).
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether the node structure changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Record that the renderer has consumed the current structure.
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    /// Structural generation counter.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Add a top-level node.
    pub fn add(&mut self, node: SceneNode) {
        self.nodes.push(node);
        self.invalidate();
    }

    /// Remove every node.
    pub fn clear(&mut self) {
        if !self.nodes.is_empty() {
            log::debug!("clearing {} top-level nodes", self.nodes.len());
        }
        self.nodes.clear();
        self.invalidate();
    }

    /// Number of top-level nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level nodes.
    #[must_use]
    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    /// Mutable top-level nodes. Transforms and behaviors may change freely;
    /// the structure cannot (no push/remove through this slice).
    pub fn nodes_mut(&mut self) -> &mut [SceneNode] {
        &mut self.nodes
    }

    /// Visit every node, depth first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a SceneNode)) {
        for node in &self.nodes {
            node.visit(f);
        }
    }

    /// Mutable depth-first visit of every node.
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut SceneNode)) {
        for node in &mut self.nodes {
            node.visit_mut(f);
        }
    }

    /// Number of mesh nodes at any depth.
    #[must_use]
    pub fn primitive_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |n| {
            if n.is_mesh() {
                count += 1;
            }
        });
        count
    }

    /// How many nodes carry each behavior marker.
    #[must_use]
    pub fn behavior_histogram(&self) -> FxHashMap<BehaviorKind, usize> {
        let mut counts = FxHashMap::default();
        self.visit(&mut |n| {
            if let Some(kind) = n.behavior_kind() {
                *counts.entry(kind).or_insert(0) += 1;
            }
        });
        counts
    }

    /// Sorted list of distinct markers present.
    #[must_use]
    pub fn behavior_kinds(&self) -> Vec<BehaviorKind> {
        let mut kinds: Vec<_> = self.behavior_histogram().into_keys().collect();
        kinds.sort_unstable();
        kinds
    }

    /// Every mesh with its world matrix, depth first.
    #[must_use]
    pub fn world_items(&self) -> Vec<WorldItem<'_>> {
        fn walk<'a>(
            node: &'a SceneNode,
            parent: Mat4,
            out: &mut Vec<WorldItem<'a>>,
        ) {
            let world = parent * node.transform.matrix();
            if let Some(primitive) = &node.primitive {
                let mesh_index = out.len();
                out.push(WorldItem {
                    primitive,
                    world: world * Mat4::from_scale(primitive.geometry_scale),
                    mesh_index,
                });
            }
            for child in &node.children {
                walk(child, world, out);
            }
        }

        let mut out = Vec::new();
        for node in &self.nodes {
            walk(node, Mat4::IDENTITY, &mut out);
        }
        out
    }
}
