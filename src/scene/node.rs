use glam::{EulerRot, Mat4, Quat, Vec3};

use super::{Material, Shape};
use crate::animation::{Behavior, BehaviorKind};

/// Position, Euler rotation (XYZ order, radians) and scale of a node
/// relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Euler angles applied in X, Y, Z order.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Rotation as a quaternion.
    #[must_use]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Local-to-parent matrix (`T * R * S`).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            self.quat(),
            self.position,
        )
    }
}

/// The renderable part of a node: shape, baked geometry scale and material.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// Geometry.
    pub shape: Shape,
    /// Non-uniform scale baked into the geometry (not animated).
    pub geometry_scale: Vec3,
    /// Appearance.
    pub material: Material,
}

/// A node in the scene tree: a mesh when it carries a [`Primitive`], a
/// group otherwise. Either kind can hold children and a behavior marker.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Optional display name, used only for logging.
    pub name: Option<&'static str>,
    /// Geometry and material, `None` for groups.
    pub primitive: Option<Primitive>,
    /// Local transform.
    pub transform: Transform,
    /// Per-frame animation rule, if any.
    pub behavior: Option<Behavior>,
    /// Child nodes, transformed by this node.
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// A mesh node.
    #[must_use]
    pub fn mesh(shape: Shape, material: Material) -> Self {
        Self {
            name: None,
            primitive: Some(Primitive {
                shape,
                geometry_scale: Vec3::ONE,
                material,
            }),
            transform: Transform::default(),
            behavior: None,
            children: Vec::new(),
        }
    }

    /// An empty group node.
    #[must_use]
    pub fn group() -> Self {
        Self {
            name: None,
            primitive: None,
            transform: Transform::default(),
            behavior: None,
            children: Vec::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    /// Set the local position.
    #[must_use]
    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vec3::new(x, y, z);
        self
    }

    /// Set the local position from a vector.
    #[must_use]
    pub fn at_vec(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    /// Set the local Euler rotation.
    #[must_use]
    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Vec3::new(x, y, z);
        self
    }

    /// Orient the node's +Y axis along `direction`.
    #[must_use]
    pub fn aligned_to(mut self, direction: Vec3) -> Self {
        let q = Quat::from_rotation_arc(Vec3::Y, direction.normalize());
        let (x, y, z) = q.to_euler(EulerRot::XYZ);
        self.transform.rotation = Vec3::new(x, y, z);
        self
    }

    /// Bake a non-uniform scale into the geometry.
    #[must_use]
    pub fn stretched(mut self, x: f32, y: f32, z: f32) -> Self {
        if let Some(p) = self.primitive.as_mut() {
            p.geometry_scale = Vec3::new(x, y, z);
        }
        self
    }

    /// Attach a behavior marker.
    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = Some(behavior);
        self
    }

    /// Append a child.
    #[must_use]
    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child in place.
    pub fn push(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Whether this node draws anything itself.
    #[must_use]
    pub fn is_mesh(&self) -> bool {
        self.primitive.is_some()
    }

    /// Marker tag, if any.
    #[must_use]
    pub fn behavior_kind(&self) -> Option<BehaviorKind> {
        self.behavior.as_ref().map(Behavior::kind)
    }

    /// Visit this node and all descendants, depth first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a SceneNode)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Mutable depth-first visit.
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut SceneNode)) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }
}
