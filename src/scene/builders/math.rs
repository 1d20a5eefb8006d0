use std::f32::consts::PI;

use glam::Vec3;

use crate::animation::Behavior;
use crate::scene::{hsl, Material, Scene, SceneNode, Shape};

/// Recursion depth of the Sierpinski tetrahedron (4^3 = 64 solids).
const FRACTAL_LEVEL: u32 = 3;

/// Box, sphere and cone side by side.
pub(super) fn geometric_shapes(scene: &mut Scene) {
    scene.add(
        SceneNode::mesh(Shape::cuboid(0.8, 0.8, 0.8), Material::phong(0x4fc3f7))
            .named("cube")
            .at(-1.5, 0.0, 0.0),
    );
    scene.add(
        SceneNode::mesh(Shape::sphere(0.5, 16, 16), Material::phong(0x81c784))
            .named("sphere"),
    );
    scene.add(
        SceneNode::mesh(Shape::cone(0.5, 1.0, 8), Material::phong(0xff8a65))
            .named("cone")
            .at(1.5, 0.0, 0.0),
    );
}

/// Five arrows from a common origin, each shaft and head pulsing.
pub(super) fn vectors(scene: &mut Scene) {
    const ARROWS: [([f32; 3], u32); 5] = [
        ([1.0, 0.0, 0.0], 0xff0000),
        ([0.0, 1.0, 0.0], 0x00ff00),
        ([0.0, 0.0, 1.0], 0x0000ff),
        ([1.0, 1.0, 0.0], 0xffff00),
        ([1.0, 1.0, 1.0], 0xff00ff),
    ];

    let mut group = SceneNode::group().named("vectors").with_child(
        SceneNode::mesh(Shape::sphere(0.05, 8, 8), Material::phong(0xff0000))
            .named("origin"),
    );

    for (index, (direction, color)) in ARROWS.into_iter().enumerate() {
        let dir = Vec3::from_array(direction).normalize();
        let material = Material::phong(color);
        let pulse = Behavior::VectorPulse {
            offset: index as f32 * PI / 3.0,
        };

        group.push(
            SceneNode::mesh(Shape::cylinder(0.02, 0.02, 1.5), material)
                .named("shaft")
                .aligned_to(dir)
                .at_vec(dir * 0.75)
                .with_behavior(pulse),
        );
        group.push(
            SceneNode::mesh(Shape::cone(0.08, 0.2, 8), material)
                .named("head")
                .aligned_to(dir)
                .at_vec(dir * 1.5)
                .with_behavior(pulse),
        );
    }
    scene.add(group);
}

/// Level-3 Sierpinski tetrahedron, tumbling.
pub(super) fn fractal(scene: &mut Scene) {
    fn subdivide(level: u32, size: f32, position: Vec3, out: &mut SceneNode) {
        if level == 0 {
            let material = Material::phong_linear(hsl(0.0, 0.8, 0.6))
                .with_opacity(0.7);
            out.push(
                SceneNode::mesh(Shape::tetrahedron(size), material)
                    .at_vec(position),
            );
            return;
        }
        let half = size / 2.0;
        for corner in [
            Vec3::new(half, half, half),
            Vec3::new(-half, -half, half),
            Vec3::new(-half, half, -half),
            Vec3::new(half, -half, -half),
        ] {
            subdivide(level - 1, half, position + corner, out);
        }
    }

    let mut group = SceneNode::group()
        .named("sierpinski")
        .with_behavior(Behavior::FractalSpin);
    subdivide(FRACTAL_LEVEL, 1.0, Vec3::ZERO, &mut group);
    scene.add(group);
}
