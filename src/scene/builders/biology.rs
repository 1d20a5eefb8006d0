use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;

use super::jitter;
use crate::animation::Behavior;
use crate::scene::{Material, Scene, SceneNode, Shape};

/// Points per DNA strand.
const HELIX_POINTS: usize = 100;

/// Two intertwined tubes, two full turns over four units of height.
pub(super) fn dna_helix(scene: &mut Scene) {
    let strand: Vec<Vec3> = (0..HELIX_POINTS)
        .map(|i| {
            let f = i as f32 / HELIX_POINTS as f32;
            let angle = f * PI * 4.0;
            Vec3::new(angle.cos() * 0.5, f * 4.0 - 2.0, angle.sin() * 0.5)
        })
        .collect();
    let complement: Vec<Vec3> =
        strand.iter().map(|p| Vec3::new(-p.x, p.y, -p.z)).collect();

    scene.add(
        SceneNode::mesh(
            Shape::tube(strand, 0.05),
            Material::phong(0x00ff88).with_opacity(0.8),
        )
        .named("strand"),
    );
    scene.add(
        SceneNode::mesh(
            Shape::tube(complement, 0.05),
            Material::phong(0xff0088).with_opacity(0.8),
        )
        .named("complementary strand"),
    );
}

/// Ventricle, two atria and the aorta, beating as one group.
pub(super) fn human_heart(scene: &mut Scene) {
    let atrium = |x: f32| {
        SceneNode::mesh(Shape::sphere(0.4, 12, 12), Material::phong(0xff6b6b))
            .at(x, 0.8, 0.0)
    };

    let heart = SceneNode::group()
        .named("heart")
        .with_behavior(Behavior::Heartbeat)
        .with_child(
            SceneNode::mesh(
                Shape::sphere(0.8, 16, 16),
                Material::phong(0xdc143c),
            )
            .stretched(1.0, 1.2, 0.8),
        )
        .with_child(atrium(-0.3).named("left atrium"))
        .with_child(atrium(0.3).named("right atrium"))
        .with_child(
            SceneNode::mesh(
                Shape::cylinder(0.1, 0.1, 1.0),
                Material::phong(0x8b0000),
            )
            .named("aorta")
            .at(0.0, 1.5, 0.0),
        );
    scene.add(heart);
}

/// Wireframe cell wall with nucleus, vacuole and six drifting
/// chloroplasts at random spots.
pub(super) fn plant_cell<R: Rng>(scene: &mut Scene, rng: &mut R) {
    let mut cell = SceneNode::group()
        .named("plant cell")
        .with_child(
            SceneNode::mesh(
                Shape::cuboid(2.0, 1.5, 1.0),
                Material::phong(0x90ee90).with_opacity(0.3).wireframe(),
            )
            .named("cell wall"),
        )
        .with_child(
            SceneNode::mesh(
                Shape::sphere(0.3, 16, 16),
                Material::phong(0x4b0082),
            )
            .named("nucleus"),
        );

    for i in 0..6 {
        let position =
            Vec3::new(jitter(rng, 1.5), jitter(rng, 1.0), jitter(rng, 0.8));
        cell.push(
            SceneNode::mesh(Shape::sphere(0.1, 8, 8), Material::phong(0x228b22))
                .named("chloroplast")
                .at_vec(position)
                .with_behavior(Behavior::Organelle {
                    offset: i as f32 * PI / 3.0,
                }),
        );
    }

    cell.push(
        SceneNode::mesh(
            Shape::sphere(0.4, 12, 12),
            Material::phong(0x87ceeb).with_opacity(0.5),
        )
        .named("vacuole")
        .at(0.5, 0.3, 0.0),
    );
    scene.add(cell);
}
