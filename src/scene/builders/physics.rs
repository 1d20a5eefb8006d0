use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::animation::Behavior;
use crate::scene::{Material, Scene, SceneNode, Shape};

/// Angle step per frame for the Bohr-model electrons.
const BOHR_ELECTRON_SPEED: f32 = 0.05;

/// Bohr-style atom: nucleus, three tilted rings, three orbiting electrons.
pub(super) fn atom(scene: &mut Scene) {
    scene.add(
        SceneNode::mesh(Shape::sphere(0.2, 16, 16), Material::phong(0xff6b6b))
            .named("nucleus"),
    );
    for i in 0..3 {
        let f = i as f32;
        scene.add(
            SceneNode::mesh(
                Shape::torus(1.0, 0.01),
                Material::basic(0x74b9ff).with_opacity(0.3),
            )
            .named("orbit")
            .rotated(f * PI / 3.0, f * PI / 4.0, 0.0),
        );
        scene.add(
            SceneNode::mesh(Shape::sphere(0.05, 8, 8), Material::phong(0x0984e3))
                .named("electron")
                .at(1.0, 0.0, 0.0)
                .with_behavior(Behavior::Orbit {
                    angle: f * TAU / 3.0,
                    speed: BOHR_ELECTRON_SPEED,
                    distance: 1.0,
                }),
        );
    }
}

/// White light through a prism, fanning into seven colored rays that hit a
/// screen.
pub(super) fn light_rays(scene: &mut Scene) {
    const SPECTRUM: [u32; 7] =
        [0xff0000, 0xff8000, 0xffff00, 0x00ff00, 0x0000ff, 0x8000ff, 0xff00ff];

    let mut group = SceneNode::group()
        .named("light rays")
        .with_child(
            SceneNode::mesh(
                Shape::sphere(0.2, 16, 16),
                Material::basic(0xffff00),
            )
            .named("source")
            .at(-2.0, 0.0, 0.0),
        )
        .with_child(
            SceneNode::mesh(
                Shape::cone(0.3, 0.8, 3),
                Material::phong(0xffffff).with_opacity(0.7),
            )
            .named("prism")
            .rotated(0.0, 0.0, FRAC_PI_2),
        );

    for (index, color) in SPECTRUM.into_iter().enumerate() {
        let i = index as f32;
        group.push(
            SceneNode::mesh(
                Shape::cylinder(0.01, 0.01, 2.0),
                Material::basic(color).with_opacity(0.8),
            )
            .named("ray")
            .at(1.0, 0.0, 0.0)
            .rotated(0.0, (i - 3.0) * 0.1, FRAC_PI_2)
            .with_behavior(Behavior::LightRay {
                offset: i * PI / 4.0,
            }),
        );
    }

    group.push(
        SceneNode::mesh(
            Shape::plane(1.0, 2.0),
            Material::phong(0xf0f0f0).with_opacity(0.8),
        )
        .named("screen")
        .at(2.5, 0.0, 0.0),
    );
    scene.add(group);
}

/// Circuit board with battery, resistor, blinking LED, wires and four
/// particles of current.
pub(super) fn circuit(scene: &mut Scene) {
    let mut group = SceneNode::group()
        .named("circuit")
        .with_child(
            SceneNode::mesh(
                Shape::cuboid(3.0, 2.0, 0.1),
                Material::phong(0x228b22),
            )
            .named("board"),
        )
        .with_child(
            SceneNode::mesh(
                Shape::cuboid(0.3, 0.6, 0.2),
                Material::phong(0x000000),
            )
            .named("battery")
            .at(-1.0, 0.5, 0.1),
        )
        .with_child(
            SceneNode::mesh(Shape::sphere(0.1, 8, 8), Material::basic(0xff0000))
                .named("led")
                .at(1.0, 0.5, 0.1)
                .with_behavior(Behavior::Led),
        )
        .with_child(
            SceneNode::mesh(
                Shape::cylinder(0.05, 0.05, 0.4),
                Material::phong(0xd2691e),
            )
            .named("resistor")
            .at(0.0, -0.5, 0.1)
            .rotated(0.0, 0.0, FRAC_PI_2),
        );

    for i in 0..4 {
        group.push(
            SceneNode::mesh(
                Shape::sphere(0.02, 4, 4),
                Material::basic(0x00ffff).with_opacity(0.8),
            )
            .named("current")
            .at(-2.0 + i as f32, 0.5, 0.12)
            .with_behavior(Behavior::Current { direction: 1.0 }),
        );
    }

    let wire = Material::phong(0x0000ff);
    for (x, y, horizontal) in [
        (0.0, 0.5, true),
        (0.0, -0.5, true),
        (-1.0, 0.0, false),
        (1.0, 0.0, false),
    ] {
        let node = SceneNode::mesh(Shape::cylinder(0.02, 0.02, 1.0), wire)
            .named("wire")
            .at(x, y, 0.1);
        group.push(if horizontal {
            node.rotated(0.0, 0.0, FRAC_PI_2)
        } else {
            node
        });
    }
    scene.add(group);
}
