use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;

use super::jitter;
use crate::animation::Behavior;
use crate::scene::{Material, Scene, SceneNode, Shape};

const OXYGEN: u32 = 0xff0000;
const HYDROGEN: u32 = 0xffffff;

/// Water: one oxygen, two hydrogens, two bonds.
pub(super) fn water_molecule(scene: &mut Scene) {
    scene.add(
        SceneNode::mesh(Shape::sphere(0.3, 16, 16), Material::phong(OXYGEN))
            .named("oxygen"),
    );
    for y in [0.6, -0.6] {
        scene.add(
            SceneNode::mesh(
                Shape::sphere(0.15, 16, 16),
                Material::phong(HYDROGEN),
            )
            .named("hydrogen")
            .at(0.8, y, 0.0),
        );
    }
    for (y, tilt) in [(0.3, -PI / 6.0), (-0.3, PI / 6.0)] {
        scene.add(
            SceneNode::mesh(
                Shape::cylinder(0.02, 0.02, 0.8),
                Material::phong(0x888888),
            )
            .named("bond")
            .at(0.4, y, 0.0)
            .rotated(0.0, 0.0, tilt),
        );
    }
}

/// Carbon-like atom: vibrating nucleus of six protons and six neutrons,
/// three tilted shells carrying 2, 4 and 2 electrons.
pub(super) fn atomic_model<R: Rng>(scene: &mut Scene, rng: &mut R) {
    const SHELLS: [(f32, u32); 3] = [(0.8, 2), (1.4, 4), (2.0, 2)];

    let mut nucleus = SceneNode::group().named("nucleus");
    for color in [0xff0000, 0x0000ff] {
        for i in 0..6 {
            let position =
                Vec3::new(jitter(rng, 0.3), jitter(rng, 0.3), jitter(rng, 0.3));
            nucleus.push(
                SceneNode::mesh(
                    Shape::sphere(0.08, 8, 8),
                    Material::phong(color),
                )
                .named(if color == 0xff0000 { "proton" } else { "neutron" })
                .at_vec(position)
                .with_behavior(Behavior::Vibration {
                    offset: i as f32 * PI / 3.0,
                }),
            );
        }
    }

    let mut atom = SceneNode::group().named("atom").with_child(nucleus);
    for (shell, (radius, electrons)) in SHELLS.into_iter().enumerate() {
        let s = shell as f32;
        atom.push(
            SceneNode::mesh(
                Shape::torus(radius, 0.01),
                Material::basic(0x74b9ff).with_opacity(0.3),
            )
            .named("shell")
            .rotated(s * PI / 4.0, s * PI / 3.0, 0.0),
        );
        for i in 0..electrons {
            atom.push(
                SceneNode::mesh(
                    Shape::sphere(0.03, 8, 8),
                    Material::phong(0x00ff00),
                )
                .named("electron")
                .at(radius, 0.0, 0.0)
                .with_behavior(Behavior::Electron {
                    angle: i as f32 * 2.0 * PI / electrons as f32,
                    shell: shell as u32,
                    radius,
                }),
            );
        }
    }
    scene.add(atom);
}

/// 2 H2 + O2 -> 2 H2O. Reactant atoms slide toward the arrow and flip to
/// products; product molecules vibrate.
pub(super) fn chemical_reaction(scene: &mut Scene) {
    let atom = |radius: f32, color: u32, x: f32, y: f32| {
        SceneNode::mesh(Shape::sphere(radius, 8, 8), Material::phong(color))
            .at(x, y, 0.0)
    };
    let reactant = Behavior::Reactant { velocity: 1.0 };

    let mut group = SceneNode::group().named("reaction");

    for i in 0..2 {
        group.push(
            SceneNode::group()
                .named("H2")
                .at(-2.0 + i as f32 * 0.8, 0.5, 0.0)
                .with_child(
                    atom(0.1, HYDROGEN, -0.15, 0.0).with_behavior(reactant),
                )
                .with_child(
                    atom(0.1, HYDROGEN, 0.15, 0.0).with_behavior(reactant),
                ),
        );
    }

    group.push(
        SceneNode::group()
            .named("O2")
            .at(-2.0, -0.5, 0.0)
            .with_child(atom(0.15, OXYGEN, -0.2, 0.0).with_behavior(reactant))
            .with_child(atom(0.15, OXYGEN, 0.2, 0.0).with_behavior(reactant)),
    );

    group.push(
        SceneNode::mesh(Shape::cone(0.1, 0.3, 8), Material::phong(0xffff00))
            .named("arrow")
            .rotated(0.0, 0.0, -PI / 2.0),
    );

    for i in 0..2 {
        let phase = i as f32 * PI;
        group.push(
            SceneNode::group()
                .named("H2O")
                .at(2.0 + i as f32 * 0.8, 0.0, 0.0)
                .with_child(
                    atom(0.15, OXYGEN, 0.0, 0.0)
                        .with_behavior(Behavior::Vibration { offset: phase }),
                )
                .with_child(atom(0.1, HYDROGEN, 0.25, 0.2).with_behavior(
                    Behavior::Vibration {
                        offset: phase + 1.0,
                    },
                ))
                .with_child(atom(0.1, HYDROGEN, 0.25, -0.2).with_behavior(
                    Behavior::Vibration {
                        offset: phase + 2.0,
                    },
                )),
        );
    }
    scene.add(group);
}
