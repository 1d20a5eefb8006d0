use std::f32::consts::{FRAC_PI_2, PI};

use rand::Rng;

use super::jitter;
use crate::animation::Behavior;
use crate::scene::{hsl, Material, Scene, SceneNode, Shape};

/// A body on a circular orbit.
struct Planet {
    size: f32,
    distance: f32,
    color: u32,
    speed: f32,
}

const INNER_PLANETS: [Planet; 4] = [
    Planet {
        size: 0.1,
        distance: 1.0,
        color: 0x8c7853,
        speed: 0.02,
    },
    Planet {
        size: 0.15,
        distance: 1.5,
        color: 0xffc649,
        speed: 0.015,
    },
    Planet {
        size: 0.16,
        distance: 2.0,
        color: 0x6b93d6,
        speed: 0.01,
    },
    Planet {
        size: 0.12,
        distance: 2.5,
        color: 0xc1440e,
        speed: 0.008,
    },
];

const ORBIT_PLANETS: [Planet; 4] = [
    Planet {
        size: 0.08,
        distance: 1.0,
        color: 0xff6b6b,
        speed: 0.03,
    },
    Planet {
        size: 0.12,
        distance: 1.8,
        color: 0x4ecdc4,
        speed: 0.02,
    },
    Planet {
        size: 0.15,
        distance: 2.6,
        color: 0x45b7d1,
        speed: 0.015,
    },
    Planet {
        size: 0.18,
        distance: 3.4,
        color: 0xf9ca24,
        speed: 0.01,
    },
];

fn planet_node(planet: &Planet, detail: u32) -> SceneNode {
    SceneNode::mesh(
        Shape::sphere(planet.size, detail, detail),
        Material::phong(planet.color),
    )
    .named("planet")
    .at(planet.distance, 0.0, 0.0)
    .with_behavior(Behavior::Orbit {
        angle: 0.0,
        speed: planet.speed,
        distance: planet.distance,
    })
}

/// Sun with four orbiting inner planets.
pub(super) fn solar_system(scene: &mut Scene) {
    scene.add(
        SceneNode::mesh(Shape::sphere(0.5, 32, 32), Material::basic(0xffff00))
            .named("sun"),
    );
    for planet in &INNER_PLANETS {
        scene.add(planet_node(planet, 16));
    }
}

/// Star, visible orbit rings, and a planet on each ring.
pub(super) fn planetary_orbits(scene: &mut Scene) {
    scene.add(
        SceneNode::mesh(Shape::sphere(0.3, 16, 16), Material::basic(0xffff00))
            .named("star"),
    );
    for planet in &ORBIT_PLANETS {
        scene.add(
            SceneNode::mesh(
                Shape::torus(planet.distance, 0.01),
                Material::basic(0x666666).with_opacity(0.3),
            )
            .named("orbit ring")
            .rotated(FRAC_PI_2, 0.0, 0.0),
        );
    }
    for planet in &ORBIT_PLANETS {
        scene.add(planet_node(planet, 12));
    }
}

/// Black hole and four spiral arms of 50 stars each, slowly turning.
pub(super) fn galaxy<R: Rng>(scene: &mut Scene, rng: &mut R) {
    let mut galaxy = SceneNode::group()
        .named("galaxy")
        .with_behavior(Behavior::GalaxySpin)
        .with_child(
            SceneNode::mesh(
                Shape::sphere(0.2, 16, 16),
                Material::basic(0x000000),
            )
            .named("black hole"),
        );

    for arm in 0..4 {
        for i in 0..50 {
            let angle = arm as f32 * PI / 2.0 + i as f32 * 0.2;
            let radius = 0.5 + i as f32 * 0.05;
            let color = hsl(rng.random::<f32>(), 0.7, 0.8);
            galaxy.push(
                SceneNode::mesh(
                    Shape::sphere(0.02, 4, 4),
                    Material::basic_linear(color),
                )
                .at(
                    angle.cos() * radius,
                    jitter(rng, 0.2),
                    angle.sin() * radius,
                ),
            );
        }
    }
    scene.add(galaxy);
}
