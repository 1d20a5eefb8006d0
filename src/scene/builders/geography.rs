use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;

use super::{jitter, lat_lon};
use crate::animation::Behavior;
use crate::scene::{Material, Scene, SceneNode, Shape};

/// Translucent ocean sphere with four continent markers.
pub(super) fn globe(scene: &mut Scene) {
    const MARKERS: [(f32, f32, u32); 4] = [
        (40.0, -100.0, 0x4caf50), // North America
        (-15.0, -60.0, 0x8bc34a), // South America
        (50.0, 10.0, 0x66bb6a),   // Europe
        (20.0, 78.0, 0x43a047),   // Asia
    ];

    scene.add(
        SceneNode::mesh(
            Shape::sphere(1.0, 32, 32),
            Material::phong(0x4fc3f7).with_opacity(0.8),
        )
        .named("globe"),
    );
    for (lat, lon, color) in MARKERS {
        scene.add(
            SceneNode::mesh(Shape::sphere(0.1, 8, 8), Material::phong(color))
                .named("continent marker")
                .at_vec(lat_lon(lat, lon, 1.05)),
        );
    }
}

/// Earth with seven flattened continents, each drifting at its own rate.
pub(super) fn continents(scene: &mut Scene) {
    struct Continent {
        name: &'static str,
        lat: f32,
        lon: f32,
        size: f32,
        color: u32,
        drift: f32,
    }

    const CONTINENTS: [Continent; 7] = [
        Continent {
            name: "North America",
            lat: 45.0,
            lon: -100.0,
            size: 0.3,
            color: 0x228b22,
            drift: 0.0005,
        },
        Continent {
            name: "South America",
            lat: -15.0,
            lon: -60.0,
            size: 0.25,
            color: 0x32cd32,
            drift: 0.0003,
        },
        Continent {
            name: "Europe",
            lat: 50.0,
            lon: 10.0,
            size: 0.15,
            color: 0x90ee90,
            drift: 0.0002,
        },
        Continent {
            name: "Asia",
            lat: 35.0,
            lon: 100.0,
            size: 0.4,
            color: 0x006400,
            drift: 0.0001,
        },
        Continent {
            name: "Africa",
            lat: 0.0,
            lon: 20.0,
            size: 0.3,
            color: 0x9acd32,
            drift: 0.0004,
        },
        Continent {
            name: "Australia",
            lat: -25.0,
            lon: 140.0,
            size: 0.1,
            color: 0x7cfc00,
            drift: 0.0006,
        },
        Continent {
            name: "Antarctica",
            lat: -80.0,
            lon: 0.0,
            size: 0.2,
            color: 0xf0f8ff,
            drift: 0.0001,
        },
    ];

    let mut group = SceneNode::group().named("continents").with_child(
        SceneNode::mesh(Shape::sphere(1.2, 32, 32), Material::phong(0x87ceeb))
            .named("earth"),
    );
    for c in &CONTINENTS {
        group.push(
            SceneNode::mesh(
                Shape::sphere(c.size, 12, 12),
                Material::phong(c.color),
            )
            .named(c.name)
            .stretched(1.2, 0.3, 1.0)
            .at_vec(lat_lon(c.lat, c.lon, 1.25))
            .with_behavior(Behavior::ContinentalDrift {
                drift_speed: c.drift,
            }),
        );
    }
    scene.add(group);
}

/// Cone volcano with a glowing lava blob and twenty rising smoke puffs.
pub(super) fn volcano<R: Rng>(scene: &mut Scene, rng: &mut R) {
    let mut group = SceneNode::group()
        .named("volcano")
        .with_child(
            SceneNode::mesh(Shape::cone(1.0, 1.5, 8), Material::phong(0x654321))
                .named("base")
                .at(0.0, -0.75, 0.0),
        )
        .with_child(
            SceneNode::mesh(
                Shape::cylinder(0.3, 0.2, 0.3),
                Material::phong(0x8b0000),
            )
            .named("crater")
            .at(0.0, 0.6, 0.0),
        )
        .with_child(
            SceneNode::mesh(Shape::sphere(0.15, 8, 8), Material::basic(0xff4500))
                .named("lava")
                .at(0.0, 0.7, 0.0)
                .with_behavior(Behavior::Lava),
        );

    for i in 0..20 {
        let position = Vec3::new(
            jitter(rng, 0.5),
            0.8 + rng.random::<f32>() * 1.5,
            jitter(rng, 0.5),
        );
        group.push(
            SceneNode::mesh(
                Shape::sphere(0.05, 4, 4),
                Material::basic(0x808080).with_opacity(0.3),
            )
            .named("smoke")
            .at_vec(position)
            .with_behavior(Behavior::Smoke {
                offset: i as f32 * PI / 10.0,
            }),
        );
    }
    scene.add(group);
}
