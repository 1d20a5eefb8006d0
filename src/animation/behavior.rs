//! Behavior markers and their per-frame update rules.
//!
//! Each rule is a closed-form function of elapsed time, or of an
//! accumulator stored in the marker itself. Rules never look at other
//! nodes, so the order in which nodes are visited does not matter.

use std::f32::consts::PI;

use crate::scene::SceneNode;

/// Angle step per frame for shell electrons.
const ELECTRON_STEP: f32 = 0.08;
/// Height at which a smoke puff respawns.
const SMOKE_RESPAWN_Y: f32 = 0.8;
/// Height above which a smoke puff respawns.
const SMOKE_CEILING: f32 = 3.0;
/// Local x a reactant jumps to once it becomes a product.
const PRODUCT_X: f32 = 2.0;
/// Half-width of the circuit loop travelled by current particles.
const CURRENT_SPAN: f32 = 2.0;

/// Fieldless tag of a [`Behavior`], used for counting and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BehaviorKind {
    /// Body circling the origin in the XZ plane.
    Orbit,
    /// Electron on an atomic shell.
    Electron,
    /// Pulsing heart.
    Heartbeat,
    /// Drifting organelle.
    Organelle,
    /// Slowly turning galaxy.
    GalaxySpin,
    /// Pulsing vector arrow.
    VectorPulse,
    /// Tumbling fractal.
    FractalSpin,
    /// Continental drift.
    ContinentalDrift,
    /// Erupting lava blob.
    Lava,
    /// Rising smoke puff.
    Smoke,
    /// Vibrating atom in a molecule.
    Vibration,
    /// Particle moving toward the reaction arrow.
    Reactant,
    /// Particle that has crossed the arrow.
    Product,
    /// Waving light ray.
    LightRay,
    /// Particle of flowing current.
    Current,
    /// Blinking LED.
    Led,
}

/// A node's per-frame animation rule and the parameters it needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    /// `angle += speed`, position on a circle of radius `distance` in XZ.
    Orbit {
        /// Current angle (radians).
        angle: f32,
        /// Angle step per frame.
        speed: f32,
        /// Circle radius.
        distance: f32,
    },
    /// Shell electron with a small vertical wobble.
    Electron {
        /// Current angle (radians).
        angle: f32,
        /// Shell index; shifts the phase by `shell * PI / 3`.
        shell: u32,
        /// Shell radius.
        radius: f32,
    },
    /// Uniform scale `1 + sin(6t) * 0.2`.
    Heartbeat,
    /// Small sinusoidal drift in XY.
    Organelle {
        /// Phase offset.
        offset: f32,
    },
    /// Constant Y/Z spin.
    GalaxySpin,
    /// Uniform scale `1 + sin(4t + offset) * 0.3`.
    VectorPulse {
        /// Phase offset.
        offset: f32,
    },
    /// Constant tumble about all three axes.
    FractalSpin,
    /// Constant Y spin at three times `drift_speed`.
    ContinentalDrift {
        /// Base drift rate.
        drift_speed: f32,
    },
    /// Bobbing height and glowing emissive.
    Lava,
    /// Rise, sway, respawn at the crater.
    Smoke {
        /// Phase offset.
        offset: f32,
    },
    /// High-frequency jitter.
    Vibration {
        /// Phase offset.
        offset: f32,
    },
    /// Move along +X until crossing zero, then become a product.
    Reactant {
        /// Direction and speed multiplier.
        velocity: f32,
    },
    /// Inert post-reaction state.
    Product,
    /// Vertical wave and opacity flicker.
    LightRay {
        /// Phase offset.
        offset: f32,
    },
    /// Move along X, wrapping at the edge of the board.
    Current {
        /// +1 or -1.
        direction: f32,
    },
    /// Red emissive toggling on and off.
    Led,
}

impl Behavior {
    /// The tag of this marker.
    #[must_use]
    pub const fn kind(&self) -> BehaviorKind {
        match self {
            Self::Orbit { .. } => BehaviorKind::Orbit,
            Self::Electron { .. } => BehaviorKind::Electron,
            Self::Heartbeat => BehaviorKind::Heartbeat,
            Self::Organelle { .. } => BehaviorKind::Organelle,
            Self::GalaxySpin => BehaviorKind::GalaxySpin,
            Self::VectorPulse { .. } => BehaviorKind::VectorPulse,
            Self::FractalSpin => BehaviorKind::FractalSpin,
            Self::ContinentalDrift { .. } => BehaviorKind::ContinentalDrift,
            Self::Lava => BehaviorKind::Lava,
            Self::Smoke { .. } => BehaviorKind::Smoke,
            Self::Vibration { .. } => BehaviorKind::Vibration,
            Self::Reactant { .. } => BehaviorKind::Reactant,
            Self::Product => BehaviorKind::Product,
            Self::LightRay { .. } => BehaviorKind::LightRay,
            Self::Current { .. } => BehaviorKind::Current,
            Self::Led => BehaviorKind::Led,
        }
    }
}

/// Apply the node's marker rule for elapsed time `t` (seconds).
///
/// Returns `false` if the node has no marker.
pub fn apply(node: &mut SceneNode, t: f32) -> bool {
    let Some(behavior) = node.behavior else {
        return false;
    };
    let tf = &mut node.transform;

    match behavior {
        Behavior::Orbit {
            angle,
            speed,
            distance,
        } => {
            let angle = angle + speed;
            tf.position.x = angle.cos() * distance;
            tf.position.z = angle.sin() * distance;
            node.behavior = Some(Behavior::Orbit {
                angle,
                speed,
                distance,
            });
        }
        Behavior::Electron {
            angle,
            shell,
            radius,
        } => {
            let angle = angle + ELECTRON_STEP;
            let shell_offset = shell as f32 * PI / 3.0;
            tf.position.x = (angle + shell_offset).cos() * radius;
            tf.position.z = (angle + shell_offset).sin() * radius;
            tf.position.y = (angle * 2.0).sin() * 0.2;
            node.behavior = Some(Behavior::Electron {
                angle,
                shell,
                radius,
            });
        }
        Behavior::Heartbeat => {
            tf.scale = glam::Vec3::splat(1.0 + (t * 6.0).sin() * 0.2);
        }
        Behavior::Organelle { offset } => {
            tf.position.x += (t * 3.0 + offset).sin() * 0.003;
            tf.position.y += (t * 2.0 + offset).cos() * 0.003;
        }
        Behavior::GalaxySpin => {
            tf.rotation.y += 0.005;
            tf.rotation.z += 0.002;
        }
        Behavior::VectorPulse { offset } => {
            tf.scale = glam::Vec3::splat(1.0 + (t * 4.0 + offset).sin() * 0.3);
        }
        Behavior::FractalSpin => {
            tf.rotation += glam::Vec3::new(0.02, 0.03, 0.01);
        }
        Behavior::ContinentalDrift { drift_speed } => {
            tf.rotation.y += drift_speed * 3.0;
        }
        Behavior::Lava => {
            tf.position.y = 0.7 + (t * 6.0).sin() * 0.5;
            let glow = 0.5 + (t * 8.0).sin() * 0.5;
            if let Some(p) = node.primitive.as_mut() {
                p.material.emissive = [glow, glow * 0.3, 0.0];
            }
        }
        Behavior::Smoke { offset } => {
            tf.position.y += 0.02;
            tf.position.x += (t * 2.0 + offset).sin() * 0.01;
            if tf.position.y > SMOKE_CEILING {
                tf.position.y = SMOKE_RESPAWN_Y;
            }
        }
        Behavior::Vibration { offset } => {
            let v = (t * 15.0 + offset).sin() * 0.05;
            tf.position.x += v;
            tf.position.y += v * 0.5;
        }
        Behavior::Reactant { velocity } => {
            tf.position.x += velocity * 0.02;
            if tf.position.x > 0.0 {
                tf.position.x = PRODUCT_X;
                node.behavior = Some(Behavior::Product);
            }
        }
        Behavior::Product => {}
        Behavior::LightRay { offset } => {
            let wave = (t * 8.0 + offset).sin() * 0.2;
            tf.position.y += wave * 0.5;
            if let Some(p) = node.primitive.as_mut() {
                p.material.opacity = 0.7 + (t * 5.0).sin() * 0.3;
            }
        }
        Behavior::Current { direction } => {
            tf.position.x += direction * 0.1;
            if tf.position.x.abs() > CURRENT_SPAN {
                tf.position.x = -CURRENT_SPAN * direction;
            }
        }
        Behavior::Led => {
            let level = if (t * 12.0).sin() > 0.0 { 1.0 } else { 0.1 };
            if let Some(p) = node.primitive.as_mut() {
                p.material.emissive = [level, 0.0, 0.0];
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{Material, Shape};

    fn ball(behavior: Behavior) -> SceneNode {
        SceneNode::mesh(Shape::sphere(0.1, 4, 4), Material::basic(0xff0000))
            .with_behavior(behavior)
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn orbit_accumulates_angle() {
        let mut node = ball(Behavior::Orbit {
            angle: 0.0,
            speed: 0.5,
            distance: 2.0,
        });
        assert!(apply(&mut node, 0.0));
        assert!(apply(&mut node, 0.0));
        let p = node.transform.position;
        assert!(approx(p.x, 1.0_f32.cos() * 2.0));
        assert!(approx(p.z, 1.0_f32.sin() * 2.0));
        assert!(matches!(
            node.behavior,
            Some(Behavior::Orbit { angle, .. }) if approx(angle, 1.0)
        ));
    }

    #[test]
    fn electron_shell_shifts_phase() {
        let mut node = ball(Behavior::Electron {
            angle: -ELECTRON_STEP,
            shell: 3,
            radius: 1.5,
        });
        let _ = apply(&mut node, 0.0);
        let p = node.transform.position;
        // angle is now 0, shell offset is PI
        assert!(approx(p.x, -1.5));
        assert!(approx(p.y, 0.0));
    }

    #[test]
    fn heartbeat_scale_is_time_function() {
        let mut node = ball(Behavior::Heartbeat);
        let t = 0.3;
        let _ = apply(&mut node, t);
        let expected = 1.0 + (t * 6.0).sin() * 0.2;
        assert_eq!(node.transform.scale, Vec3::splat(expected));
        // Idempotent at a fixed time.
        let _ = apply(&mut node, t);
        assert_eq!(node.transform.scale, Vec3::splat(expected));
    }

    #[test]
    fn organelle_drifts_by_phase_shifted_sines() {
        let offset = PI / 3.0;
        let mut node = ball(Behavior::Organelle { offset }).at(0.2, -0.1, 0.3);
        let t = 1.7;
        let _ = apply(&mut node, t);
        let p = node.transform.position;
        assert!(approx(p.x, 0.2 + (t * 3.0 + offset).sin() * 0.003));
        assert!(approx(p.y, -0.1 + (t * 2.0 + offset).cos() * 0.003));
        assert_eq!(p.z, 0.3);
    }

    #[test]
    fn galaxy_spins_about_y_and_z() {
        let mut node = ball(Behavior::GalaxySpin);
        for _ in 0..10 {
            let _ = apply(&mut node, 5.0);
        }
        let r = node.transform.rotation;
        assert!(approx(r.x, 0.0));
        assert!(approx(r.y, 0.05));
        assert!(approx(r.z, 0.02));
    }

    #[test]
    fn vector_pulse_scale_is_time_function() {
        let offset = 2.0 * PI / 3.0;
        let mut node = ball(Behavior::VectorPulse { offset });
        let t = 0.45;
        let _ = apply(&mut node, t);
        let expected = 1.0 + (t * 4.0 + offset).sin() * 0.3;
        assert_eq!(node.transform.scale, Vec3::splat(expected));
    }

    #[test]
    fn fractal_tumbles_on_all_axes() {
        let mut node = ball(Behavior::FractalSpin).rotated(0.1, 0.0, 0.0);
        let _ = apply(&mut node, 0.0);
        let _ = apply(&mut node, 3.0);
        let r = node.transform.rotation;
        assert!(approx(r.x, 0.14));
        assert!(approx(r.y, 0.06));
        assert!(approx(r.z, 0.02));
    }

    #[test]
    fn continental_drift_turns_at_triple_speed() {
        let mut node = ball(Behavior::ContinentalDrift {
            drift_speed: 0.0005,
        });
        for _ in 0..4 {
            let _ = apply(&mut node, 1.0);
        }
        assert!(approx(node.transform.rotation.y, 0.006));
        assert_eq!(node.transform.rotation.x, 0.0);
    }

    #[test]
    fn vibration_moves_along_a_half_slope() {
        let offset = 1.0;
        let mut node = ball(Behavior::Vibration { offset }).at(0.5, 0.5, 0.0);
        let t = 0.12;
        let _ = apply(&mut node, t);
        let v = (t * 15.0 + offset).sin() * 0.05;
        let p = node.transform.position;
        assert!(approx(p.x, 0.5 + v));
        assert!(approx(p.y, 0.5 + v * 0.5));
    }

    #[test]
    fn smoke_respawns_above_ceiling() {
        let mut node = ball(Behavior::Smoke { offset: 0.0 }).at(0.0, 2.99, 0.0);
        let _ = apply(&mut node, 0.0);
        assert!(approx(node.transform.position.y, SMOKE_RESPAWN_Y));
    }

    #[test]
    fn reactant_becomes_product_after_crossing() {
        let mut node = ball(Behavior::Reactant { velocity: 1.0 }).at(-0.03, 0.0, 0.0);
        let _ = apply(&mut node, 0.0);
        assert_eq!(node.behavior_kind(), Some(BehaviorKind::Reactant));
        let _ = apply(&mut node, 0.0);
        assert_eq!(node.behavior_kind(), Some(BehaviorKind::Product));
        assert_eq!(node.transform.position.x, PRODUCT_X);
        let _ = apply(&mut node, 0.0);
        assert_eq!(node.transform.position.x, PRODUCT_X);
    }

    #[test]
    fn current_wraps_to_opposite_edge() {
        let mut node = ball(Behavior::Current { direction: 1.0 }).at(1.95, 0.5, 0.0);
        let _ = apply(&mut node, 0.0);
        assert!(approx(node.transform.position.x, -2.0));
    }

    #[test]
    fn led_blinks_between_levels() {
        let mut node = ball(Behavior::Led);
        let on_t = PI / 24.0; // sin(12t) = 1
        let _ = apply(&mut node, on_t);
        let on = node.primitive.as_ref().unwrap().material.emissive;
        assert_eq!(on, [1.0, 0.0, 0.0]);

        let off_t = PI / 8.0; // sin(12t) = -1
        let _ = apply(&mut node, off_t);
        let off = node.primitive.as_ref().unwrap().material.emissive;
        assert_eq!(off, [0.1, 0.0, 0.0]);
    }

    #[test]
    fn lava_glow_tracks_height() {
        let mut node = ball(Behavior::Lava);
        let _ = apply(&mut node, 0.0);
        assert!(approx(node.transform.position.y, 0.7));
        let e = node.primitive.as_ref().unwrap().material.emissive;
        assert!(approx(e[0], 0.5));
        assert!(approx(e[1], 0.15));
    }

    #[test]
    fn light_ray_opacity_stays_in_range() {
        let mut node = ball(Behavior::LightRay { offset: 0.0 });
        for i in 0..100 {
            let _ = apply(&mut node, i as f32 * 0.037);
            let o = node.primitive.as_ref().unwrap().material.opacity;
            assert!((0.4..=1.0).contains(&o));
        }
    }

    #[test]
    fn unmarked_nodes_are_untouched() {
        let mut node =
            SceneNode::mesh(Shape::sphere(0.1, 4, 4), Material::basic(0xffffff));
        let before = node.clone();
        assert!(!apply(&mut node, 1.0));
        assert_eq!(node, before);
    }
}
