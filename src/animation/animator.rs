use crate::scene::Scene;

/// Per-frame driver for behavior markers.
///
/// Owns the elapsed-time clock so callers feed it frame deltas instead of
/// reading the wall clock; tests can step it deterministically.
#[derive(Debug, Clone)]
pub struct Animator {
    elapsed: f32,
    time_scale: f32,
    enabled: bool,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    /// Animator at time zero, running at normal speed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            time_scale: 1.0,
            enabled: true,
        }
    }

    /// Seconds of animated time so far.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Multiplier applied to frame deltas.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Pause or resume marker updates.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether marker updates run.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Advance the clock by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.enabled {
            self.elapsed += dt * self.time_scale;
        }
    }

    /// Apply every marker in the scene at the current time. Returns the
    /// number of nodes updated.
    pub fn step(&self, scene: &mut Scene) -> usize {
        if !self.enabled {
            return 0;
        }
        Self::step_at(scene, self.elapsed)
    }

    /// Apply every marker in the scene at time `t`, regardless of the
    /// clock.
    pub fn step_at(scene: &mut Scene, t: f32) -> usize {
        let mut updated = 0;
        scene.visit_mut(&mut |node| {
            if super::behavior::apply(node, t) {
                updated += 1;
            }
        });
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Behavior;
    use crate::scene::{Material, SceneNode, Shape};

    fn orbiting_scene() -> Scene {
        let mut scene = Scene::new();
        scene.add(
            SceneNode::group().with_child(
                SceneNode::mesh(
                    Shape::sphere(0.1, 4, 4),
                    Material::phong(0x00ff00),
                )
                .with_behavior(Behavior::Orbit {
                    angle: 0.0,
                    speed: 0.1,
                    distance: 1.0,
                }),
            ),
        );
        scene.add(SceneNode::mesh(
            Shape::sphere(0.2, 4, 4),
            Material::basic(0xffff00),
        ));
        scene
    }

    #[test]
    fn step_reaches_nested_markers() {
        let mut scene = orbiting_scene();
        let animator = Animator::new();
        assert_eq!(animator.step(&mut scene), 1);
        let child = &scene.nodes()[0].children[0];
        assert!((child.transform.position.x - 0.1_f32.cos()).abs() < 1e-6);
    }

    #[test]
    fn disabled_animator_leaves_scene_alone() {
        let mut scene = orbiting_scene();
        let mut animator = Animator::new();
        animator.set_enabled(false);
        animator.advance(1.0);
        assert_eq!(animator.elapsed(), 0.0);
        assert_eq!(animator.step(&mut scene), 0);
        assert_eq!(scene.nodes()[0].children[0].transform.position.x, 0.0);
    }

    #[test]
    fn time_scale_multiplies_deltas() {
        let mut animator = Animator::new();
        animator.set_time_scale(2.0);
        animator.advance(0.25);
        assert_eq!(animator.elapsed(), 0.5);
        animator.set_time_scale(-3.0);
        animator.advance(1.0);
        assert_eq!(animator.elapsed(), 0.5);
    }
}
