//! Scene construction: dispatch from (subject, model index) to one of the
//! eighteen fixed tableaux.
//!
//! Every builder only adds nodes. [`populate`] clears the scene first, so a
//! scene never holds more than one tableau. A handful of builders scatter
//! their parts with random jitter (plant cell, galaxy, volcano, atomic
//! model); they draw from the caller's RNG, so a seeded RNG reproduces a
//! scene exactly.

mod biology;
mod chemistry;
mod geography;
mod math;
mod physics;
mod space;

use glam::Vec3;
use rand::Rng;

use super::Scene;
use crate::subject::{SubjectId, MODELS_PER_SUBJECT};

/// Clear `scene` and build the tableau for `subject` / `model_index`.
///
/// Unknown subject ids and out-of-range indices leave the scene empty.
/// Returns `true` when something was built.
pub fn populate<R: Rng>(
    scene: &mut Scene,
    subject: &str,
    model_index: usize,
    rng: &mut R,
) -> bool {
    let Some(id) = SubjectId::parse(subject) else {
        scene.clear();
        log::warn!("unknown subject {subject:?}, scene left empty");
        return false;
    };
    populate_subject(scene, id, model_index, rng)
}

/// Typed variant of [`populate`].
pub fn populate_subject<R: Rng>(
    scene: &mut Scene,
    subject: SubjectId,
    model_index: usize,
    rng: &mut R,
) -> bool {
    scene.clear();
    if model_index >= MODELS_PER_SUBJECT {
        log::debug!(
            "model index {model_index} out of range for {subject}, scene left \
             empty"
        );
        return false;
    }

    match (subject, model_index) {
        (SubjectId::Biology, 0) => biology::dna_helix(scene),
        (SubjectId::Biology, 1) => biology::human_heart(scene),
        (SubjectId::Biology, _) => biology::plant_cell(scene, rng),
        (SubjectId::Space, 0) => space::solar_system(scene),
        (SubjectId::Space, 1) => space::planetary_orbits(scene),
        (SubjectId::Space, _) => space::galaxy(scene, rng),
        (SubjectId::Math, 0) => math::geometric_shapes(scene),
        (SubjectId::Math, 1) => math::vectors(scene),
        (SubjectId::Math, _) => math::fractal(scene),
        (SubjectId::Geography, 0) => geography::globe(scene),
        (SubjectId::Geography, 1) => geography::continents(scene),
        (SubjectId::Geography, _) => geography::volcano(scene, rng),
        (SubjectId::Chemistry, 0) => chemistry::water_molecule(scene),
        (SubjectId::Chemistry, 1) => chemistry::atomic_model(scene, rng),
        (SubjectId::Chemistry, _) => chemistry::chemical_reaction(scene),
        (SubjectId::Physics, 0) => physics::atom(scene),
        (SubjectId::Physics, 1) => physics::light_rays(scene),
        (SubjectId::Physics, _) => physics::circuit(scene),
    }

    log::debug!(
        "built {subject}[{model_index}]: {} top-level nodes, {} meshes",
        scene.len(),
        scene.primitive_count()
    );
    true
}

/// Uniform sample in `[-span/2, span/2)`.
fn jitter<R: Rng>(rng: &mut R, span: f32) -> f32 {
    (rng.random::<f32>() - 0.5) * span
}

/// Point on a sphere of `radius` at the given latitude/longitude (degrees),
/// using the same convention as the globe texture mapping: longitude -180
/// faces -X.
fn lat_lon(lat: f32, lon: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();
    Vec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn unknown_subject_builds_nothing() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(populate(&mut scene, "physics", 0, &mut rng));
        assert!(!scene.is_empty());
        assert!(!populate(&mut scene, "alchemy", 0, &mut rng));
        assert!(scene.is_empty());
    }

    #[test]
    fn out_of_range_index_builds_nothing() {
        let mut scene = Scene::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(!populate(&mut scene, "math", 3, &mut rng));
        assert!(scene.is_empty());
    }

    #[test]
    fn lat_lon_poles_and_equator() {
        let north = lat_lon(90.0, 0.0, 2.0);
        assert!((north - Vec3::new(0.0, 2.0, 0.0)).length() < 1e-5);
        let equator = lat_lon(0.0, -180.0, 1.0);
        assert!((equator - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn jitter_stays_in_span() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = jitter(&mut rng, 0.3);
            assert!((-0.15..0.15).contains(&v));
        }
    }
}
