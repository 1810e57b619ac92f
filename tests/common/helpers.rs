use aerostab::components::StateSpaceModel;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic generator for property tests
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Scales every entry above the kinematic row by a random factor in
/// `[1 - spread, 1 + spread]`.
pub fn perturb_model(model: &StateSpaceModel, rng: &mut ChaCha8Rng, spread: f64) -> StateSpaceModel {
    let mut system = model.system;
    let mut control = model.control;
    for i in 0..3 {
        for j in 0..4 {
            system[(i, j)] *= 1.0 + rng.gen_range(-spread..=spread);
        }
        for j in 0..2 {
            control[(i, j)] *= 1.0 + rng.gen_range(-spread..=spread);
        }
    }
    StateSpaceModel::new(model.axis, system, control)
}
