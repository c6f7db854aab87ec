//! Observation value generation

use rand::Rng;

use crate::core::constants::RANDOM_VALUE_MAX;

/// Generator drawing a fresh pseudo-random value in [0, 1000) per tick
pub fn random_observations() -> impl FnMut() -> f64 {
    let mut rng = rand::thread_rng();
    move || rng.gen_range(0.0..RANDOM_VALUE_MAX)
}
