//! Asteroid field generation
//!
//! Asteroids are placed uniformly inside a box once at startup and never move.
//! No position is rejected: an asteroid may land on the flight path, or even
//! on the start.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scene_engine::foundation::math::Vec3;

use crate::config::FieldConfig;
use crate::flight::Obstacle;

/// Generate the field described by `config`
///
/// Uses the configured seed when present, otherwise fresh entropy.
pub fn generate(config: &FieldConfig) -> Vec<Obstacle> {
    match config.seed {
        Some(seed) => {
            log::info!("Generating {} asteroids from seed {}", config.count, seed);
            generate_with(config, &mut StdRng::seed_from_u64(seed))
        }
        None => {
            log::info!("Generating {} asteroids", config.count);
            generate_with(config, &mut StdRng::from_entropy())
        }
    }
}

/// Generate the field with a caller-provided random source
pub fn generate_with<R: Rng>(config: &FieldConfig, rng: &mut R) -> Vec<Obstacle> {
    (0..config.count)
        .map(|_| {
            let position = Vec3::new(
                rng.gen_range(config.min[0]..=config.max[0]),
                rng.gen_range(config.min[1]..=config.max[1]),
                rng.gen_range(config.min[2]..=config.max[2]),
            );
            let scale = rng.gen_range(config.min_scale..=config.max_scale);
            Obstacle { position, scale }
        })
        .collect()
}
