use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random numbers for noise waves and interval lengths
pub trait RandomSource {
    /// Uniform value in [0, 1)
    fn value(&mut self) -> f32;

    /// Uniform value between `min` and `max`
    ///
    /// Bounds may come in either order; the result always lies between them.
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.value()
    }
}

impl<R: Rng> RandomSource for R {
    fn value(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Shared generator for every animated light in the world
#[derive(Resource, Debug)]
pub struct LightRng(pub StdRng);

impl LightRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for LightRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
