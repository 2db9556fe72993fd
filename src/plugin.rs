use crate::light::{
    LightRng, animate_lights, capture_light_baselines, presets::load_light_presets,
};
use bevy::prelude::*;

/// Animates every light entity that carries a `LightAnimation`
#[derive(Default)]
pub struct LightWavePlugin {
    /// Fixed seed for noise waves and interval lengths; entropy when `None`
    pub seed: Option<u64>,
}

impl Plugin for LightWavePlugin {
    fn build(&self, app: &mut App) {
        let rng = match self.seed {
            Some(seed) => {
                info!("Light animation RNG seeded with {}", seed);
                LightRng::seeded(seed)
            }
            None => LightRng::from_entropy(),
        };

        app.insert_resource(rng)
            .insert_resource(load_light_presets())
            .add_systems(
                Update,
                (
                    // Baselines first so the first animated frame scales the originals
                    (
                        capture_light_baselines::<PointLight>,
                        capture_light_baselines::<SpotLight>,
                        capture_light_baselines::<DirectionalLight>,
                    ),
                    (
                        animate_lights::<PointLight>,
                        animate_lights::<SpotLight>,
                        animate_lights::<DirectionalLight>,
                    ),
                )
                    .chain(),
            );
    }
}
