use bevy::ecs::component::Mutable;
use bevy::prelude::*;

use crate::light::{components::LightAnimation, random::LightRng, target::LightTarget};

/// System: Capture the original color/intensity of newly animated lights
pub fn capture_light_baselines<L>(
    mut lights: Query<(Entity, &mut LightAnimation, &L), Added<LightAnimation>>,
) where
    L: Component + LightTarget,
{
    for (entity, mut animation, light) in &mut lights {
        animation.initialize(light.color(), light.intensity());
        debug!(
            "Light {:?} baseline captured: intensity={:.1}",
            entity,
            light.intensity()
        );
    }
}

/// System: Drive every animated light one frame forward
pub fn animate_lights<L>(
    time: Res<Time>,
    mut rng: ResMut<LightRng>,
    mut lights: Query<(Entity, &mut LightAnimation, &mut L)>,
) where
    L: Component<Mutability = Mutable> + LightTarget,
{
    let dt = time.delta_secs();
    let t = time.elapsed_secs();

    for (entity, mut animation, mut light) in &mut lights {
        let was_waving = animation.is_waving();

        animation.advance(dt, t, &mut *light, &mut rng.0);

        if animation.intermittency.enabled && was_waving != animation.is_waving() {
            debug!(
                "Light {:?} {} wave interval (next change in {:.2}s)",
                entity,
                if animation.is_waving() { "entered" } else { "left" },
                animation.timer().next_interval_time
            );
        }
    }
}
