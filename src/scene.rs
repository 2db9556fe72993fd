use bevy::prelude::*;

use light_wave::{LightAnimation, LightPresets};

/// Distance between neighbouring lights along X
const LIGHT_SPACING: f32 = 2.5;

/// Height of the lights above the floor
const LIGHT_HEIGHT: f32 = 1.2;

/// Base luminous power of every showcase light, in lumens
const LIGHT_INTENSITY: f32 = 250_000.0;

const FLOOR_SIZE: f32 = 30.0;

/// Marks a showcase light and remembers which preset it started from
#[derive(Component, Debug)]
pub struct ShowcaseLight {
    pub preset: String,
}

/// Spawn a floor and one animated point light per preset
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    presets: Res<LightPresets>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.3, 0.3, 0.32),
            perceptual_roughness: 0.9,
            ..default()
        })),
    ));

    let bulb_mesh = meshes.add(Sphere::new(0.15).mesh());
    let bulb_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    if presets.is_empty() {
        warn!("No light presets available, falling back to a single default light");
    }

    let mut animations: Vec<(String, LightAnimation)> = presets
        .names()
        .filter_map(|name| presets.get(name).map(|animation| (name.to_string(), animation)))
        .collect();
    if animations.is_empty() {
        animations.push(("default".to_string(), LightAnimation::default()));
    }

    // Center the row around the origin
    let row_width = (animations.len() - 1) as f32 * LIGHT_SPACING;
    let start_x = -row_width * 0.5;

    for (i, (preset, animation)) in animations.into_iter().enumerate() {
        let position = Vec3::new(start_x + i as f32 * LIGHT_SPACING, LIGHT_HEIGHT, 0.0);

        info!(
            "Light '{}' at x={:.1}: {:?} wave, channel {:?}, intermittent={}",
            preset,
            position.x,
            animation.wave.waveform,
            animation.color_channel,
            animation.intermittency.enabled
        );

        commands.spawn((
            PointLight {
                color: Color::srgb(1.0, 0.85, 0.6),
                intensity: LIGHT_INTENSITY,
                range: 8.0,
                shadows_enabled: true,
                ..default()
            },
            Transform::from_translation(position),
            animation,
            ShowcaseLight { preset },
            Mesh3d(bulb_mesh.clone()),
            MeshMaterial3d(bulb_material.clone()),
        ));
    }

    info!("Showcase scene created!");
}
