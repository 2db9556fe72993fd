use bevy::prelude::*;

mod camera;
mod input;
mod scene;

use camera::CameraPlugin;
use input::InputPlugin;
use light_wave::LightWavePlugin;

fn main() {
    let mut app = App::new();

    // Optional fixed seed: `light_wave 42`
    let seed = std::env::args().nth(1).and_then(|arg| arg.parse::<u64>().ok());

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Light Wave".into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(LightWavePlugin { seed })
    .add_systems(Startup, scene::setup_scene);

    app.run();
}
