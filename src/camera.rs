use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShowcaseCamera>()
            .add_systems(Startup, setup_camera);
    }
}

/// Where the showcase camera sits relative to the row of lights
#[derive(Resource, Debug, Clone)]
pub struct ShowcaseCamera {
    pub eye: Vec3,
    pub target: Vec3,
}

impl Default for ShowcaseCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 7.0, 12.0),
            target: Vec3::new(0.0, 0.5, 0.0),
        }
    }
}

#[derive(Component)]
pub struct MainCamera;

/// Perspective camera looking down at the light row on the XZ plane
fn setup_camera(mut commands: Commands, showcase: Res<ShowcaseCamera>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(showcase.eye).looking_at(showcase.target, Vec3::Y),
        MainCamera,
    ));
}
