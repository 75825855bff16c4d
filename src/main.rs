mod camera;
mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod pickups;
mod platforms;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Skyreach".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        core::CorePlugin,
        config::ConfigPlugin,
        movement::MovementPlugin,
        platforms::PlatformsPlugin,
        camera::CameraPlugin,
        pickups::PickupsPlugin,
        level::LevelPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
