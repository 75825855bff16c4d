//! Camera domain: follow rig, facing rotation, and occlusion culling.

mod components;
mod events;
mod occlusion;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{CameraRig, FacingDirection, RotateVolume, move_towards};
pub use events::FacingChangedEvent;
pub use occlusion::CulledOccluders;

use bevy::prelude::*;

use crate::camera::occlusion::check_occluders;
use crate::camera::systems::{
    apply_facing_changes, follow_target, handle_rotate_volumes, setup_camera,
    snap_facing_on_respawn,
};
use crate::core::GameState;

#[derive(Resource, Debug)]
pub struct CameraTuning {
    pub distance: f32,
    pub height: f32,
    /// Height of the level floor; the camera never dips below it and
    /// occlusion hits at or under it are ignored.
    pub floor_y: f32,
    pub transition_speed: f32,
}

impl Default for CameraTuning {
    fn default() -> Self {
        Self {
            distance: 5.0,
            height: 8.5,
            floor_y: 0.0,
            transition_speed: 10.0,
        }
    }
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraTuning>()
            .init_resource::<CulledOccluders>()
            .add_message::<FacingChangedEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (
                    handle_rotate_volumes,
                    apply_facing_changes,
                    snap_facing_on_respawn,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                PostUpdate,
                (follow_target, check_occluders)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
