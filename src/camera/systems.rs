//! Camera domain: rig setup, follow, and facing changes.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::camera::CameraTuning;
use crate::camera::components::{CameraRig, RotateVolume};
use crate::camera::events::FacingChangedEvent;
use crate::movement::{ActiveSpawnPoint, Player, RespawnEvent};

pub(crate) fn setup_camera(mut commands: Commands, tuning: Res<CameraTuning>) {
    let rig = CameraRig::new(default(), tuning.distance, tuning.height);
    let offset = rig.current_offset;

    commands.spawn((
        Camera3d::default(),
        rig,
        Transform::from_translation(offset).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Late-tick follow: advance any facing transition, then park the camera at
/// the target plus the rig offset, never below the floor.
pub(crate) fn follow_target(
    time: Res<Time>,
    tuning: Res<CameraTuning>,
    player_query: Query<&Transform, (With<Player>, Without<CameraRig>)>,
    mut camera_query: Query<(&mut CameraRig, &mut Transform), With<CameraRig>>,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let Ok((mut rig, mut camera_transform)) = camera_query.single_mut() else {
        return;
    };

    rig.advance_transition(tuning.transition_speed * time.delta_secs());

    let target = player_transform.translation;
    let mut position = target + rig.current_offset;
    position.y = position.y.max(tuning.floor_y);

    camera_transform.translation = position;
    camera_transform.look_at(target, Vec3::Y);
}

pub(crate) fn handle_rotate_volumes(
    mut collision_start_events: MessageReader<CollisionStart>,
    volumes: Query<&RotateVolume>,
    player_query: Query<Entity, With<Player>>,
    camera_query: Query<&CameraRig>,
    mut facing_events: MessageWriter<FacingChangedEvent>,
) {
    let Some(player_entity) = player_query.iter().next() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let other = if event.collider1 == player_entity {
            event.collider2
        } else if event.collider2 == player_entity {
            event.collider1
        } else {
            continue;
        };

        let Ok(volume) = volumes.get(other) else {
            continue;
        };

        let already_facing = camera_query
            .single()
            .is_ok_and(|rig| rig.facing == volume.facing);
        if !already_facing {
            info!("Camera rotating to {:?}", volume.facing);
            facing_events.write(FacingChangedEvent {
                facing: volume.facing,
            });
        }
    }
}

pub(crate) fn apply_facing_changes(
    mut facing_events: MessageReader<FacingChangedEvent>,
    tuning: Res<CameraTuning>,
    mut camera_query: Query<&mut CameraRig>,
) {
    for event in facing_events.read() {
        for mut rig in &mut camera_query {
            rig.set_facing(event.facing, tuning.distance, tuning.height);
        }
    }
}

/// Respawning snaps the camera behind the active spawn point, cancelling
/// any in-flight transition.
pub(crate) fn snap_facing_on_respawn(
    mut respawn_events: MessageReader<RespawnEvent>,
    active: Res<ActiveSpawnPoint>,
    tuning: Res<CameraTuning>,
    mut camera_query: Query<&mut CameraRig>,
) {
    let mut respawned = false;
    for _ in respawn_events.read() {
        respawned = true;
    }
    if !respawned {
        return;
    }

    for mut rig in &mut camera_query {
        rig.snap_to(active.facing, tuning.distance, tuning.height);
    }
}
