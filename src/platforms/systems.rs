//! Platforms domain: contact handling, machine stepping, and hazards.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{Player, RespawnEvent};
use crate::platforms::components::{DisappearingPlatform, KillOnTouch, Rotator};
use crate::platforms::machine::MachineAction;

/// Routes player contact edges into each platform's machine. Both start and
/// end edges matter: regeneration pauses while the player overlaps the volume.
pub(crate) fn handle_platform_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut platforms: Query<&mut DisappearingPlatform>,
    player_query: Query<Entity, With<Player>>,
) {
    let Some(player_entity) = player_query.iter().next() else {
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    let starts = collision_start_events
        .read()
        .map(|event| (event.collider1, event.collider2, true));
    let ends = collision_end_events
        .read()
        .map(|event| (event.collider1, event.collider2, false));

    for (a, b, entered) in starts.chain(ends) {
        let platform_entity = if a == player_entity {
            b
        } else if b == player_entity {
            a
        } else {
            continue;
        };

        if let Ok(mut platform) = platforms.get_mut(platform_entity) {
            let output = if entered {
                platform.machine.touch()
            } else {
                platform.machine.touch_ended()
            };
            platform.pending.merge(output);
        }
    }
}

/// Steps every platform machine and applies the resulting opacity and
/// collider changes.
pub(crate) fn advance_platforms(
    mut commands: Commands,
    time: Res<Time>,
    mut platforms: Query<(
        Entity,
        &mut DisappearingPlatform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let dt = time.delta_secs();

    for (entity, mut platform, material_handle) in &mut platforms {
        let mut output = std::mem::take(&mut platform.pending);
        output.merge(platform.machine.advance(dt));

        if let Some(opacity) = output.opacity {
            match materials.get_mut(&material_handle.0) {
                Some(material) => {
                    material.base_color.set_alpha(opacity);
                }
                None => {
                    error!("Platform {entity} has no material, cannot fade");
                }
            }
        }

        match output.action {
            Some(MachineAction::Vanish) => {
                debug!("Platform {entity} vanished");
                commands
                    .entity(entity)
                    .insert((Sensor, platform.vanished_layers()));
            }
            Some(MachineAction::Restore) => {
                debug!("Platform {entity} restored");
                commands
                    .entity(entity)
                    .remove::<Sensor>()
                    .insert(platform.solid_layers);
            }
            None => {}
        }
    }
}

pub(crate) fn rotate_platforms(time: Res<Time>, mut rotators: Query<(&Rotator, &mut Transform)>) {
    let dt = time.delta_secs();
    for (rotator, mut transform) in &mut rotators {
        transform.rotate_y(rotator.degrees_per_sec.to_radians() * dt);
    }
}

pub(crate) fn kill_on_touch(
    mut collision_start_events: MessageReader<CollisionStart>,
    hazards: Query<(), With<KillOnTouch>>,
    player_query: Query<Entity, With<Player>>,
    mut respawn_events: MessageWriter<RespawnEvent>,
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

        if hazards.get(other).is_ok() {
            info!("Player touched a kill surface");
            respawn_events.write(RespawnEvent);
        }
    }
}
