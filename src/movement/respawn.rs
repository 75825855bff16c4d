//! Movement domain: spawn points, out-of-bounds detection, and respawn flow.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::camera::FacingDirection;
use crate::config::LevelRegistry;
use crate::movement::{JumpState, Player, RespawnEvent};

/// How far below the level floor the player may fall before respawning.
const OUT_OF_BOUNDS_DROP: f32 = 2.0;

/// Trigger volume that updates the active spawn point when crossed.
#[derive(Component, Debug)]
pub struct SpawnPoint {
    pub position: Vec3,
    pub facing: FacingDirection,
}

/// Where the player reappears after dying, and which way the camera faces.
#[derive(Resource, Debug)]
pub struct ActiveSpawnPoint {
    pub position: Vec3,
    pub facing: FacingDirection,
}

impl Default for ActiveSpawnPoint {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 1.5, 0.0),
            facing: FacingDirection::Up,
        }
    }
}

pub(crate) fn track_spawn_points(
    mut collision_start_events: MessageReader<CollisionStart>,
    spawn_points: Query<&SpawnPoint>,
    player_query: Query<Entity, With<Player>>,
    mut active: ResMut<ActiveSpawnPoint>,
) {
    let Some(player_entity) = player_query.iter().next() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let (point_entity, other) = if spawn_points.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if spawn_points.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if other != player_entity {
            continue;
        }

        if let Ok(point) = spawn_points.get(point_entity) {
            active.position = point.position;
            active.facing = point.facing;
            info!("Spawn point updated: {:?}", point.position);
        }
    }
}

pub(crate) fn detect_out_of_bounds(
    registry: Res<LevelRegistry>,
    player_query: Query<&Transform, With<Player>>,
    mut respawn_events: MessageWriter<RespawnEvent>,
) {
    for transform in &player_query {
        if transform.translation.y < registry.level.floor_y - OUT_OF_BOUNDS_DROP {
            info!("Player fell out of bounds");
            respawn_events.write(RespawnEvent);
        }
    }
}

pub(crate) fn handle_respawn(
    mut respawn_events: MessageReader<RespawnEvent>,
    active: Res<ActiveSpawnPoint>,
    mut player_query: Query<(&mut Transform, &mut LinearVelocity, &mut JumpState), With<Player>>,
) {
    let mut respawned = false;
    for _ in respawn_events.read() {
        respawned = true;
    }
    if !respawned {
        return;
    }

    for (mut transform, mut velocity, mut state) in &mut player_query {
        transform.translation = active.position;
        **velocity = Vec3::ZERO;
        *state = JumpState::default();
        info!("Player respawned at {:?}", active.position);
    }
}
