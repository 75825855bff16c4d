//! Movement domain: player bootstrap.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::respawn::ActiveSpawnPoint;
use crate::movement::{GameLayer, JumpState, Player};

const PLAYER_RADIUS: f32 = 0.4;
const PLAYER_HEIGHT: f32 = 1.0;

/// Spawns the player at the active spawn point when the run begins.
pub(crate) fn spawn_player(
    mut commands: Commands,
    existing_player: Query<Entity, With<Player>>,
    spawn: Res<ActiveSpawnPoint>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    info!("Spawning player at {:?}", spawn.position);

    commands.spawn((
        Player,
        JumpState::default(),
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_HEIGHT))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.9, 0.9, 0.9),
            ..default()
        })),
        Transform::from_translation(spawn.position),
        (
            RigidBody::Dynamic,
            Collider::capsule(PLAYER_RADIUS, PLAYER_HEIGHT),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Default,
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Sensor,
                    GameLayer::Culled,
                ],
            ),
        ),
    ));
}
