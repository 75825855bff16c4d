//! Level domain: spawning the world from the loaded level definition.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::camera::{CameraTuning, RotateVolume};
use crate::config::{LevelRegistry, PlatformDef};
use crate::level::LevelRoot;
use crate::movement::{ActiveSpawnPoint, GameLayer, Ground, SpawnPoint, Wall};
use crate::pickups::{JumpJewel, LevelCompleteZone, LevelGoal, Pickup};
use crate::platforms::{DisappearingPlatform, KillOnTouch, PlatformKind, Rotator};

const GROUND_SIZE: Vec3 = Vec3::new(40.0, 1.0, 40.0);
const WALL_HEIGHT: f32 = 6.0;
const PICKUP_RADIUS: f32 = 0.3;
const JEWEL_RADIUS: f32 = 0.35;
const SPAWN_POINT_SIZE: Vec3 = Vec3::new(1.5, 2.0, 1.5);

fn vec3(values: [f32; 3]) -> Vec3 {
    Vec3::from_array(values)
}

/// Builds the whole level from the registry when the run starts.
pub(crate) fn spawn_level(
    mut commands: Commands,
    existing_level: Query<Entity, With<LevelRoot>>,
    registry: Res<LevelRegistry>,
    mut camera_tuning: ResMut<CameraTuning>,
    mut active_spawn: ResMut<ActiveSpawnPoint>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !existing_level.is_empty() {
        info!("Level already spawned, skipping");
        return;
    }

    let level = &registry.level;
    info!("Spawning level '{}'", level.name);

    camera_tuning.floor_y = level.floor_y;
    if let Some(first) = level.spawn_points.first() {
        active_spawn.position = vec3(first.position);
        active_spawn.facing = first.facing.into();
    }

    commands.spawn((LevelRoot, Transform::default(), Visibility::default()));

    spawn_ground(&mut commands, level.floor_y, &mut meshes, &mut materials);
    spawn_walls(&mut commands, level.floor_y, &mut meshes, &mut materials);

    for def in &level.platforms {
        spawn_platform(&mut commands, def, &mut meshes, &mut materials);
    }

    let pickup_layers = CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]);
    for def in &level.pickups {
        commands.spawn((
            Pickup::new(def.id.clone(), def.value),
            Mesh3d(meshes.add(Sphere::new(PICKUP_RADIUS))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.95, 0.9, 0.3),
                ..default()
            })),
            Transform::from_translation(vec3(def.position)),
            RigidBody::Static,
            Collider::sphere(PICKUP_RADIUS),
            Sensor,
            CollisionEventsEnabled,
            pickup_layers,
        ));
    }

    for def in &level.jewels {
        commands.spawn((
            JumpJewel::new(def.reactivation_delay),
            Mesh3d(meshes.add(Sphere::new(JEWEL_RADIUS))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.6, 0.3, 0.9),
                alpha_mode: AlphaMode::Blend,
                ..default()
            })),
            Transform::from_translation(vec3(def.position)),
            RigidBody::Static,
            Collider::sphere(JEWEL_RADIUS),
            Sensor,
            CollisionEventsEnabled,
            pickup_layers,
        ));
    }

    for def in &level.spawn_points {
        commands.spawn((
            SpawnPoint {
                position: vec3(def.position),
                facing: def.facing.into(),
            },
            Transform::from_translation(vec3(def.position)),
            RigidBody::Static,
            Collider::cuboid(SPAWN_POINT_SIZE.x, SPAWN_POINT_SIZE.y, SPAWN_POINT_SIZE.z),
            Sensor,
            CollisionEventsEnabled,
            pickup_layers,
        ));
    }

    for def in &level.rotate_volumes {
        let size = vec3(def.size);
        commands.spawn((
            RotateVolume {
                facing: def.facing.into(),
            },
            Transform::from_translation(vec3(def.position)),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            Sensor,
            CollisionEventsEnabled,
            pickup_layers,
        ));
    }

    for def in &level.kill_platforms {
        let size = vec3(def.size);
        commands.spawn((
            KillOnTouch,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.8, 0.15, 0.15),
                ..default()
            })),
            Transform::from_translation(vec3(def.position)),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ));
    }

    let goal_size = vec3(level.goal.size);
    commands.spawn((
        LevelCompleteZone,
        Transform::from_translation(vec3(level.goal.position)),
        RigidBody::Static,
        Collider::cuboid(goal_size.x, goal_size.y, goal_size.z),
        Sensor,
        CollisionEventsEnabled,
        pickup_layers,
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// The level goal is rebuilt from the registry's pickup list each run.
pub(crate) fn setup_level_goal(registry: Res<LevelRegistry>, mut commands: Commands) {
    let (goal, duplicates) =
        LevelGoal::from_ids(registry.level.pickups.iter().map(|p| p.id.clone()));
    for id in duplicates {
        warn!("Duplicate required pickup id '{id}' collapsed");
    }
    commands.insert_resource(goal);
}

fn spawn_ground(
    commands: &mut Commands,
    floor_y: f32,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Cuboid::new(GROUND_SIZE.x, GROUND_SIZE.y, GROUND_SIZE.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.4, 0.35),
            ..default()
        })),
        Transform::from_xyz(0.0, floor_y - GROUND_SIZE.y / 2.0, 0.0),
        RigidBody::Static,
        Collider::cuboid(GROUND_SIZE.x, GROUND_SIZE.y, GROUND_SIZE.z),
        CollisionLayers::new(GameLayer::Ground, LayerMask::ALL),
    ));
}

fn spawn_walls(
    commands: &mut Commands,
    floor_y: f32,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let wall_color = Color::srgb(0.25, 0.25, 0.35);
    let wall_size = Vec3::new(1.0, WALL_HEIGHT, GROUND_SIZE.z);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, LayerMask::ALL);

    for side in [-1.0, 1.0] {
        commands.spawn((
            Wall,
            Mesh3d(meshes.add(Cuboid::new(wall_size.x, wall_size.y, wall_size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: wall_color,
                ..default()
            })),
            Transform::from_xyz(
                side * GROUND_SIZE.x / 2.0,
                floor_y + WALL_HEIGHT / 2.0,
                0.0,
            ),
            RigidBody::Static,
            Collider::cuboid(wall_size.x, wall_size.y, wall_size.z),
            wall_layers,
        ));
    }
}

fn spawn_platform(
    commands: &mut Commands,
    def: &PlatformDef,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let kind = PlatformKind::from(def.kind);
    let size = vec3(def.size);
    // Platforms are stand-on ground for the probe and the camera occluder ray.
    let solid_layers = CollisionLayers::new(GameLayer::Ground, LayerMask::ALL);

    // Each platform gets its own material so fading one does not fade its
    // siblings.
    let material = materials.add(StandardMaterial {
        base_color: kind.color(),
        alpha_mode: AlphaMode::Blend,
        ..default()
    });

    let mut platform = commands.spawn((
        DisappearingPlatform::new(kind, def.regen_delay, solid_layers, def.layer_swap_index),
        Ground,
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(material),
        Transform::from_translation(vec3(def.position)),
        RigidBody::Static,
        Collider::cuboid(size.x, size.y, size.z),
        CollisionEventsEnabled,
        solid_layers,
    ));

    if let Some(spin) = def.spin {
        platform.insert(Rotator {
            degrees_per_sec: spin,
        });
    }
}
