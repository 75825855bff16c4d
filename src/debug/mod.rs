//! Debug overlay for fast iteration (dev-tools feature).
//!
//! Features:
//! - F3 toggles the overlay
//! - Ground-probe gizmo under the player
//! - Platform phase transition logging

use avian3d::prelude::*;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::movement::{JumpState, MovementTuning, Player};
use crate::platforms::{DisappearingPlatform, PlatformPhase};

/// Resource tracking debug overlay state.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub visible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_debug_overlay)
            .add_systems(
                Update,
                (draw_ground_probe, log_platform_phases)
                    .run_if(|state: Res<DebugState>| state.visible),
            );
    }
}

fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.visible = !debug_state.visible;
        info!(
            "[DEBUG] Overlay {}",
            if debug_state.visible { "ON" } else { "OFF" }
        );
    }
}

/// Draws the ground probe ray under the player, green while grounded.
fn draw_ground_probe(
    mut gizmos: Gizmos,
    tuning: Res<MovementTuning>,
    player_query: Query<(&Transform, &JumpState), With<Player>>,
) {
    for (transform, state) in &player_query {
        let origin = transform.translation - Vec3::Y * tuning.ground_probe_offset;
        let end = origin - Vec3::Y * tuning.ground_probe_distance;
        let color = if state.on_ground {
            Color::srgb(0.2, 0.9, 0.2)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };

        gizmos.line(origin, end, color);
        gizmos.sphere(Isometry3d::from_translation(end), 0.05, color);
    }
}

/// Logs platform phase changes as they happen.
fn log_platform_phases(
    platforms: Query<(Entity, &DisappearingPlatform), With<RigidBody>>,
    mut known_phases: Local<HashMap<Entity, PlatformPhase>>,
) {
    for (entity, platform) in &platforms {
        let phase = platform.machine.phase();
        let previous = known_phases.insert(entity, phase);
        if previous.is_some_and(|p| p != phase) {
            info!(
                "[DEBUG] Platform {entity} ({:?}) -> {:?}",
                platform.machine.kind(),
                phase
            );
        }
    }
}
