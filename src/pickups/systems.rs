//! Pickups domain: collection, goal checks, and the jump jewel.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{
    GameLayer, JumpState, JumpedEvent, LandedEvent, MovementTuning, Player,
};
use crate::pickups::components::{JumpJewel, LevelCompleteZone, Pickup};
use crate::pickups::events::{AreaCompletedEvent, PickedUpEvent};
use crate::pickups::resources::{LevelGoal, Score};

const DORMANT_JEWEL_OPACITY: f32 = 0.3;

/// Finds the non-player side of a contact involving the player, if any.
fn other_collider(event_a: Entity, event_b: Entity, player: Entity) -> Option<Entity> {
    if event_a == player {
        Some(event_b)
    } else if event_b == player {
        Some(event_a)
    } else {
        None
    }
}

pub(crate) fn collect_pickups(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut pickups: Query<&mut Pickup>,
    player_query: Query<Entity, With<Player>>,
    mut score: ResMut<Score>,
    mut goal: ResMut<LevelGoal>,
    mut picked_up_events: MessageWriter<PickedUpEvent>,
    mut completed_events: MessageWriter<AreaCompletedEvent>,
) {
    let Some(player_entity) = player_query.iter().next() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = other_collider(event.collider1, event.collider2, player_entity) else {
            continue;
        };
        let Ok(mut pickup) = pickups.get_mut(other) else {
            continue;
        };

        if !pickup.collect() {
            continue;
        }

        let was_complete = goal.is_complete();
        score.points += pickup.value;
        goal.note_collected(&pickup.id);
        info!("Collected '{}' (+{})", pickup.id, pickup.value);
        picked_up_events.write(PickedUpEvent {
            id: pickup.id.clone(),
            value: pickup.value,
        });
        commands.entity(other).despawn();

        if !was_complete && goal.is_complete() {
            info!("All required pickups collected");
            completed_events.write(AreaCompletedEvent);
        }
    }
}

/// The exit zone only ends the run once the goal is complete.
pub(crate) fn check_goal_zone(
    mut collision_start_events: MessageReader<CollisionStart>,
    zones: Query<(), With<LevelCompleteZone>>,
    player_query: Query<Entity, With<Player>>,
    goal: Res<LevelGoal>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Some(player_entity) = player_query.iter().next() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = other_collider(event.collider1, event.collider2, player_entity) else {
            continue;
        };
        if zones.get(other).is_err() {
            continue;
        }

        if goal.is_complete() {
            info!("Level complete");
            next_state.set(GameState::End);
        } else {
            info!("{} pickups still required", goal.remaining());
        }
    }
}

pub(crate) fn touch_jewels(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut jewels: Query<(Entity, &mut JumpJewel, &MeshMaterial3d<StandardMaterial>)>,
    player_query: Query<Entity, With<Player>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let Some(player_entity) = player_query.iter().next() else {
        for _ in collision_start_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let Some(other) = other_collider(event.collider1, event.collider2, player_entity) else {
            continue;
        };
        let Ok((jewel_entity, mut jewel, material_handle)) = jewels.get_mut(other) else {
            continue;
        };

        if !jewel.touch() {
            continue;
        }

        info!("Jump jewel activated");
        set_opacity(&mut materials, material_handle, DORMANT_JEWEL_OPACITY);
        // Dormant jewels stop colliding with the player.
        commands
            .entity(jewel_entity)
            .insert(CollisionLayers::new(GameLayer::Culled, LayerMask::NONE));
    }
}

/// While a jewel's effect is live, the player's coyote window stays open,
/// so one midair jump is available. Jumping or landing ends the effect.
pub(crate) fn apply_jewel_effect(
    mut jewels: Query<&mut JumpJewel>,
    mut jumped_events: MessageReader<JumpedEvent>,
    mut landed_events: MessageReader<LandedEvent>,
    tuning: Res<MovementTuning>,
    mut player_query: Query<&mut JumpState, With<Player>>,
) {
    let ended = jumped_events.read().next().is_some() || landed_events.read().next().is_some();

    for mut jewel in &mut jewels {
        if !jewel.is_effect_active() {
            continue;
        }
        if ended {
            jewel.end_effect();
            continue;
        }
        for mut state in &mut player_query {
            state.reset_coyote(&tuning);
        }
    }
}

pub(crate) fn reactivate_jewels(
    time: Res<Time>,
    mut jewels: Query<(Entity, &mut JumpJewel, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut commands: Commands,
) {
    let dt = time.delta_secs();

    for (entity, mut jewel, material_handle) in &mut jewels {
        if jewel.tick(dt) {
            info!("Jump jewel reactivated");
            set_opacity(&mut materials, material_handle, 1.0);
            commands
                .entity(entity)
                .insert(CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]));
        }
    }
}

fn set_opacity(
    materials: &mut Assets<StandardMaterial>,
    handle: &MeshMaterial3d<StandardMaterial>,
    opacity: f32,
) {
    match materials.get_mut(&handle.0) {
        Some(material) => {
            material.base_color.set_alpha(opacity);
        }
        None => {
            error!("Jewel material missing, cannot change opacity");
        }
    }
}
