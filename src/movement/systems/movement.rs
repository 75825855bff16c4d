//! Movement domain: locomotion and jump systems.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{JumpState, JumpedEvent, MovementInput, MovementTuning, Player};

pub(crate) fn update_jump_timers(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut JumpState, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        if input.jump_just_pressed {
            state.buffer_jump(&tuning);
        } else {
            state.decay_buffers(dt);
        }
    }
}

pub(crate) fn apply_jump(
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut JumpState, &mut LinearVelocity), With<Player>>,
    mut jumped_events: MessageWriter<JumpedEvent>,
) {
    for (mut state, mut velocity) in &mut query {
        if state.can_jump() {
            // Overwrite the vertical component so jump height is consistent
            // regardless of residual velocity.
            velocity.y = tuning.jump_force;
            state.consume_jump(&tuning);
            jumped_events.write(JumpedEvent);
            debug!(
                "Jump impulse: coyote={:.3}s remaining at fire",
                state.coyote_timer
            );
        }
    }
}

pub(crate) fn apply_jump_cut(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&JumpState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_just_released {
        return;
    }
    for (state, mut velocity) in &mut query {
        // Cutting only applies while ascending in the air; this is what turns
        // hold duration into jump height.
        if velocity.y > 0.0 && !state.on_ground {
            velocity.y *= tuning.jump_cut_multiplier;
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    // Sideways input is penalized before normalizing, so strafing bends the
    // direction without changing the overall speed.
    let blended = Vec3::new(
        input.axis.x / tuning.sideways_penalty,
        0.0,
        input.axis.y,
    );
    let direction = blended.normalize_or_zero();

    for mut velocity in &mut query {
        velocity.x = direction.x * tuning.speed;
        velocity.z = direction.z * tuning.speed;
    }
}

pub(crate) fn clamp_fall_speed(
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    for mut velocity in &mut query {
        if velocity.y < -tuning.max_fall_speed {
            velocity.y = -tuning.max_fall_speed;
        }
    }
}
