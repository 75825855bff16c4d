//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub speed: f32,
    /// Divisor applied to lateral input before normalizing the move direction.
    pub sideways_penalty: f32,
    pub jump_force: f32,
    /// Fraction of upward velocity kept when the jump button is released early.
    pub jump_cut_multiplier: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    /// Debounce after a jump fires, so one press cannot double-impulse before
    /// the ground probe clears.
    pub jump_cooldown: f32,
    /// Terminal fall speed; faster falls tunnel through thin colliders.
    pub max_fall_speed: f32,
    pub ground_probe_offset: f32,
    pub ground_probe_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 6.0,
            sideways_penalty: 2.0,
            jump_force: 9.0,
            jump_cut_multiplier: 0.5,
            coyote_time: 0.2,
            jump_buffer_time: 0.2,
            jump_cooldown: 0.3,
            max_fall_speed: 25.0,
            ground_probe_offset: 0.9,
            ground_probe_distance: 0.15,
        }
    }
}

impl MovementTuning {
    /// Maximum height reachable from a single jump, h = v² / (2g).
    pub fn jump_height(&self, gravity: f32) -> f32 {
        self.jump_force * self.jump_force / (2.0 * gravity)
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
}
