//! Movement domain: components and physics layers for locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::resources::MovementTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (pickups, volumes) - should not block movement
    Sensor,
    /// Objects swapped out of sight (culled occluders, vanished platforms)
    Culled,
}

#[derive(Component, Debug)]
pub struct Player;

/// Jump grace windows as real-time decaying counters, so the forgiving jump
/// behaves the same at any frame rate.
#[derive(Component, Debug, Default)]
pub struct JumpState {
    pub on_ground: bool,
    pub coyote_timer: f32,
    pub jump_buffer_timer: f32,
    pub jump_debounce_timer: f32,
}

impl JumpState {
    /// Feeds the per-tick ground probe result: grounded refills the coyote
    /// window, airborne lets it decay.
    pub fn note_ground_probe(&mut self, on_ground: bool, dt: f32, tuning: &MovementTuning) {
        self.on_ground = on_ground;
        if on_ground {
            self.coyote_timer = tuning.coyote_time;
        } else {
            self.coyote_timer -= dt;
        }
    }

    /// Press edge: remembers the jump for the buffer window.
    pub fn buffer_jump(&mut self, tuning: &MovementTuning) {
        self.jump_buffer_timer = tuning.jump_buffer_time;
    }

    /// Decays the buffer and debounce counters on frames without a press.
    pub fn decay_buffers(&mut self, dt: f32) {
        self.jump_buffer_timer -= dt;
        self.jump_debounce_timer -= dt;
    }

    /// An impulse may fire only while both grace windows are open and the
    /// debounce cooldown from the previous jump has expired.
    pub fn can_jump(&self) -> bool {
        self.coyote_timer > 0.0 && self.jump_buffer_timer > 0.0 && self.jump_debounce_timer < 0.0
    }

    /// Marks a fired jump: closes the buffer and arms the debounce cooldown.
    pub fn consume_jump(&mut self, tuning: &MovementTuning) {
        self.jump_buffer_timer = 0.0;
        self.jump_debounce_timer = tuning.jump_cooldown;
    }

    /// Re-opens the coyote window immediately (jewel pickup effect).
    pub fn reset_coyote(&mut self, tuning: &MovementTuning) {
        self.coyote_timer = tuning.coyote_time;
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
