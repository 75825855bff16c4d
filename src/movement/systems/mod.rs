//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_horizontal_movement, apply_jump, apply_jump_cut, clamp_fall_speed, update_jump_timers,
};
