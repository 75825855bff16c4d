//! Movement domain: plugin wiring and public exports.

mod bootstrap;
mod components;
mod events;
mod respawn;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GameLayer, Ground, JumpState, Player, Wall};
pub use events::{JumpedEvent, LandedEvent, RespawnEvent};
pub use respawn::{ActiveSpawnPoint, SpawnPoint};
pub use resources::{MovementInput, MovementTuning};

pub(crate) use bootstrap::spawn_player;
pub(crate) use systems::apply_jump;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::respawn::{detect_out_of_bounds, handle_respawn, track_spawn_points};
use crate::movement::systems::{
    apply_horizontal_movement, apply_jump_cut, clamp_fall_speed, detect_ground,
    read_input, update_jump_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<ActiveSpawnPoint>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_message::<RespawnEvent>()
            .add_systems(
                Update,
                // Probe and timer updates must land before the jump decision.
                (
                    read_input,
                    detect_ground,
                    update_jump_timers,
                    apply_jump,
                    apply_jump_cut,
                    apply_horizontal_movement,
                    clamp_fall_speed,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (track_spawn_points, detect_out_of_bounds, handle_respawn)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
