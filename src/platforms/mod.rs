//! Platforms domain: plugin wiring and public exports.

mod components;
mod machine;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{DisappearingPlatform, KillOnTouch, Rotator};
pub use machine::{MachineAction, MachineOutput, PlatformKind, PlatformMachine, PlatformPhase};

use bevy::prelude::*;

use crate::core::GameState;
use crate::platforms::systems::{
    advance_platforms, handle_platform_contacts, kill_on_touch, rotate_platforms,
};

pub struct PlatformsPlugin;

impl Plugin for PlatformsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            // Contacts fold into the same frame's machine step.
            (handle_platform_contacts, advance_platforms)
                .chain()
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(
            Update,
            (rotate_platforms, kill_on_touch).run_if(in_state(GameState::Playing)),
        );
    }
}
