//! Level domain: world spawning from the level registry.

mod spawn;

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::spawn::{setup_level_goal, spawn_level};
use crate::movement::spawn_player;

/// Marker for the level container entity, used to guard against respawning
/// the world on state re-entry.
#[derive(Component, Debug, Default)]
pub struct LevelRoot;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        // The player spawns last so the level has already picked the active
        // spawn point.
        app.add_systems(
            OnEnter(GameState::Playing),
            (setup_level_goal, spawn_level, spawn_player).chain(),
        );
    }
}
