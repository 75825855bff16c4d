//! Core domain: session flow plugin wiring and shared utilities.

mod state;
mod systems;
mod timer;


pub use state::GameState;
pub use timer::Countdown;

use bevy::prelude::*;

use crate::core::systems::{finish_boot, freeze_time, start_on_confirm, toggle_pause, unfreeze_time};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(OnEnter(GameState::Boot), finish_boot)
            .add_systems(
                Update,
                start_on_confirm.run_if(in_state(GameState::MainMenu)),
            )
            .add_systems(Update, toggle_pause)
            .add_systems(OnEnter(GameState::Paused), freeze_time)
            .add_systems(OnExit(GameState::Paused), unfreeze_time);
    }
}
