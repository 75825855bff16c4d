//! Core domain: session flow and pause systems.

use bevy::prelude::*;

use crate::core::state::GameState;

pub(crate) fn finish_boot(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::MainMenu);
}

pub(crate) fn start_on_confirm(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::Space) {
        info!("Starting game");
        next_state.set(GameState::Playing);
    }
}

pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }
    match state.get() {
        GameState::Playing => next_state.set(GameState::Paused),
        GameState::Paused => next_state.set(GameState::Playing),
        _ => {}
    }
}

/// Freezes virtual time so every dt-driven countdown suspends in place.
pub(crate) fn freeze_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
    info!("Gameplay paused");
}

pub(crate) fn unfreeze_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
    info!("Gameplay resumed");
}
