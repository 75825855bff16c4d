//! Movement domain: tests for the jump controller grace windows.

use super::{JumpState, MovementTuning};

fn tuning() -> MovementTuning {
    MovementTuning {
        coyote_time: 0.2,
        jump_buffer_time: 0.2,
        jump_cooldown: 0.3,
        ..default_tuning()
    }
}

fn default_tuning() -> MovementTuning {
    MovementTuning::default()
}

/// Advances a state the way the per-frame systems do: ground probe first,
/// then buffer decay.
fn step(state: &mut JumpState, dt: f32, on_ground: bool, tuning: &MovementTuning) {
    state.note_ground_probe(on_ground, dt, tuning);
    state.decay_buffers(dt);
}

// -----------------------------------------------------------------------------
// Coyote time
// -----------------------------------------------------------------------------

#[test]
fn test_grounded_refills_coyote_window() {
    let tuning = tuning();
    let mut state = JumpState::default();

    step(&mut state, 0.016, true, &tuning);
    assert_eq!(state.coyote_timer, tuning.coyote_time);
    assert!(state.on_ground);
}

#[test]
fn test_press_within_coyote_window_allows_jump() {
    let tuning = tuning();
    let mut state = JumpState::default();

    // Settle on the ground long enough for the debounce to expire.
    for _ in 0..40 {
        step(&mut state, 0.05, true, &tuning);
    }

    // Leave the ground, press 0.15s later - still inside the 0.2s window.
    for _ in 0..3 {
        step(&mut state, 0.05, false, &tuning);
    }
    state.buffer_jump(&tuning);

    assert!(state.can_jump());
}

#[test]
fn test_press_past_coyote_window_is_rejected() {
    let tuning = tuning();
    let mut state = JumpState::default();

    for _ in 0..40 {
        step(&mut state, 0.05, true, &tuning);
    }

    // 0.25s airborne - the window closed at 0.2s.
    for _ in 0..5 {
        step(&mut state, 0.05, false, &tuning);
    }
    state.buffer_jump(&tuning);

    assert!(!state.can_jump());
}

#[test]
fn test_reset_coyote_reopens_window_midair() {
    let tuning = tuning();
    let mut state = JumpState::default();

    for _ in 0..40 {
        step(&mut state, 0.05, true, &tuning);
    }
    for _ in 0..10 {
        step(&mut state, 0.05, false, &tuning);
    }
    state.buffer_jump(&tuning);
    assert!(!state.can_jump());

    state.reset_coyote(&tuning);
    assert!(state.can_jump());
}

// -----------------------------------------------------------------------------
// Jump buffer
// -----------------------------------------------------------------------------

#[test]
fn test_buffered_press_fires_on_landing() {
    let tuning = tuning();
    let mut state = JumpState::default();

    for _ in 0..40 {
        step(&mut state, 0.05, true, &tuning);
    }
    // Fall for a while, then press shortly before touching down.
    for _ in 0..10 {
        step(&mut state, 0.05, false, &tuning);
    }
    state.buffer_jump(&tuning);
    step(&mut state, 0.05, true, &tuning);

    assert!(state.can_jump());
}

#[test]
fn test_buffer_expires_without_landing() {
    let tuning = tuning();
    let mut state = JumpState::default();

    for _ in 0..40 {
        step(&mut state, 0.05, true, &tuning);
    }
    state.buffer_jump(&tuning);
    // Stay grounded but let the buffer decay past its 0.2s window.
    for _ in 0..6 {
        step(&mut state, 0.05, true, &tuning);
    }

    assert!(!state.can_jump());
}

// -----------------------------------------------------------------------------
// Debounce
// -----------------------------------------------------------------------------

#[test]
fn test_double_press_within_cooldown_fires_once() {
    let tuning = tuning();
    let mut state = JumpState::default();

    for _ in 0..40 {
        step(&mut state, 0.05, true, &tuning);
    }

    state.buffer_jump(&tuning);
    assert!(state.can_jump());
    state.consume_jump(&tuning);

    // Second press 0.1s later, still within the 0.3s cooldown.
    for _ in 0..2 {
        step(&mut state, 0.05, true, &tuning);
    }
    state.buffer_jump(&tuning);
    assert!(!state.can_jump());
}

#[test]
fn test_press_after_cooldown_fires_again() {
    let tuning = tuning();
    let mut state = JumpState::default();

    for _ in 0..40 {
        step(&mut state, 0.05, true, &tuning);
    }

    state.buffer_jump(&tuning);
    state.consume_jump(&tuning);

    for _ in 0..8 {
        step(&mut state, 0.05, true, &tuning);
    }
    state.buffer_jump(&tuning);
    assert!(state.can_jump());
}

#[test]
fn test_consume_closes_buffer() {
    let tuning = tuning();
    let mut state = JumpState::default();

    for _ in 0..40 {
        step(&mut state, 0.05, true, &tuning);
    }
    state.buffer_jump(&tuning);
    state.consume_jump(&tuning);

    assert_eq!(state.jump_buffer_timer, 0.0);
    assert_eq!(state.jump_debounce_timer, tuning.jump_cooldown);
}

// -----------------------------------------------------------------------------
// Tuning helpers
// -----------------------------------------------------------------------------

#[test]
fn test_jump_height_formula() {
    let tuning = MovementTuning {
        jump_force: 10.0,
        ..MovementTuning::default()
    };
    assert_eq!(tuning.jump_height(20.0), 2.5);
}
