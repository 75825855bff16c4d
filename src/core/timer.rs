//! Core domain: restartable countdown driving every timed behavior.

use bevy::prelude::*;

/// A restartable countdown producing normalized progress.
///
/// At most one run is active at a time: `start` on a running countdown is
/// ignored. Completion resets the elapsed time to zero so the same countdown
/// can be reused for the next run.
#[derive(Debug, Clone)]
pub struct Countdown {
    target: f32,
    elapsed: f32,
    done: bool,
    paused: bool,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            target: 1.0,
            elapsed: 0.0,
            done: true,
            paused: false,
        }
    }
}

impl Countdown {
    pub fn new(duration: f32) -> Self {
        let mut countdown = Self::default();
        countdown.set_target(duration);
        countdown
    }

    /// Replaces the duration, cancelling any active run.
    pub fn set_duration(&mut self, duration: f32) {
        self.cancel();
        self.elapsed = 0.0;
        self.set_target(duration);
    }

    /// Replaces the duration while keeping the active run.
    ///
    /// A new duration below the elapsed time cancels the run and clamps the
    /// elapsed time instead of letting the run finish.
    pub fn set_duration_preserving(&mut self, duration: f32) {
        if duration < self.elapsed {
            self.cancel();
            self.set_elapsed(duration);
            warn!("new countdown duration {duration} is below the elapsed time, run cancelled");
        }
        self.set_target(duration);
    }

    fn set_target(&mut self, duration: f32) {
        if duration > 0.0 {
            self.target = duration;
        } else {
            warn!("countdown duration must be positive, got {duration}; defaulting to 1");
            self.target = 1.0;
        }
    }

    fn set_elapsed(&mut self, elapsed: f32) {
        self.elapsed = elapsed.min(self.target);
    }

    /// Begins a run if none is active.
    pub fn start(&mut self) {
        if self.done {
            self.done = false;
        } else {
            debug!("countdown already running, start ignored");
        }
    }

    /// Advances the active run. Returns true exactly on the completing tick,
    /// which marks the countdown done and resets the elapsed time to zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.done || self.paused {
            return false;
        }
        self.set_elapsed(self.elapsed + dt);
        if self.elapsed >= self.target {
            self.done = true;
            self.elapsed = 0.0;
            return true;
        }
        false
    }

    /// Ends the run early without resetting the elapsed time.
    pub fn cancel(&mut self) {
        self.done = true;
    }

    /// Suspends or resumes ticking without losing elapsed progress.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn progress(&self) -> f32 {
        self.elapsed / self.target
    }

    pub fn progress_reversed(&self) -> f32 {
        1.0 - self.progress()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.target
    }
}
