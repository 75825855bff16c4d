//! Pickups domain: components.

use bevy::prelude::*;

use crate::core::Countdown;

/// A collectible star counting toward level completion.
#[derive(Component, Debug)]
pub struct Pickup {
    pub id: String,
    pub value: u32,
    collected: bool,
}

impl Pickup {
    pub fn new(id: impl Into<String>, value: u32) -> Self {
        Self {
            id: id.into(),
            value,
            collected: false,
        }
    }

    /// Marks the pickup collected. Returns false if it already was, so
    /// duplicate contact events in one frame cannot double-count.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            false
        } else {
            self.collected = true;
            true
        }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }
}

/// Sensor volume that ends the run, but only once the goal is complete.
#[derive(Component, Debug, Default)]
pub struct LevelCompleteZone;

/// A jewel that re-opens the player's coyote window until the next jump or
/// landing, then goes dormant for a while.
#[derive(Component, Debug)]
pub struct JumpJewel {
    effect_active: bool,
    disabled: bool,
    reactivation: Countdown,
}

impl JumpJewel {
    pub fn new(reactivation_delay: f32) -> Self {
        Self {
            effect_active: false,
            disabled: false,
            reactivation: Countdown::new(reactivation_delay),
        }
    }

    /// Player contact. Returns true when the jewel fires; a dormant jewel
    /// ignores the touch.
    pub fn touch(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.disabled = true;
        self.effect_active = true;
        self.reactivation.start();
        true
    }

    /// The player jumped or landed; the midair grace ends.
    pub fn end_effect(&mut self) {
        self.effect_active = false;
    }

    /// Advances the dormancy countdown. Returns true on the tick the jewel
    /// becomes available again.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.disabled {
            return false;
        }
        if self.reactivation.tick(dt) {
            self.disabled = false;
            true
        } else {
            false
        }
    }

    pub fn is_effect_active(&self) -> bool {
        self.effect_active
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}
