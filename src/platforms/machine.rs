//! Platforms domain: timed hazard state machine.
//!
//! Each disappearing platform owns one machine: a two-phase state value
//! driven by touch events and a countdown. Transition logic is pure; the
//! systems layer applies the returned side effects to the ECS.

use bevy::prelude::*;

use crate::core::Countdown;

/// Design table mapping a platform variant to its fall delay and tint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformKind {
    /// Vanishes the moment it is touched and takes a long time to return.
    InstantFall,
    #[default]
    QuickFall,
    NormalFall,
    LongFall,
}

/// Regeneration delay for instant-fall platforms, which ignore the
/// configured delay.
const INSTANT_FALL_RESET_TIME: f32 = 60.0;

impl PlatformKind {
    pub fn fall_delay(&self) -> f32 {
        match self {
            PlatformKind::InstantFall => 0.0,
            PlatformKind::QuickFall => 1.0,
            PlatformKind::NormalFall => 2.0,
            PlatformKind::LongFall => 6.0,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            PlatformKind::InstantFall => Color::srgb(0.5, 0.5, 0.5),
            PlatformKind::QuickFall => Color::srgb(0.2, 0.3, 0.9),
            PlatformKind::NormalFall => Color::srgb(0.9, 0.85, 0.2),
            PlatformKind::LongFall => Color::srgb(0.2, 0.8, 0.3),
        }
    }

    /// Instant platforms skip the fall countdown entirely.
    pub fn is_instant(&self) -> bool {
        matches!(self, PlatformKind::InstantFall)
    }

    pub fn regen_delay_override(&self) -> Option<f32> {
        self.is_instant().then_some(INSTANT_FALL_RESET_TIME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlatformPhase {
    #[default]
    Untouched,
    Disappeared,
}

/// Side effect requested by a phase transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineAction {
    /// Collider becomes passthrough and the platform moves to the culled layer.
    Vanish,
    /// Solidity and the original layer are restored.
    Restore,
}

/// Per-tick output of [`PlatformMachine::advance`] and touch events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MachineOutput {
    pub opacity: Option<f32>,
    pub action: Option<MachineAction>,
}

impl MachineOutput {
    /// Folds a later output over this one; later values win.
    pub fn merge(&mut self, other: MachineOutput) {
        if other.opacity.is_some() {
            self.opacity = other.opacity;
        }
        if other.action.is_some() {
            self.action = other.action;
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlatformMachine {
    kind: PlatformKind,
    phase: PlatformPhase,
    countdown: Countdown,
    regen_delay: f32,
    is_falling: bool,
    is_regenerating: bool,
    trigger_entered: bool,
}

impl PlatformMachine {
    pub fn new(kind: PlatformKind, regen_delay: f32) -> Self {
        let regen_delay = kind.regen_delay_override().unwrap_or(regen_delay);
        let countdown = if kind.is_instant() {
            Countdown::default()
        } else {
            Countdown::new(kind.fall_delay())
        };
        Self {
            kind,
            phase: PlatformPhase::Untouched,
            countdown,
            regen_delay,
            is_falling: false,
            is_regenerating: false,
            trigger_entered: false,
        }
    }

    pub fn kind(&self) -> PlatformKind {
        self.kind
    }

    pub fn phase(&self) -> PlatformPhase {
        self.phase
    }

    pub fn is_mid_transition(&self) -> bool {
        self.is_falling || self.is_regenerating
    }

    /// Player entered the platform volume.
    pub fn touch(&mut self) -> MachineOutput {
        match self.phase {
            PlatformPhase::Untouched => {
                if self.kind.is_instant() {
                    return self.vanish();
                }
                // Latch against re-entrant touches: an in-flight fall keeps
                // its remaining time.
                if !self.is_falling {
                    self.is_falling = true;
                    self.countdown.start();
                }
                MachineOutput::default()
            }
            PlatformPhase::Disappeared => {
                if self.is_regenerating {
                    // Standing inside the vanished volume holds regeneration
                    // so the platform cannot re-solidify around the player.
                    self.trigger_entered = true;
                    self.countdown.set_paused(true);
                }
                MachineOutput::default()
            }
        }
    }

    /// Player left the platform volume.
    pub fn touch_ended(&mut self) -> MachineOutput {
        if self.phase == PlatformPhase::Disappeared && self.is_regenerating && self.trigger_entered
        {
            self.trigger_entered = false;
            self.countdown.set_paused(false);
        }
        MachineOutput::default()
    }

    /// Advances an active transition, producing an opacity update and, on the
    /// completing tick, the phase-change action.
    pub fn advance(&mut self, dt: f32) -> MachineOutput {
        match self.phase {
            PlatformPhase::Untouched if self.is_falling => {
                if self.countdown.tick(dt) {
                    self.vanish()
                } else {
                    MachineOutput {
                        opacity: Some(self.countdown.progress_reversed()),
                        action: None,
                    }
                }
            }
            PlatformPhase::Disappeared if self.is_regenerating => {
                if self.countdown.tick(dt) {
                    self.restore()
                } else {
                    MachineOutput {
                        opacity: Some(self.countdown.progress()),
                        action: None,
                    }
                }
            }
            _ => MachineOutput::default(),
        }
    }

    fn vanish(&mut self) -> MachineOutput {
        self.phase = PlatformPhase::Disappeared;
        self.is_falling = false;
        self.is_regenerating = true;
        self.trigger_entered = false;
        self.countdown.set_duration(self.regen_delay);
        self.countdown.set_paused(false);
        self.countdown.start();
        MachineOutput {
            opacity: Some(0.0),
            action: Some(MachineAction::Vanish),
        }
    }

    fn restore(&mut self) -> MachineOutput {
        self.phase = PlatformPhase::Untouched;
        self.is_regenerating = false;
        self.trigger_entered = false;
        self.countdown.set_paused(false);
        if !self.kind.is_instant() {
            self.countdown.set_duration(self.kind.fall_delay());
        }
        MachineOutput {
            opacity: Some(1.0),
            action: Some(MachineAction::Restore),
        }
    }
}
