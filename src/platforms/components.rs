//! Platforms domain: components.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;
use crate::platforms::machine::{MachineOutput, PlatformKind, PlatformMachine};

/// A platform that crumbles after being stood on and later regenerates.
#[derive(Component)]
pub struct DisappearingPlatform {
    pub machine: PlatformMachine,
    /// Layers to restore when the platform solidifies again.
    pub solid_layers: CollisionLayers,
    /// Physics layer bit the vanished platform moves to. 0 means unset and
    /// falls back to the culled layer.
    pub swap_layer_index: u32,
    /// Output accumulated from this frame's contact events, folded into the
    /// per-tick advance so side effects apply once.
    pub pending: MachineOutput,
}

impl DisappearingPlatform {
    pub fn new(
        kind: PlatformKind,
        regen_delay: f32,
        solid_layers: CollisionLayers,
        swap_layer_index: u32,
    ) -> Self {
        Self {
            machine: PlatformMachine::new(kind, regen_delay),
            solid_layers,
            swap_layer_index,
            pending: MachineOutput::default(),
        }
    }

    /// Layers while vanished: passthrough for everything except the player
    /// trigger overlap that gates regeneration.
    pub fn vanished_layers(&self) -> CollisionLayers {
        let membership = if self.swap_layer_index == 0 {
            GameLayer::Culled.to_bits()
        } else {
            1 << self.swap_layer_index
        };
        CollisionLayers::new(LayerMask(membership), LayerMask(GameLayer::Player.to_bits()))
    }
}

/// Spins the entity around the Y axis at a fixed rate.
#[derive(Component, Debug)]
pub struct Rotator {
    pub degrees_per_sec: f32,
}

impl Default for Rotator {
    fn default() -> Self {
        Self {
            degrees_per_sec: 100.0,
        }
    }
}

/// Touching this surface sends the player back to the active spawn point.
#[derive(Component, Debug, Default)]
pub struct KillOnTouch;
