//! Config domain: RON level data, validation, and the level registry.

mod data;
mod loader;
mod registry;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    FacingDef, GoalDef, JewelDef, KillPlatformDef, LevelDef, PickupDef, PlatformDef,
    PlatformKindDef, RotateVolumeDef, SpawnPointDef,
};
pub use loader::{ConfigLoadError, load_level, parse_level};
pub use registry::LevelRegistry;
pub use validation::{ValidationError, validate_level};

use bevy::prelude::*;
use std::path::Path;

const LEVEL_FILE: &str = "assets/data/level.ron";

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_level_registry);
    }
}

/// Loads the level file, falling back to the built-in layout on failure.
fn load_level_registry(mut commands: Commands) {
    let mut level = match load_level(Path::new(LEVEL_FILE)) {
        Ok(level) => level,
        Err(e) => {
            error!("{e}; using the built-in level");
            LevelDef::default()
        }
    };

    for finding in validate_level(&mut level) {
        warn!("Level validation: {finding}");
    }

    let registry = LevelRegistry { level };
    info!("{}", registry.summary());
    commands.insert_resource(registry);
}
