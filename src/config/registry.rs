//! LevelRegistry resource holding the validated level definition.

use bevy::prelude::*;

use super::data::LevelDef;

/// Central registry for the loaded level.
#[derive(Resource, Default)]
pub struct LevelRegistry {
    pub level: LevelDef,
}

impl LevelRegistry {
    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "Level '{}' loaded: {} platforms, {} pickups, {} jewels, {} spawn points, \
             {} rotate volumes, {} kill platforms",
            self.level.name,
            self.level.platforms.len(),
            self.level.pickups.len(),
            self.level.jewels.len(),
            self.level.spawn_points.len(),
            self.level.rotate_volumes.len(),
            self.level.kill_platforms.len(),
        )
    }
}
