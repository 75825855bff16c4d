//! Validation and fix-up for loaded level definitions.

use std::collections::HashSet;

use super::data::{FacingDef, LevelDef, SpawnPointDef};

/// The physics engine supports 32 collision layers.
const MAX_LAYER_BITS: u32 = 32;

/// A validation finding with context about what was fixed up.
#[derive(Debug)]
pub struct ValidationError {
    pub entry: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.entry, self.message)
    }
}

/// Validate a level definition, repairing what can be repaired in place.
/// Returns a list of findings, empty if the level was already clean.
pub fn validate_level(level: &mut LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, platform) in level.platforms.iter_mut().enumerate() {
        if platform.layer_swap_index >= MAX_LAYER_BITS {
            errors.push(ValidationError {
                entry: format!("platform #{index}"),
                message: format!(
                    "layer_swap_index {} out of range, reset to 0",
                    platform.layer_swap_index
                ),
            });
            platform.layer_swap_index = 0;
        }
        if platform.regen_delay < 0.0 {
            errors.push(ValidationError {
                entry: format!("platform #{index}"),
                message: format!("negative regen_delay {}, reset to 0", platform.regen_delay),
            });
            platform.regen_delay = 0.0;
        }
    }

    for (index, jewel) in level.jewels.iter_mut().enumerate() {
        if jewel.reactivation_delay < 0.0 {
            errors.push(ValidationError {
                entry: format!("jewel #{index}"),
                message: format!(
                    "negative reactivation_delay {}, reset to 0",
                    jewel.reactivation_delay
                ),
            });
            jewel.reactivation_delay = 0.0;
        }
    }

    if level.spawn_points.is_empty() {
        errors.push(ValidationError {
            entry: "spawn_points".to_string(),
            message: "no spawn points defined, injecting a default at the origin".to_string(),
        });
        level.spawn_points.push(SpawnPointDef {
            position: [0.0, 1.5, 0.0],
            facing: FacingDef::Up,
        });
    }

    // Duplicate pickup ids would double-count toward level completion.
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    level.pickups.retain(|pickup| {
        if seen.insert(pickup.id.clone()) {
            true
        } else {
            duplicates.push(pickup.id.clone());
            false
        }
    });
    for id in duplicates {
        errors.push(ValidationError {
            entry: format!("pickup '{id}'"),
            message: "duplicate id, dropped".to_string(),
        });
    }

    errors
}
