//! Data definitions for the RON level file.
//!
//! These structs mirror the structure in assets/data/level.ron and are used
//! for deserialization. The LevelRegistry holds the validated result.

use serde::{Deserialize, Serialize};

use crate::camera::FacingDirection;
use crate::platforms::PlatformKind;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDef {
    pub name: String,
    /// Height of the level floor; falling below it triggers a respawn.
    pub floor_y: f32,
    pub platforms: Vec<PlatformDef>,
    pub pickups: Vec<PickupDef>,
    #[serde(default)]
    pub jewels: Vec<JewelDef>,
    pub spawn_points: Vec<SpawnPointDef>,
    #[serde(default)]
    pub rotate_volumes: Vec<RotateVolumeDef>,
    #[serde(default)]
    pub kill_platforms: Vec<KillPlatformDef>,
    pub goal: GoalDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformDef {
    pub kind: PlatformKindDef,
    pub position: [f32; 3],
    pub size: [f32; 3],
    pub regen_delay: f32,
    /// Physics layer bit used while the platform is vanished. 0 = unset.
    #[serde(default)]
    pub layer_swap_index: u32,
    /// Spin rate in degrees per second, if the platform rotates.
    #[serde(default)]
    pub spin: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PickupDef {
    pub id: String,
    pub position: [f32; 3],
    pub value: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JewelDef {
    pub position: [f32; 3],
    pub reactivation_delay: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpawnPointDef {
    pub position: [f32; 3],
    pub facing: FacingDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RotateVolumeDef {
    pub position: [f32; 3],
    pub size: [f32; 3],
    pub facing: FacingDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KillPlatformDef {
    pub position: [f32; 3],
    pub size: [f32; 3],
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoalDef {
    pub position: [f32; 3],
    pub size: [f32; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PlatformKindDef {
    InstantFall,
    QuickFall,
    NormalFall,
    LongFall,
}

impl From<PlatformKindDef> for PlatformKind {
    fn from(def: PlatformKindDef) -> Self {
        match def {
            PlatformKindDef::InstantFall => PlatformKind::InstantFall,
            PlatformKindDef::QuickFall => PlatformKind::QuickFall,
            PlatformKindDef::NormalFall => PlatformKind::NormalFall,
            PlatformKindDef::LongFall => PlatformKind::LongFall,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum FacingDef {
    Up,
    Down,
    Left,
    Right,
}

impl From<FacingDef> for FacingDirection {
    fn from(def: FacingDef) -> Self {
        match def {
            FacingDef::Up => FacingDirection::Up,
            FacingDef::Down => FacingDirection::Down,
            FacingDef::Left => FacingDirection::Left,
            FacingDef::Right => FacingDirection::Right,
        }
    }
}

impl Default for LevelDef {
    /// Built-in fallback layout used when the level file is missing or
    /// fails to parse.
    fn default() -> Self {
        Self {
            name: "Built-in".to_string(),
            floor_y: 0.0,
            platforms: vec![
                PlatformDef {
                    kind: PlatformKindDef::QuickFall,
                    position: [0.0, 1.0, -4.0],
                    size: [2.0, 0.4, 2.0],
                    regen_delay: 2.0,
                    layer_swap_index: 0,
                    spin: None,
                },
                PlatformDef {
                    kind: PlatformKindDef::NormalFall,
                    position: [0.0, 2.0, -8.0],
                    size: [2.0, 0.4, 2.0],
                    regen_delay: 2.0,
                    layer_swap_index: 0,
                    spin: None,
                },
                PlatformDef {
                    kind: PlatformKindDef::LongFall,
                    position: [0.0, 3.0, -12.0],
                    size: [2.0, 0.4, 2.0],
                    regen_delay: 2.0,
                    layer_swap_index: 0,
                    spin: Some(100.0),
                },
            ],
            pickups: vec![
                PickupDef {
                    id: "star_a".to_string(),
                    position: [0.0, 2.0, -4.0],
                    value: 1,
                },
                PickupDef {
                    id: "star_b".to_string(),
                    position: [0.0, 3.0, -8.0],
                    value: 1,
                },
            ],
            jewels: vec![JewelDef {
                position: [0.0, 4.0, -12.0],
                reactivation_delay: 5.0,
            }],
            spawn_points: vec![SpawnPointDef {
                position: [0.0, 1.5, 0.0],
                facing: FacingDef::Up,
            }],
            rotate_volumes: Vec::new(),
            kill_platforms: Vec::new(),
            goal: GoalDef {
                position: [0.0, 4.0, -16.0],
                size: [3.0, 2.0, 3.0],
            },
        }
    }
}
