//! Pickups domain: plugin wiring and public exports.

mod components;
mod events;
mod resources;
mod systems;


pub use components::{JumpJewel, LevelCompleteZone, Pickup};
pub use events::{AreaCompletedEvent, PickedUpEvent};
pub use resources::{LevelGoal, Score};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::apply_jump;
use crate::pickups::systems::{
    apply_jewel_effect, check_goal_zone, collect_pickups, reactivate_jewels, touch_jewels,
};

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .init_resource::<LevelGoal>()
            .add_message::<PickedUpEvent>()
            .add_message::<AreaCompletedEvent>()
            .add_systems(
                Update,
                (
                    collect_pickups,
                    check_goal_zone,
                    touch_jewels,
                    // The coyote refresh must land before the frame's jump
                    // gate is evaluated.
                    apply_jewel_effect.before(apply_jump),
                    reactivate_jewels,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
