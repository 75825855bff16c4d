//! Movement domain: ground probe for the jump controller.

use avian3d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{GameLayer, JumpState, LandedEvent, MovementTuning, Player};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut JumpState), With<Player>>,
    mut landed_events: MessageWriter<LandedEvent>,
) {
    // Only Ground layer entities count as jumpable; vanished platforms and
    // culled occluders live on other layers and are ignored.
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let dt = time.delta_secs();

    for (transform, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Cast a short ray downward from the player's feet
        let ray_origin = transform.translation - Vec3::new(0.0, tuning.ground_probe_offset, 0.0);
        let hit = spatial_query.cast_ray(
            ray_origin,
            Dir3::NEG_Y,
            tuning.ground_probe_distance,
            true,
            &ground_filter,
        );

        state.note_ground_probe(hit.is_some(), dt, &tuning);

        if state.on_ground && !was_on_ground {
            debug!("Landed: coyote window refilled");
            landed_events.write(LandedEvent);
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground: coyote window decaying");
        }
    }
}
