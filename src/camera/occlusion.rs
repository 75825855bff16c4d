//! Camera domain: occlusion culling between the camera and its target.
//!
//! Geometry that blocks the line of sight is hidden and moved to the culled
//! physics layer; a second ray against that layer decides when everything
//! comes back. Restoration is all-or-nothing, matching the feel of the
//! original behavior: one clear frame restores the whole set.

use avian3d::prelude::*;
use bevy::prelude::*;
use std::collections::HashMap;

use crate::camera::CameraTuning;
use crate::camera::components::CameraRig;
use crate::movement::{GameLayer, Player};

/// Occluders at a meaningfully different lateral position belong to a
/// different wall and are restored before the new one is tracked.
const X_ALIGN_EPSILON: f32 = 0.1;

/// Bookkeeping for occluders currently hidden, keyed by entity with their
/// original collision layers and the occluder's own lateral position.
#[derive(Resource, Default)]
pub struct CulledOccluders {
    entries: HashMap<Entity, (CollisionLayers, f32)>,
}

impl CulledOccluders {
    /// Records an occluder. Returns false if it was already tracked.
    pub fn track(&mut self, entity: Entity, layers: CollisionLayers, occluder_x: f32) -> bool {
        self.entries.insert(entity, (layers, occluder_x)).is_none()
    }

    /// Removes and returns entries whose position does not line up with the
    /// newly hit occluder.
    pub fn evict_unaligned(&mut self, occluder_x: f32) -> Vec<(Entity, CollisionLayers)> {
        let unaligned: Vec<Entity> = self
            .entries
            .iter()
            .filter(|(_, (_, x))| (x - occluder_x).abs() > X_ALIGN_EPSILON)
            .map(|(entity, _)| *entity)
            .collect();
        unaligned
            .into_iter()
            .filter_map(|entity| {
                self.entries
                    .remove(&entity)
                    .map(|(layers, _)| (entity, layers))
            })
            .collect()
    }

    /// Removes and returns every tracked entry.
    pub fn drain(&mut self) -> Vec<(Entity, CollisionLayers)> {
        self.entries
            .drain()
            .map(|(entity, (layers, _))| (entity, layers))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.entries.contains_key(&entity)
    }
}

/// A solid occluder the camera ray struck above the floor threshold this
/// tick, with its own lateral position and pre-cull collision layers.
pub(crate) struct OccluderHit {
    pub entity: Entity,
    pub x: f32,
    pub layers: CollisionLayers,
}

/// What one occlusion tick decided: at most one fresh cull, plus any
/// entries to restore.
#[derive(Default)]
pub(crate) struct OcclusionTick {
    pub cull: Option<Entity>,
    pub restore: Vec<(Entity, CollisionLayers)>,
}

/// Folds one tick's ray results into the tracked set.
///
/// The restore probe is only consulted on ticks where the solid-occluder
/// ray came back clear: layer rewrites land through deferred commands, so
/// on the tick an occluder is culled the culled-mask ray cannot see it yet
/// and would immediately restore it.
pub(crate) fn step_occlusion(
    culled: &mut CulledOccluders,
    occluder_hit: Option<OccluderHit>,
    culled_ray_blocked: impl FnOnce() -> bool,
) -> OcclusionTick {
    let mut tick = OcclusionTick::default();

    if let Some(hit) = occluder_hit {
        tick.restore = culled.evict_unaligned(hit.x);
        if culled.track(hit.entity, hit.layers, hit.x) {
            tick.cull = Some(hit.entity);
        }
        return tick;
    }

    if !culled.is_empty() && !culled_ray_blocked() {
        tick.restore = culled.drain();
    }
    tick
}

/// Casts camera→target rays each late tick, culling fresh occluders and
/// restoring the whole set once the culled mask reports a clear line.
pub(crate) fn check_occluders(
    mut commands: Commands,
    spatial_query: SpatialQuery,
    tuning: Res<CameraTuning>,
    mut culled: ResMut<CulledOccluders>,
    camera_query: Query<&GlobalTransform, With<CameraRig>>,
    player_query: Query<&GlobalTransform, (With<Player>, Without<CameraRig>)>,
    occluder_query: Query<(&GlobalTransform, Option<&CollisionLayers>)>,
) {
    let (Ok(camera_transform), Ok(player_transform)) =
        (camera_query.single(), player_query.single())
    else {
        return;
    };

    let origin = camera_transform.translation();
    let target = player_transform.translation();
    let Ok(direction) = Dir3::new(target - origin) else {
        return;
    };
    let distance = (target - origin).length();

    let occluder_filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]);
    let occluder_hit = spatial_query
        .cast_ray(origin, direction, distance, true, &occluder_filter)
        .and_then(|hit| {
            let point = origin + *direction * hit.distance;
            if point.y <= tuning.floor_y {
                return None;
            }
            let (occluder_transform, layers) = occluder_query.get(hit.entity).ok()?;
            Some(OccluderHit {
                entity: hit.entity,
                x: occluder_transform.translation().x,
                layers: layers
                    .copied()
                    .unwrap_or(CollisionLayers::new(GameLayer::Default, LayerMask::ALL)),
            })
        });

    let tick = step_occlusion(&mut culled, occluder_hit, || {
        let culled_filter = SpatialQueryFilter::from_mask(GameLayer::Culled);
        spatial_query
            .cast_ray(origin, direction, distance, true, &culled_filter)
            .is_some()
    });

    if let Some(entity) = tick.cull {
        debug!("Culling occluder {entity}");
        commands.entity(entity).insert((
            Visibility::Hidden,
            CollisionLayers::new(GameLayer::Culled, LayerMask::ALL),
        ));
    }

    if !tick.restore.is_empty() {
        debug!("Restoring {} culled occluders", tick.restore.len());
        restore_occluders(&mut commands, tick.restore);
    }
}

fn restore_occluders(commands: &mut Commands, entries: Vec<(Entity, CollisionLayers)>) {
    for (entity, layers) in entries {
        match commands.get_entity(entity) {
            Ok(mut entity_commands) => {
                entity_commands.insert((Visibility::Inherited, layers));
            }
            Err(_) => {
                warn!("Culled occluder {entity} despawned before restore");
            }
        }
    }
}
