//! Camera domain: tests for facing math, transitions, and cull bookkeeping.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::occlusion::{CulledOccluders, OccluderHit, step_occlusion};
use super::{CameraRig, FacingDirection, move_towards};
use crate::movement::GameLayer;

fn entity(index: u64) -> Entity {
    Entity::from_bits((1 << 32) | index)
}

fn solid_layers() -> CollisionLayers {
    CollisionLayers::new(GameLayer::Wall, LayerMask::ALL)
}

// -----------------------------------------------------------------------------
// Facing offsets
// -----------------------------------------------------------------------------

#[test]
fn test_facing_offsets() {
    let d = 5.0;
    let h = 8.5;
    assert_eq!(FacingDirection::Up.offset(d, h), Vec3::new(0.0, h, -d));
    assert_eq!(FacingDirection::Down.offset(d, h), Vec3::new(0.0, h, d));
    assert_eq!(FacingDirection::Left.offset(d, h), Vec3::new(-d, h, 0.0));
    assert_eq!(FacingDirection::Right.offset(d, h), Vec3::new(d, h, 0.0));
}

// -----------------------------------------------------------------------------
// Transitions
// -----------------------------------------------------------------------------

#[test]
fn test_move_towards_never_overshoots() {
    let from = Vec3::ZERO;
    let to = Vec3::new(10.0, 0.0, 0.0);

    let step = move_towards(from, to, 3.0);
    assert_eq!(step, Vec3::new(3.0, 0.0, 0.0));

    let arrived = move_towards(Vec3::new(9.5, 0.0, 0.0), to, 3.0);
    assert_eq!(arrived, to);
}

#[test]
fn test_transition_converges_on_target_offset() {
    let mut rig = CameraRig::new(FacingDirection::Up, 5.0, 8.5);
    rig.set_facing(FacingDirection::Right, 5.0, 8.5);
    assert!(rig.is_transitioning());

    for _ in 0..100 {
        rig.advance_transition(0.5);
    }

    assert!(!rig.is_transitioning());
    assert_eq!(rig.current_offset, FacingDirection::Right.offset(5.0, 8.5));
}

#[test]
fn test_snap_cancels_transition() {
    let mut rig = CameraRig::new(FacingDirection::Up, 5.0, 8.5);
    rig.set_facing(FacingDirection::Left, 5.0, 8.5);
    rig.advance_transition(0.1);
    assert!(rig.is_transitioning());

    rig.snap_to(FacingDirection::Down, 5.0, 8.5);
    assert!(!rig.is_transitioning());
    assert_eq!(rig.current_offset, FacingDirection::Down.offset(5.0, 8.5));
}

// -----------------------------------------------------------------------------
// Cull bookkeeping
// -----------------------------------------------------------------------------

#[test]
fn test_track_is_idempotent_per_entity() {
    let mut culled = CulledOccluders::default();

    assert!(culled.track(entity(1), solid_layers(), 2.0));
    assert!(!culled.track(entity(1), solid_layers(), 2.0));
    assert_eq!(culled.len(), 1);
}

#[test]
fn test_evict_unaligned_keeps_matching_x() {
    let mut culled = CulledOccluders::default();
    culled.track(entity(1), solid_layers(), 2.0);
    culled.track(entity(2), solid_layers(), 6.0);

    let evicted = culled.evict_unaligned(2.05);
    assert_eq!(evicted.len(), 1);
    assert_eq!(evicted[0].0, entity(2));
    assert!(culled.contains(entity(1)));
    assert!(!culled.contains(entity(2)));
}

#[test]
fn test_drain_restores_everything_at_once() {
    let mut culled = CulledOccluders::default();
    culled.track(entity(1), solid_layers(), 2.0);
    culled.track(entity(2), solid_layers(), 2.0);
    culled.track(entity(3), solid_layers(), 2.0);

    let restored = culled.drain();
    assert_eq!(restored.len(), 3);
    assert!(culled.is_empty());
}

// -----------------------------------------------------------------------------
// Per-tick cull/restore sequencing
// -----------------------------------------------------------------------------

fn wall_hit(index: u64, x: f32) -> OccluderHit {
    OccluderHit {
        entity: entity(index),
        x,
        layers: solid_layers(),
    }
}

#[test]
fn test_blocked_tick_culls_without_consulting_restore_probe() {
    let mut culled = CulledOccluders::default();

    // On the tick a wall is culled its layer rewrite has not landed yet, so
    // the culled-mask ray would report clear. That must not restore it.
    let tick = step_occlusion(&mut culled, Some(wall_hit(1, 2.0)), || false);

    assert_eq!(tick.cull, Some(entity(1)));
    assert!(tick.restore.is_empty());
    assert!(culled.contains(entity(1)));
}

#[test]
fn test_culled_wall_stays_hidden_while_probe_blocked() {
    let mut culled = CulledOccluders::default();
    step_occlusion(&mut culled, Some(wall_hit(1, 2.0)), || false);

    // Next tick the solid ray passes through the culled wall, but the
    // culled-mask ray still hits it.
    let tick = step_occlusion(&mut culled, None, || true);

    assert_eq!(tick.cull, None);
    assert!(tick.restore.is_empty());
    assert!(culled.contains(entity(1)));
}

#[test]
fn test_clear_line_restores_whole_set() {
    let mut culled = CulledOccluders::default();
    step_occlusion(&mut culled, Some(wall_hit(1, 2.0)), || false);
    step_occlusion(&mut culled, Some(wall_hit(2, 2.05)), || false);

    let tick = step_occlusion(&mut culled, None, || false);

    assert_eq!(tick.restore.len(), 2);
    assert!(culled.is_empty());
}

#[test]
fn test_strafing_along_same_wall_does_not_evict_it() {
    let mut culled = CulledOccluders::default();
    step_occlusion(&mut culled, Some(wall_hit(1, 2.0)), || false);

    // Alignment compares the occluder's own position, which does not move
    // with the player, so repeated hits on the same wall keep it tracked.
    for _ in 0..10 {
        let tick = step_occlusion(&mut culled, Some(wall_hit(1, 2.0)), || false);
        assert_eq!(tick.cull, None);
        assert!(tick.restore.is_empty());
    }
    assert_eq!(culled.len(), 1);
}

#[test]
fn test_new_wall_evicts_unaligned_and_culls() {
    let mut culled = CulledOccluders::default();
    step_occlusion(&mut culled, Some(wall_hit(1, 2.0)), || false);

    let tick = step_occlusion(&mut culled, Some(wall_hit(2, 6.0)), || false);

    assert_eq!(tick.cull, Some(entity(2)));
    assert_eq!(tick.restore.len(), 1);
    assert_eq!(tick.restore[0].0, entity(1));
    assert!(!culled.contains(entity(1)));
    assert!(culled.contains(entity(2)));
}
