//! Platforms domain: tests for the crumble/regenerate machine.

use avian3d::prelude::*;

use super::{
    DisappearingPlatform, MachineAction, MachineOutput, PlatformKind, PlatformMachine,
    PlatformPhase,
};
use crate::movement::GameLayer;

fn machine(kind: PlatformKind) -> PlatformMachine {
    PlatformMachine::new(kind, 2.0)
}

// -----------------------------------------------------------------------------
// Kind table
// -----------------------------------------------------------------------------

#[test]
fn test_fall_delays_match_design_table() {
    assert_eq!(PlatformKind::InstantFall.fall_delay(), 0.0);
    assert_eq!(PlatformKind::QuickFall.fall_delay(), 1.0);
    assert_eq!(PlatformKind::NormalFall.fall_delay(), 2.0);
    assert_eq!(PlatformKind::LongFall.fall_delay(), 6.0);
}

#[test]
fn test_only_instant_kind_overrides_regen_delay() {
    assert_eq!(PlatformKind::InstantFall.regen_delay_override(), Some(60.0));
    assert_eq!(PlatformKind::QuickFall.regen_delay_override(), None);
    assert_eq!(PlatformKind::LongFall.regen_delay_override(), None);
}

// -----------------------------------------------------------------------------
// Fall countdown
// -----------------------------------------------------------------------------

#[test]
fn test_touch_starts_fall_and_vanishes_after_delay() {
    let mut m = machine(PlatformKind::QuickFall);
    assert_eq!(m.phase(), PlatformPhase::Untouched);

    m.touch();
    assert!(m.is_mid_transition());

    let out = m.advance(0.4);
    assert_eq!(out.action, None);
    let opacity = out.opacity.unwrap();
    assert!((opacity - 0.6).abs() < 1e-6);

    let out = m.advance(0.4);
    assert_eq!(out.action, None);

    // Third tick crosses the 1.0s delay.
    let out = m.advance(0.4);
    assert_eq!(out.action, Some(MachineAction::Vanish));
    assert_eq!(out.opacity, Some(0.0));
    assert_eq!(m.phase(), PlatformPhase::Disappeared);
}

#[test]
fn test_retouch_during_fall_keeps_remaining_time() {
    let mut m = machine(PlatformKind::QuickFall);

    m.touch();
    m.advance(0.7);
    // Stepping off and back on must not reset the countdown.
    m.touch_ended();
    m.touch();

    let out = m.advance(0.4);
    assert_eq!(out.action, Some(MachineAction::Vanish));
}

#[test]
fn test_untouched_platform_does_not_advance() {
    let mut m = machine(PlatformKind::NormalFall);

    let out = m.advance(10.0);
    assert_eq!(out, MachineOutput::default());
    assert_eq!(m.phase(), PlatformPhase::Untouched);
}

// -----------------------------------------------------------------------------
// Regeneration
// -----------------------------------------------------------------------------

#[test]
fn test_platform_restores_after_regen_delay() {
    let mut m = machine(PlatformKind::QuickFall);

    m.touch();
    m.advance(1.0);
    assert_eq!(m.phase(), PlatformPhase::Disappeared);

    m.advance(1.0);
    let out = m.advance(1.0);
    assert_eq!(out.action, Some(MachineAction::Restore));
    assert_eq!(out.opacity, Some(1.0));
    assert_eq!(m.phase(), PlatformPhase::Untouched);
}

#[test]
fn test_overlap_pauses_regeneration() {
    let mut m = machine(PlatformKind::QuickFall);

    m.touch();
    m.advance(1.0);

    // Player enters the vanished volume: the countdown holds.
    m.touch();
    let out = m.advance(5.0);
    assert_eq!(out.action, None);

    // Player leaves: the countdown resumes.
    m.touch_ended();
    m.advance(1.0);
    let out = m.advance(1.0);
    assert_eq!(out.action, Some(MachineAction::Restore));
}

#[test]
fn test_restored_platform_falls_again_on_touch() {
    let mut m = machine(PlatformKind::QuickFall);

    m.touch();
    m.advance(1.0);
    m.advance(2.0);
    assert_eq!(m.phase(), PlatformPhase::Untouched);

    m.touch();
    let out = m.advance(1.0);
    assert_eq!(out.action, Some(MachineAction::Vanish));
}

// -----------------------------------------------------------------------------
// Instant fall
// -----------------------------------------------------------------------------

#[test]
fn test_instant_platform_vanishes_on_touch() {
    let mut m = machine(PlatformKind::InstantFall);

    let out = m.touch();
    assert_eq!(out.action, Some(MachineAction::Vanish));
    assert_eq!(out.opacity, Some(0.0));
    assert_eq!(m.phase(), PlatformPhase::Disappeared);
}

#[test]
fn test_instant_platform_uses_long_regen() {
    let mut m = machine(PlatformKind::InstantFall);

    m.touch();
    // The configured 2.0s delay is ignored for instant platforms.
    let out = m.advance(59.0);
    assert_eq!(out.action, None);
    let out = m.advance(1.0);
    assert_eq!(out.action, Some(MachineAction::Restore));
}

// -----------------------------------------------------------------------------
// Layer swap
// -----------------------------------------------------------------------------

#[test]
fn test_unset_swap_index_falls_back_to_culled_layer() {
    let solid = CollisionLayers::new(GameLayer::Ground, LayerMask::ALL);
    let platform = DisappearingPlatform::new(PlatformKind::QuickFall, 2.0, solid, 0);

    let vanished = platform.vanished_layers();
    assert_eq!(vanished.memberships, LayerMask(GameLayer::Culled.to_bits()));
    assert_eq!(vanished.filters, LayerMask(GameLayer::Player.to_bits()));
}

#[test]
fn test_swap_index_selects_layer_bit() {
    let solid = CollisionLayers::new(GameLayer::Ground, LayerMask::ALL);
    let platform = DisappearingPlatform::new(PlatformKind::QuickFall, 2.0, solid, 7);

    assert_eq!(platform.vanished_layers().memberships, LayerMask(1 << 7));
}

// -----------------------------------------------------------------------------
// Output merging
// -----------------------------------------------------------------------------

#[test]
fn test_merge_prefers_later_values() {
    let mut first = MachineOutput {
        opacity: Some(0.5),
        action: Some(MachineAction::Vanish),
    };
    let second = MachineOutput {
        opacity: Some(1.0),
        action: None,
    };

    first.merge(second);
    assert_eq!(first.opacity, Some(1.0));
    assert_eq!(first.action, Some(MachineAction::Vanish));
}
