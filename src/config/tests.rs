//! Config domain: tests for parsing and validation fix-ups.

use super::{LevelDef, PlatformKindDef, parse_level, validate_level};

const SAMPLE_LEVEL: &str = r#"
(
    name: "Sample",
    floor_y: 0.0,
    platforms: [
        (
            kind: QuickFall,
            position: (0.0, 1.0, -4.0),
            size: (2.0, 0.4, 2.0),
            regen_delay: 2.0,
        ),
        (
            kind: InstantFall,
            position: (0.0, 2.0, -8.0),
            size: (2.0, 0.4, 2.0),
            regen_delay: 2.0,
            layer_swap_index: 7,
            spin: 90.0,
        ),
    ],
    pickups: [
        (id: "star_a", position: (0.0, 2.0, -4.0), value: 1),
    ],
    spawn_points: [
        (position: (0.0, 1.5, 0.0), facing: Up),
    ],
    goal: (position: (0.0, 4.0, -16.0), size: (3.0, 2.0, 3.0)),
)
"#;

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_sample_level() {
    let level = parse_level(SAMPLE_LEVEL).unwrap();

    assert_eq!(level.name, "Sample");
    assert_eq!(level.platforms.len(), 2);
    assert_eq!(level.platforms[0].kind, PlatformKindDef::QuickFall);
    assert_eq!(level.platforms[0].layer_swap_index, 0);
    assert_eq!(level.platforms[1].layer_swap_index, 7);
    // IMPLICIT_SOME lets the spin field be written without Some(..).
    assert_eq!(level.platforms[1].spin, Some(90.0));
    assert!(level.jewels.is_empty());
    assert!(level.rotate_volumes.is_empty());
}

#[test]
fn test_parse_rejects_malformed_source() {
    assert!(parse_level("(name: 3)").is_err());
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_default_level_is_clean() {
    let mut level = LevelDef::default();
    assert!(validate_level(&mut level).is_empty());
}

#[test]
fn test_out_of_range_swap_index_resets_to_zero() {
    let mut level = LevelDef::default();
    level.platforms[0].layer_swap_index = 40;

    let findings = validate_level(&mut level);
    assert_eq!(findings.len(), 1);
    assert_eq!(level.platforms[0].layer_swap_index, 0);
}

#[test]
fn test_negative_delays_are_clamped() {
    let mut level = LevelDef::default();
    level.platforms[0].regen_delay = -1.0;
    level.jewels[0].reactivation_delay = -2.0;

    let findings = validate_level(&mut level);
    assert_eq!(findings.len(), 2);
    assert_eq!(level.platforms[0].regen_delay, 0.0);
    assert_eq!(level.jewels[0].reactivation_delay, 0.0);
}

#[test]
fn test_missing_spawn_points_get_default() {
    let mut level = LevelDef::default();
    level.spawn_points.clear();

    let findings = validate_level(&mut level);
    assert_eq!(findings.len(), 1);
    assert_eq!(level.spawn_points.len(), 1);
}

#[test]
fn test_duplicate_pickup_ids_are_dropped() {
    let mut level = LevelDef::default();
    let duplicate = level.pickups[0].clone();
    level.pickups.push(duplicate);

    let findings = validate_level(&mut level);
    assert_eq!(findings.len(), 1);
    assert_eq!(level.pickups.len(), 2);
}
