//! Camera domain: rig components and facing math.

use bevy::prelude::*;

/// Which side of the action the camera sits on. Spawn points and rotate
/// volumes pick one; the rig transitions between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl FacingDirection {
    /// Camera offset from the follow target for this facing.
    pub fn offset(&self, distance: f32, height: f32) -> Vec3 {
        match self {
            FacingDirection::Up => Vec3::new(0.0, height, -distance),
            FacingDirection::Down => Vec3::new(0.0, height, distance),
            FacingDirection::Left => Vec3::new(-distance, height, 0.0),
            FacingDirection::Right => Vec3::new(distance, height, 0.0),
        }
    }
}

/// Follow rig state: the current offset chases the target offset at a
/// constant speed, so facing changes sweep around the player.
#[derive(Component, Debug)]
pub struct CameraRig {
    pub facing: FacingDirection,
    pub current_offset: Vec3,
    pub target_offset: Vec3,
}

impl CameraRig {
    pub fn new(facing: FacingDirection, distance: f32, height: f32) -> Self {
        let offset = facing.offset(distance, height);
        Self {
            facing,
            current_offset: offset,
            target_offset: offset,
        }
    }

    /// Starts a transition toward the new facing.
    pub fn set_facing(&mut self, facing: FacingDirection, distance: f32, height: f32) {
        self.facing = facing;
        self.target_offset = facing.offset(distance, height);
    }

    /// Jumps straight to the new facing, cancelling any transition.
    pub fn snap_to(&mut self, facing: FacingDirection, distance: f32, height: f32) {
        self.set_facing(facing, distance, height);
        self.current_offset = self.target_offset;
    }

    pub fn advance_transition(&mut self, max_delta: f32) {
        self.current_offset = move_towards(self.current_offset, self.target_offset, max_delta);
    }

    pub fn is_transitioning(&self) -> bool {
        self.current_offset != self.target_offset
    }
}

/// Sensor volume that rotates the camera to a new facing when crossed.
#[derive(Component, Debug)]
pub struct RotateVolume {
    pub facing: FacingDirection,
}

/// Constant-speed step from one point toward another, never overshooting.
pub fn move_towards(from: Vec3, to: Vec3, max_delta: f32) -> Vec3 {
    let delta = to - from;
    let distance = delta.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        to
    } else {
        from + delta / distance * max_delta
    }
}
