//! Camera domain: messages.

use bevy::ecs::message::Message;

use crate::camera::FacingDirection;

/// The camera should rotate to a new facing.
#[derive(Debug, Clone, Copy)]
pub struct FacingChangedEvent {
    pub facing: FacingDirection,
}

impl Message for FacingChangedEvent {}
