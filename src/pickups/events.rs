//! Pickups domain: messages.

use bevy::ecs::message::Message;

/// A pickup was collected.
#[derive(Debug, Clone)]
pub struct PickedUpEvent {
    pub id: String,
    pub value: u32,
}

impl Message for PickedUpEvent {}

/// Every required pickup has been collected.
#[derive(Debug, Clone, Copy)]
pub struct AreaCompletedEvent;

impl Message for AreaCompletedEvent {}
