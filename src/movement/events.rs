//! Movement domain: events for jumping, landing, and respawn flow.

use bevy::ecs::message::Message;

/// Fired on the tick a jump impulse is applied.
#[derive(Debug)]
pub struct JumpedEvent;

impl Message for JumpedEvent {}

/// Fired on the tick the player transitions from airborne to grounded.
#[derive(Debug)]
pub struct LandedEvent;

impl Message for LandedEvent {}

/// Fired when the player must return to the active spawn point.
#[derive(Debug)]
pub struct RespawnEvent;

impl Message for RespawnEvent {}
