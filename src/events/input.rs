//! Pointer input events.
//!
//! The pointer dispatch system turns a press recorded in
//! [`PointerState`](crate::resources::input::PointerState) into, in order:
//! one [`ClickEvent`] per [`Clickable`](crate::components::clickable::Clickable)
//! entity under the pointer, then one scene-wide [`PointerDownEvent`].
//! Scenes subscribe with observers they spawn as scene-scoped entities.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

/// A pointer press anywhere on screen.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerDownEvent {
    /// Press position in screen pixels.
    pub pos: Vector2,
}

/// A pointer press that landed on a clickable entity.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ClickEvent {
    /// The entity that was hit.
    pub entity: Entity,
    /// Press position in screen pixels.
    pub pos: Vector2,
}
