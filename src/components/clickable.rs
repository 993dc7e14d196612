//! Pointer hit-testing marker.
//!
//! An entity with [`Clickable`], a [`Sprite`](super::sprite::Sprite) and a
//! [`ScreenPosition`](super::screenposition::ScreenPosition) receives a
//! [`ClickEvent`](crate::events::input::ClickEvent) whenever a pointer press
//! lands inside its scaled sprite bounds.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Clickable;
