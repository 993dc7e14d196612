//! Screen-space position component.
//!
//! Every visual element of a scene lives in window pixels: there is no
//! camera, so [`ScreenPosition`] is the only position an entity carries.
//! The anchor of the element (which point of it sits at the position) is
//! decided by the drawable component, e.g. [`Sprite::origin`].
//!
//! [`Sprite::origin`]: super::sprite::Sprite::origin

use bevy_ecs::prelude::Component;

use raylib::prelude::Vector2;

/// Screen-space position (pivot) for an entity, in pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ScreenPosition {
    pub pos: Vector2,
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
