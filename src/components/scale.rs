use bevy_ecs::prelude::Component;

use raylib::prelude::Vector2;

/// Display scale applied to a [`Sprite`](super::sprite::Sprite) around its origin.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Scale {
    pub scale: Vector2,
}

impl Scale {
    pub fn new(sx: f32, sy: f32) -> Self {
        Self {
            scale: Vector2 { x: sx, y: sy },
        }
    }

    pub fn uniform(s: f32) -> Self {
        Self::new(s, s)
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}
