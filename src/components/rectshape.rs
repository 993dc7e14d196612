use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Rectangle, Vector2};

/// Solid filled rectangle centered on the entity's
/// [`ScreenPosition`](super::screenposition::ScreenPosition).
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct RectShape {
    pub size: Vector2,
    pub color: Color,
}

impl RectShape {
    pub fn new(width: f32, height: f32, color: Color) -> Self {
        Self {
            size: Vector2::new(width, height),
            color,
        }
    }

    /// Screen rectangle covered when centered on `pos`.
    pub fn bounds(&self, pos: Vector2) -> Rectangle {
        Rectangle {
            x: pos.x - self.size.x * 0.5,
            y: pos.y - self.size.y * 0.5,
            width: self.size.x,
            height: self.size.y,
        }
    }
}
