use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::scale::Scale;

/// Sprite is identified by a texture key and its unscaled size in pixels.
/// The origin is normalized (0..1 on each axis) and selects which point of
/// the image sits on the entity's [`ScreenPosition`]; the default is the
/// image center.
///
/// [`ScreenPosition`]: super::screenposition::ScreenPosition
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
}

impl Sprite {
    /// Centered sprite of the given texture size.
    pub fn new(tex_key: impl Into<String>, size: Vector2) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: size.x,
            height: size.y,
            origin: Vector2 { x: 0.5, y: 0.5 },
        }
    }

    pub fn size(&self) -> Vector2 {
        Vector2::new(self.width, self.height)
    }

    /// On-screen rectangle covered by this sprite at `pos` with an optional scale.
    pub fn bounds(&self, pos: Vector2, scale: Option<&Scale>) -> Rectangle {
        let (sx, sy) = scale.map_or((1.0, 1.0), |s| (s.scale.x, s.scale.y));
        let width = self.width * sx;
        let height = self.height * sy;
        Rectangle {
            x: pos.x - width * self.origin.x,
            y: pos.y - height * self.origin.y,
            width,
            height,
        }
    }
}
