use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

#[derive(Component, Clone, Debug, PartialEq)]
/// Text drawn with raylib's default font at the entity's screen position.
pub struct DynamicText {
    /// The text content to render. May span several lines.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f32,
    /// Color of the text.
    pub color: Color,
    /// Normalized anchor; `(0, 0)` is top-left, `(0.5, 0.5)` centers the text block.
    pub origin: Vector2,
}

impl DynamicText {
    /// Creates a new top-left anchored DynamicText component.
    pub fn new(content: impl Into<String>, font_size: f32, color: Color) -> Self {
        Self {
            content: content.into(),
            font_size,
            color,
            origin: Vector2::zero(),
        }
    }

    pub fn with_origin(mut self, origin: Vector2) -> Self {
        self.origin = origin;
        self
    }

    /// Updates the text content.
    pub fn set_content(&mut self, new_content: impl Into<String>) {
        self.content = new_content.into();
    }
}
