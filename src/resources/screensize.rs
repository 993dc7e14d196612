//! Screen size resource.
//!
//! Stores the current window dimensions in pixels. The frontend refreshes it
//! every frame, so it follows window resizes; scenes read it when they are
//! entered to lay out their elements.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.w as f32, self.h as f32)
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.w as f32 * 0.5, self.h as f32 * 0.5)
    }
}
