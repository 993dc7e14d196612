//! Per-frame pointer input resource.
//!
//! The frontend writes the pointer position and whether the primary button
//! went down this frame; the pointer dispatch system consumes the press and
//! turns it into events. Tests drive the game by writing this resource.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Last known pointer position in screen pixels.
    pub position: Vector2,
    /// Whether the primary button went down this frame and has not been
    /// dispatched yet.
    pub just_pressed: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Vector2::zero(),
            just_pressed: false,
        }
    }
}

impl PointerState {
    /// Record a press at `(x, y)` to be dispatched on the next frame.
    pub fn press(&mut self, x: f32, y: f32) {
        self.position = Vector2::new(x, y);
        self.just_pressed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointerstate_default_is_idle() {
        let p = PointerState::default();
        assert!(!p.just_pressed);
        assert_eq!(p.position, Vector2::zero());
    }

    #[test]
    fn test_press_records_position() {
        let mut p = PointerState::default();
        p.press(50.0, 60.0);
        assert!(p.just_pressed);
        assert_eq!(p.position, Vector2::new(50.0, 60.0));
    }
}
