use bevy_ecs::prelude::Resource;
use raylib::prelude::Color;

/// Color the frame is cleared to before anything is drawn. Each scene sets
/// its own on enter.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ClearColor(pub Color);

impl Default for ClearColor {
    fn default() -> Self {
        ClearColor(Color::BLACK)
    }
}
