//! Pixel size of every loaded image.
//!
//! Scenes need image sizes for layout (the splash background is stretched to
//! the screen, the side panel slides by its own width) but must not depend on
//! the GPU. The frontend fills this table after uploading each texture;
//! headless runs insert sizes directly.

use bevy_ecs::prelude::Resource;
use log::warn;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

#[derive(Resource, Debug, Default, Clone)]
pub struct ImageSizes {
    pub map: FxHashMap<String, Vector2>,
}

impl ImageSizes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, size: Vector2) {
        self.map.insert(id.into(), size);
    }

    /// Size of `id`, or zero when the image never loaded.
    pub fn size_of(&self, id: &str) -> Vector2 {
        match self.map.get(id) {
            Some(size) => *size,
            None => {
                warn!("Image '{}' has no known size", id);
                Vector2::zero()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_image_has_zero_size() {
        let mut sizes = ImageSizes::new();
        sizes.insert("menu", Vector2::new(800.0, 600.0));
        assert_eq!(sizes.size_of("menu"), Vector2::new(800.0, 600.0));
        assert_eq!(sizes.size_of("nope"), Vector2::zero());
    }
}
