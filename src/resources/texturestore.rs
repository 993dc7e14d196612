use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// GPU textures keyed by manifest image id. An id that failed to load is
/// simply absent and its sprites are not drawn.
#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.map.insert(id.into(), texture);
    }

    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(id.as_ref())
    }
}
