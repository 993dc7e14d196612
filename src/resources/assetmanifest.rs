//! Asset manifest: which file backs each image and sound id.
//!
//! Scenes only ever refer to assets by id. The manifest maps those ids to
//! paths relative to the configured assets directory. The built-in table
//! covers every asset the game uses; a JSON file can replace it:
//!
//! ```json
//! {
//!   "images": [{ "id": "background", "path": "bckgrn.png" }],
//!   "music":  [{ "id": "backgroundMusic", "path": "gameMusic.mp3" }],
//!   "fx":     [{ "id": "pillowSound", "path": "pillow.mp3" }]
//! }
//! ```

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One id → relative path pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub id: String,
    pub path: String,
}

impl AssetEntry {
    fn new(id: &str, path: &str) -> Self {
        Self {
            id: id.to_string(),
            path: path.to_string(),
        }
    }
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AssetManifest {
    #[serde(default)]
    pub images: Vec<AssetEntry>,
    #[serde(default)]
    pub music: Vec<AssetEntry>,
    #[serde(default)]
    pub fx: Vec<AssetEntry>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            images: vec![
                AssetEntry::new("background", "bckgrn.png"),
                AssetEntry::new("startButton", "start.png"),
                AssetEntry::new("logoPNG", "logo.png"),
                AssetEntry::new("pillowImage", "pillow.png"),
                AssetEntry::new("menu", "menu.png"),
            ],
            music: vec![AssetEntry::new("backgroundMusic", "gameMusic.mp3")],
            fx: vec![AssetEntry::new("pillowSound", "pillow.mp3")],
        }
    }
}

impl AssetManifest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a manifest from a JSON file at the specified path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        let manifest = Self::from_json(&file_content)?;
        Ok(manifest)
    }

    /// Full path of an entry below `assets_dir`.
    pub fn resolve(assets_dir: &Path, entry: &AssetEntry) -> PathBuf {
        assets_dir.join(&entry.path)
    }
}
