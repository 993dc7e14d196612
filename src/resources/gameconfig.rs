//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 60
//! fullscreen = false
//!
//! [audio]
//! music_volume = 0.5
//!
//! [assets]
//! dir = ./assets
//! manifest =
//! ```
//!
//! An empty `manifest` means the built-in asset table is used.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_MUSIC_VOLUME: f32 = 0.5;
const DEFAULT_ASSETS_DIR: &str = "./assets";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Volume of the looping menu music, 0..1.
    pub music_volume: f32,
    /// Directory asset paths are relative to.
    pub assets_dir: PathBuf,
    /// Optional JSON asset manifest replacing the built-in one.
    pub manifest_path: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            fullscreen: DEFAULT_FULLSCREEN,
            music_volume: DEFAULT_MUSIC_VOLUME,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            manifest_path: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [audio] section
        if let Some(vol) = config.getfloat("audio", "music_volume").ok().flatten() {
            self.music_volume = (vol as f32).clamp(0.0, 1.0);
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir").filter(|d| !d.is_empty()) {
            self.assets_dir = PathBuf::from(dir);
        }
        if let Some(manifest) = config.get("assets", "manifest") {
            self.manifest_path = (!manifest.is_empty()).then(|| PathBuf::from(manifest));
        }

        info!(
            "Loaded config: {}x{} window, fps={}, fullscreen={}, music_volume={}, assets={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.fullscreen,
            self.music_volume,
            self.assets_dir
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        // [audio] section
        config.set("audio", "music_volume", Some(self.music_volume.to_string()));

        // [assets] section
        config.set(
            "assets",
            "dir",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );
        config.set(
            "assets",
            "manifest",
            Some(
                self.manifest_path
                    .as_ref()
                    .map(|p| p.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            ),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the initial window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1280, 720));
        assert_eq!(config.target_fps, 60);
        assert!(!config.fullscreen);
        assert_eq!(config.music_volume, 0.5);
        assert_eq!(config.manifest_path, None);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\nwidth = 800\n\n[audio]\nmusic_volume = 0.25\n")
            .unwrap();
        assert_eq!(config.window_size(), (800, 720));
        assert_eq!(config.music_volume, 0.25);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_music_volume_is_clamped() {
        let mut config = GameConfig::new();
        config.load_from_str("[audio]\nmusic_volume = 3.0\n").unwrap();
        assert_eq!(config.music_volume, 1.0);
    }

    #[test]
    fn test_empty_manifest_means_builtin() {
        let mut config = GameConfig::new();
        config.load_from_str("[assets]\nmanifest =\n").unwrap();
        assert_eq!(config.manifest_path, None);
        config
            .load_from_str("[assets]\nmanifest = assets/manifest.json\n")
            .unwrap();
        assert_eq!(config.manifest_path, Some(PathBuf::from("assets/manifest.json")));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./definitely/not/here.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (1280, 720));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "pillowclicker-config-{}.ini",
            std::process::id()
        ));
        let mut saved = GameConfig::with_path(&path);
        saved.window_width = 1024;
        saved.fullscreen = true;
        saved.music_volume = 0.75;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, saved);
    }
}
