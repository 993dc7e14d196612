//! Scene ownership marker.
//!
//! Every entity a scene spawns (sprites, texts, observers, timers, tweens)
//! carries [`SceneScoped`]. When the active scene changes, all of them are
//! despawned before the next scene's enter system runs, so a scene's
//! elements and input handlers exist for its lifetime only.

use bevy_ecs::prelude::Component;

/// Tag component for entities owned by the currently active scene.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct SceneScoped;
