use crate::events::scene::SceneChangedEvent;
use crate::resources::scene::{NextScene, NextScenes};
use bevy_ecs::prelude::*;

/// Trigger the scene transition observer when a change is pending.
pub fn check_pending_scene(mut commands: Commands, next_scene: Res<NextScene>) {
    if let NextScenes::Pending(_) = next_scene.get() {
        commands.trigger(SceneChangedEvent {});
    }
}
