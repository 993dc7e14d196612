//! Scene state machine resources.
//!
//! [`ActiveScene`] holds the authoritative current scene and [`NextScene`]
//! any transition requested by systems. See
//! `crate::events::scene::observe_scene_change_event` for how a transition
//! is applied.

use bevy_ecs::prelude::Resource;

/// The presentation units of the game, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scenes {
    /// Nothing entered yet.
    #[default]
    None,
    /// Studio splash screen.
    Splash,
    /// Title menu with the start button.
    Menu,
    /// The pillow clicking screen.
    Pillow,
}

impl Scenes {
    /// The scene that follows this one in the linear flow.
    ///
    /// The pillow scene is the last one and has no successor.
    pub fn successor(self) -> Option<Scenes> {
        match self {
            Scenes::None => Some(Scenes::Splash),
            Scenes::Splash => Some(Scenes::Menu),
            Scenes::Menu => Some(Scenes::Pillow),
            Scenes::Pillow => None,
        }
    }

    /// [`SystemsStore`](super::systemsstore::SystemsStore) key of the
    /// system that builds this scene.
    pub fn enter_system_key(self) -> Option<&'static str> {
        match self {
            Scenes::None => None,
            Scenes::Splash => Some("enter_splash"),
            Scenes::Menu => Some("enter_menu"),
            Scenes::Pillow => Some("enter_pillow"),
        }
    }
}

/// Representation of a requested next scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextScenes {
    #[default]
    Unchanged,
    Pending(Scenes),
}

/// Authoritative current scene.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveScene {
    current: Scenes,
}

impl ActiveScene {
    pub fn new() -> Self {
        Self::default()
    }
    /// Read-only access to the current scene.
    pub fn get(&self) -> Scenes {
        self.current
    }
    /// Update the current scene immediately.
    ///
    /// Prefer [`NextScene`] so that teardown and enter hooks run.
    pub fn set(&mut self, scene: Scenes) {
        self.current = scene;
    }
}

/// Intent to change to a new scene.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NextScene {
    next: NextScenes,
}

impl NextScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &NextScenes {
        &self.next
    }

    /// Request a transition to `next`. The last request in a frame wins.
    pub fn set(&mut self, next: Scenes) {
        self.next = NextScenes::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextScenes::Unchanged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_is_linear() {
        assert_eq!(Scenes::None.successor(), Some(Scenes::Splash));
        assert_eq!(Scenes::Splash.successor(), Some(Scenes::Menu));
        assert_eq!(Scenes::Menu.successor(), Some(Scenes::Pillow));
        assert_eq!(Scenes::Pillow.successor(), None);
    }

    #[test]
    fn every_playable_scene_has_an_enter_system() {
        for scene in [Scenes::Splash, Scenes::Menu, Scenes::Pillow] {
            assert!(scene.enter_system_key().is_some());
        }
        assert_eq!(Scenes::None.enter_system_key(), None);
    }

    #[test]
    fn next_scene_set_and_reset() {
        let mut next = NextScene::new();
        assert_eq!(*next.get(), NextScenes::Unchanged);
        next.set(Scenes::Menu);
        next.set(Scenes::Pillow);
        assert_eq!(*next.get(), NextScenes::Pending(Scenes::Pillow));
        next.reset();
        assert_eq!(*next.get(), NextScenes::Unchanged);
    }
}
