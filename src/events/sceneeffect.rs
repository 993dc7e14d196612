//! Side effects requested by scene reducers.
//!
//! Scene reducers are pure: they take their scene state and an action and
//! return the new state plus a list of [`SceneEffect`]s. Observers write the
//! effects as messages and
//! [`apply_scene_effects`](crate::systems::sceneeffect::apply_scene_effects)
//! performs them later in the same frame, in the order they were written.

use bevy_ecs::message::Message;

use crate::scenes::pillow::PanelState;

#[derive(Message, Debug, Clone, PartialEq)]
pub enum SceneEffect {
    /// Leave the active scene for its successor.
    AdvanceScene,
    /// Fade the screen to black over `seconds`.
    FadeOut { seconds: f32 },
    /// Fade the screen from black back to the scene over `seconds`.
    FadeIn { seconds: f32 },
    /// Fire a [`TimerEvent`](crate::events::timer::TimerEvent) with `signal`
    /// after `seconds`. The timer belongs to the active scene.
    Schedule { seconds: f32, signal: String },
    /// Play a one-shot sound effect.
    PlayFx { id: String },
    /// Replace the pillow scene's counter label.
    SetCounterText(String),
    /// Snap the pillow back to its original scale.
    ResetPillowScale,
    /// Start a yoyo scale pulse on the pillow.
    PulsePillow,
    /// Slide the side panel towards the position of the given state.
    SlidePanel(PanelState),
}
