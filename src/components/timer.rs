//! One-shot delayed call.
//!
//! A [`Timer`] accumulates frame time; once `elapsed >= duration` the
//! `update_timers` system triggers a
//! [`TimerEvent`](crate::events::timer::TimerEvent) carrying `signal` and
//! despawns the timer entity. Spawn timers with
//! [`SceneScoped`](super::scenescoped::SceneScoped) so a pending call dies
//! with the scene that scheduled it.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone)]
pub struct Timer {
    /// Seconds until the timer fires.
    pub duration: f32,
    /// Seconds accumulated so far.
    pub elapsed: f32,
    /// Name passed along in the fired event.
    pub signal: String,
}

impl Timer {
    pub fn new(duration: f32, signal: impl Into<String>) -> Self {
        Timer {
            duration,
            elapsed: 0.0,
            signal: signal.into(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
