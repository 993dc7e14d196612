//! Full-screen black overlay used for scene transitions.
//!
//! `alpha` 0 is fully transparent, 1 fully black. A fade moves `alpha`
//! linearly from wherever it currently is to the target over the requested
//! duration, so a fade-in started mid fade-out continues from the current
//! darkness. The overlay survives scene changes; that is what lets the menu
//! fade out, swap scenes and fade the new scene in.

use bevy_ecs::prelude::Resource;
use log::debug;

#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenFade {
    /// Current overlay opacity, 0..1.
    pub alpha: f32,
    from: f32,
    to: f32,
    duration: f32,
    time: f32,
}

impl ScreenFade {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start darkening the screen to black. Ignored while a fade-out is
    /// already running, so it keeps its original end time.
    pub fn fade_out(&mut self, seconds: f32) {
        if self.to == 1.0 && self.is_active() {
            debug!("Fade-out already running at alpha {:.2}", self.alpha);
            return;
        }
        self.start(1.0, seconds);
    }

    /// Start clearing the overlay.
    pub fn fade_in(&mut self, seconds: f32) {
        self.start(0.0, seconds);
    }

    fn start(&mut self, to: f32, seconds: f32) {
        self.from = self.alpha;
        self.to = to;
        self.duration = seconds.max(0.0);
        self.time = 0.0;
        if self.duration == 0.0 {
            self.alpha = to;
        }
    }

    pub fn is_active(&self) -> bool {
        self.alpha != self.to || self.time < self.duration
    }

    /// Advance the fade by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.duration <= 0.0 || self.time >= self.duration {
            self.alpha = self.to;
            return;
        }
        self.time = (self.time + dt).min(self.duration);
        let t = self.time / self.duration;
        self.alpha = self.from + (self.to - self.from) * t;
    }
}
