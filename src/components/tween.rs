//! Tween components for animated interpolation.
//!
//! A tween is its own short-lived entity that points at the entity it
//! animates through `target`:
//! - [`TweenPosition`] – animate the target's [`ScreenPosition`](super::screenposition::ScreenPosition)
//! - [`TweenScale`] – animate the target's [`Scale`](super::scale::Scale)
//!
//! Because tweens are separate entities, several of them may drive the same
//! property at once. Nothing cancels an in-flight tween when a new one
//! starts; each runs to completion and the last one applied in a frame wins.
//! Finished tweens despawn themselves. See [`crate::systems::tween`].

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector2;

/// Determines how a tween behaves when it reaches the end.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopMode {
    /// Play once and stop.
    Once,
    /// Play forward, then backward once, then stop.
    Yoyo,
}

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

/// Playback state shared by every tween kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenClock {
    /// Duration of one leg in seconds.
    pub duration: f32,
    /// Easing function to use.
    pub easing: Easing,
    /// Behavior when a leg ends.
    pub loop_mode: LoopMode,
    /// Whether the tween is currently playing.
    pub playing: bool,
    /// Current time within the leg.
    pub time: f32,
    /// Direction of playback (true = forward).
    pub forward: bool,
}

impl TweenClock {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            easing: Easing::Linear,
            loop_mode: LoopMode::Once,
            playing: true,
            time: 0.0,
            forward: true,
        }
    }
}

/// Animates the target's position between two points.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    /// Entity whose position is written.
    pub target: Entity,
    /// Starting position.
    pub from: Vector2,
    /// Ending position.
    pub to: Vector2,
    pub clock: TweenClock,
}

impl TweenPosition {
    pub fn new(target: Entity, from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenPosition {
            target,
            from,
            to,
            clock: TweenClock::new(duration),
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.clock.easing = easing;
        self
    }
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.clock.loop_mode = loop_mode;
        self
    }
}

/// Animates the target's scale between two values.
#[derive(Component, Clone, Debug)]
pub struct TweenScale {
    /// Entity whose scale is written.
    pub target: Entity,
    /// Starting scale.
    pub from: Vector2,
    /// Ending scale.
    pub to: Vector2,
    pub clock: TweenClock,
}

impl TweenScale {
    pub fn new(target: Entity, from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenScale {
            target,
            from,
            to,
            clock: TweenClock::new(duration),
        }
    }
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.clock.easing = easing;
        self
    }
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.clock.loop_mode = loop_mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== TWEEN POSITION TESTS ====================

    #[test]
    fn test_tween_position_new() {
        let target = Entity::PLACEHOLDER;
        let from = Vector2::new(-500.0, 360.0);
        let to = Vector2::new(300.0, 360.0);
        let tw = TweenPosition::new(target, from, to, 0.3);

        assert_eq!(tw.target, target);
        assert_eq!(tw.from, from);
        assert_eq!(tw.to, to);
        assert_eq!(tw.clock.duration, 0.3);
        assert_eq!(tw.clock.easing, Easing::Linear);
        assert_eq!(tw.clock.loop_mode, LoopMode::Once);
        assert!(tw.clock.playing);
        assert_eq!(tw.clock.time, 0.0);
        assert!(tw.clock.forward);
    }

    #[test]
    fn test_tween_position_builder_chaining() {
        let tw = TweenPosition::new(Entity::PLACEHOLDER, Vector2::zero(), Vector2::new(1.0, 1.0), 1.0)
            .with_easing(Easing::CubicOut)
            .with_loop_mode(LoopMode::Yoyo);

        assert_eq!(tw.clock.easing, Easing::CubicOut);
        assert_eq!(tw.clock.loop_mode, LoopMode::Yoyo);
    }

    // ==================== TWEEN SCALE TESTS ====================

    #[test]
    fn test_tween_scale_pulse_configuration() {
        let tw = TweenScale::new(
            Entity::PLACEHOLDER,
            Vector2::new(0.3, 0.3),
            Vector2::new(0.36, 0.36),
            0.1,
        )
            .with_easing(Easing::CubicInOut)
            .with_loop_mode(LoopMode::Yoyo);

        assert_eq!(tw.to, Vector2::new(0.36, 0.36));
        assert_eq!(tw.clock.easing, Easing::CubicInOut);
        assert_eq!(tw.clock.loop_mode, LoopMode::Yoyo);
        assert!(tw.clock.forward);
    }
}
