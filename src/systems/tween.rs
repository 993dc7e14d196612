//! Tween animation systems.
//!
//! Tweens are their own entities pointing at the entity they animate:
//! - [`tween_position_system`] – animates [`ScreenPosition`](crate::components::screenposition::ScreenPosition)
//! - [`tween_scale_system`] – animates [`Scale`](crate::components::scale::Scale)
//!
//! Each tween specifies start/end values, duration, easing function and loop
//! mode. The systems read delta time from
//! [`WorldTime`](crate::resources::worldtime::WorldTime), write the
//! interpolated value to the target and despawn the tween once it stops
//! playing or its target is gone.

use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::tween::{Easing, LoopMode, TweenClock, TweenPosition, TweenScale};
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::Vector2;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        }
    }
}

/// Linearly interpolate between two 2D vectors.
pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Advance tween time and handle looping/completion.
pub(crate) fn advance(clock: &mut TweenClock, dt: f32) {
    let duration = clock.duration;
    let dir = if clock.forward { 1.0 } else { -1.0 };
    clock.time += dt * dir;

    let finished_forward = clock.forward && clock.time >= duration;
    let finished_backward = !clock.forward && clock.time <= 0.0;

    if finished_forward || finished_backward {
        match clock.loop_mode {
            LoopMode::Once => {
                clock.playing = false;
                clock.time = clock.time.clamp(0.0, duration);
            }
            LoopMode::Yoyo => {
                if finished_forward {
                    // Carry the overshoot into the return leg.
                    clock.time = (2.0 * duration - clock.time).clamp(0.0, duration);
                    clock.forward = false;
                    if clock.time <= 0.0 {
                        clock.playing = false;
                    }
                } else {
                    clock.time = 0.0;
                    clock.playing = false;
                }
            }
        }
    }
}

/// Eased progress of a clock, 0..1.
pub(crate) fn progress(clock: &TweenClock) -> f32 {
    if clock.duration <= 0.0 {
        return if clock.forward { 1.0 } else { 0.0 };
    }
    ease(clock.easing, clock.time / clock.duration)
}

/// Animate target positions based on [`TweenPosition`] entities.
pub fn tween_position_system(
    mut commands: Commands,
    world_time: Res<WorldTime>,
    mut tweens: Query<(Entity, &mut TweenPosition)>,
    mut targets: Query<&mut ScreenPosition>,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut tw) in tweens.iter_mut() {
        let Ok(mut pos) = targets.get_mut(tw.target) else {
            debug!("TweenPosition {:?} lost its target", entity);
            commands.entity(entity).try_despawn();
            continue;
        };
        if tw.clock.playing {
            advance(&mut tw.clock, dt);
            pos.pos = lerp_v2(tw.from, tw.to, progress(&tw.clock));
        }
        if !tw.clock.playing {
            commands.entity(entity).try_despawn();
        }
    }
}

/// Animate target scales based on [`TweenScale`] entities.
pub fn tween_scale_system(
    mut commands: Commands,
    world_time: Res<WorldTime>,
    mut tweens: Query<(Entity, &mut TweenScale)>,
    mut targets: Query<&mut Scale>,
) {
    let dt = world_time.delta.max(0.0);
    for (entity, mut tw) in tweens.iter_mut() {
        let Ok(mut scale) = targets.get_mut(tw.target) else {
            debug!("TweenScale {:?} lost its target", entity);
            commands.entity(entity).try_despawn();
            continue;
        };
        if tw.clock.playing {
            advance(&mut tw.clock, dt);
            scale.scale = lerp_v2(tw.from, tw.to, progress(&tw.clock));
        }
        if !tw.clock.playing {
            commands.entity(entity).try_despawn();
        }
    }
}
