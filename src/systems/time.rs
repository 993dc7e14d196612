//! Time update and timer systems.
//!
//! [`update_world_time`] updates the shared
//! [`WorldTime`](crate::resources::worldtime::WorldTime) resource once per
//! frame with the frame delta. [`update_timers`]
//! advances every [`Timer`] by that delta and fires the expired ones.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::timer::Timer;
use crate::events::timer::TimerEvent;
use crate::resources::worldtime::WorldTime;

/// Store this frame's delta on the `WorldTime` resource.
///
/// `dt` is the frame delta in seconds; negative values are treated as zero.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().delta = dt.max(0.0);
}

/// Advance timers and fire the ones that expired this frame.
///
/// An expired timer triggers a [`TimerEvent`] with its signal and is
/// despawned, so each timer fires exactly once.
pub fn update_timers(
    world_time: Res<WorldTime>,
    mut timers: Query<(Entity, &mut Timer)>,
    mut commands: Commands,
) {
    for (entity, mut timer) in timers.iter_mut() {
        timer.elapsed += world_time.delta;
        if timer.is_finished() {
            debug!(
                "Timer '{}' fired after {:.3}s",
                timer.signal, timer.elapsed
            );
            commands.trigger(TimerEvent {
                entity,
                signal: timer.signal.clone(),
            });
            commands.entity(entity).try_despawn();
        }
    }
}
