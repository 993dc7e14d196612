//! Timer expiration events.
//!
//! When a [`Timer`](crate::components::timer::Timer) component reaches its
//! duration, a [`TimerEvent`] is triggered and the timer entity is
//! despawned. Scenes listen for the signals they scheduled:
//!
//! ```ignore
//! commands.spawn((
//!     Observer::new(|trigger: On<TimerEvent>| {
//!         if trigger.event().signal == "enter_pillow" { /* ... */ }
//!     }),
//!     SceneScoped,
//! ));
//! ```

use bevy_ecs::prelude::*;

/// Event emitted when a timer expires.
///
/// The `entity` field identifies the (already despawned) timer entity, and
/// `signal` contains the name configured on the timer.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct TimerEvent {
    /// The entity that carried the timer.
    pub entity: Entity,
    /// The signal name configured on the timer.
    pub signal: String,
}
