use bevy_ecs::prelude::Resource;

/// Frame clock. Every wait in the game (tweens, fades, timers) advances by
/// `delta`, the seconds since the previous frame.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct WorldTime {
    pub delta: f32,
}
