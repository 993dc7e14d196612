use bevy_ecs::prelude::*;

use crate::resources::screenfade::ScreenFade;
use crate::resources::worldtime::WorldTime;

/// Advance the transition overlay by the frame delta.
pub fn update_screen_fade(world_time: Res<WorldTime>, mut fade: ResMut<ScreenFade>) {
    if fade.is_active() {
        fade.advance(world_time.delta);
    }
}
