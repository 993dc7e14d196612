//! Input systems.
//!
//! - [`update_pointer_state`] reads the mouse from Raylib each frame.
//! - [`dispatch_pointer_presses`] turns a press recorded in
//!   [`PointerState`] into [`ClickEvent`]s for the clickable sprites under
//!   the pointer, followed by one scene-wide [`PointerDownEvent`].
//! - [`update_screen_size`] keeps [`ScreenSize`] in step with the window.
use bevy_ecs::prelude::*;
use log::debug;
use raylib::prelude::MouseButton;

use crate::components::clickable::Clickable;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::events::input::{ClickEvent, PointerDownEvent};
use crate::resources::input::PointerState;
use crate::resources::screensize::ScreenSize;

/// Poll Raylib for the mouse and update the `PointerState` resource.
pub fn update_pointer_state(mut pointer: ResMut<PointerState>, rl: NonSend<raylib::RaylibHandle>) {
    pointer.position = rl.get_mouse_position();
    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        pointer.just_pressed = true;
    }
}

/// Emit pointer events for the press recorded this frame, if any.
///
/// Hit-testing uses each sprite's scaled bounds around its origin.
pub fn dispatch_pointer_presses(
    mut pointer: ResMut<PointerState>,
    clickables: Query<(Entity, &ScreenPosition, &Sprite, Option<&Scale>), With<Clickable>>,
    mut commands: Commands,
) {
    if !pointer.just_pressed {
        return;
    }
    pointer.just_pressed = false;
    let pos = pointer.position;

    for (entity, position, sprite, scale) in clickables.iter() {
        if sprite.bounds(position.pos, scale).check_collision_point_rec(pos) {
            debug!("Pointer hit {:?} ({}) at {:?}", entity, sprite.tex_key, pos);
            commands.trigger(ClickEvent { entity, pos });
        }
    }
    commands.trigger(PointerDownEvent { pos });
}

/// Follow window resizes.
pub fn update_screen_size(mut screen: ResMut<ScreenSize>, rl: NonSend<raylib::RaylibHandle>) {
    let (w, h) = (rl.get_screen_width(), rl.get_screen_height());
    if screen.w != w || screen.h != h {
        screen.w = w;
        screen.h = h;
    }
}
