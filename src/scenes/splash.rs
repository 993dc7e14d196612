//! Studio splash screen.
//!
//! A background image stretched over the whole window with the studio name
//! on top. Any pointer press moves on to the menu.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::{Color, Vector2};

use crate::components::dynamictext::DynamicText;
use crate::components::scale::Scale;
use crate::components::scenescoped::SceneScoped;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::events::input::PointerDownEvent;
use crate::events::sceneeffect::SceneEffect;
use crate::resources::clearcolor::ClearColor;
use crate::resources::imagesizes::ImageSizes;
use crate::resources::screensize::ScreenSize;

pub const BACKGROUND_IMAGE: &str = "background";
pub const TITLE: &str = "Fluffy Pillow Studios";
const TITLE_FONT_SIZE: f32 = 100.0;
const TITLE_Y: f32 = 100.0;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplashState {
    /// Set by the first press; the scene is on its way out.
    pub advanced: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashAction {
    PointerDown,
}

/// A press anywhere advances to the menu, once.
pub fn reduce_splash(mut state: SplashState, action: &SplashAction) -> (SplashState, Vec<SceneEffect>) {
    match action {
        SplashAction::PointerDown if state.advanced => (state, Vec::new()),
        SplashAction::PointerDown => {
            state.advanced = true;
            (state, vec![SceneEffect::AdvanceScene])
        }
    }
}

/// Scale that stretches an image of `image` size over `screen`.
fn stretch_to(screen: Vector2, image: Vector2) -> Scale {
    let axis = |s: f32, i: f32| if i > 0.0 { s / i } else { 1.0 };
    Scale::new(axis(screen.x, image.x), axis(screen.y, image.y))
}

pub fn enter_splash(
    mut commands: Commands,
    screen: Res<ScreenSize>,
    sizes: Res<ImageSizes>,
    mut clear: ResMut<ClearColor>,
) {
    info!("Entering splash scene");
    commands.insert_resource(SplashState::default());
    clear.0 = Color::BLACK;

    let center = screen.center();
    let image = sizes.size_of(BACKGROUND_IMAGE);
    commands.spawn((
        Sprite::new(BACKGROUND_IMAGE, image),
        ScreenPosition { pos: center },
        stretch_to(screen.size(), image),
        SceneScoped,
    ));
    commands.spawn((
        DynamicText::new(TITLE, TITLE_FONT_SIZE, Color::BLACK).with_origin(Vector2::new(0.5, 0.5)),
        ScreenPosition::new(center.x, TITLE_Y),
        SceneScoped,
    ));
    commands.spawn((Observer::new(on_splash_pointer_down), SceneScoped));
}

fn on_splash_pointer_down(
    trigger: On<PointerDownEvent>,
    mut state: ResMut<SplashState>,
    mut effects: MessageWriter<SceneEffect>,
) {
    debug!("Splash pressed at {:?}", trigger.event().pos);
    let (next, fx) = reduce_splash(*state, &SplashAction::PointerDown);
    *state = next;
    effects.write_batch(fx);
}
