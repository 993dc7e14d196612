//! Title menu.
//!
//! White background, the start button, the logo, a paragraph of
//! instructions and the looping background music. Pressing start fades the
//! screen out, waits for the fade to finish, then swaps to the pillow scene
//! and fades back in. The wait is a scene-scoped timer, so it is dropped if
//! the menu goes away first.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::prelude::Color;

use crate::components::clickable::Clickable;
use crate::components::dynamictext::DynamicText;
use crate::components::scale::Scale;
use crate::components::scenescoped::SceneScoped;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::events::audio::AudioCmd;
use crate::events::input::ClickEvent;
use crate::events::sceneeffect::SceneEffect;
use crate::events::timer::TimerEvent;
use crate::resources::clearcolor::ClearColor;
use crate::resources::gameconfig::GameConfig;
use crate::resources::imagesizes::ImageSizes;

pub const START_BUTTON_IMAGE: &str = "startButton";
pub const LOGO_IMAGE: &str = "logoPNG";
pub const MUSIC: &str = "backgroundMusic";
/// Signal of the timer that ends the fade-out.
pub const ENTER_PILLOW_SIGNAL: &str = "enter_pillow";
pub const FADE_SECONDS: f32 = 0.5;
pub const INSTRUCTIONS: &str = "\nGet some z\u{2019}s by clicking the pillow! The better rested you\nare, the better your pillow becomes. Upgrade, modify, and \nlearn to love your pillow friend.\n";

/// Marks the start button sprite.
#[derive(Component, Debug, Clone, Copy)]
pub struct StartButton;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Set once start was pressed; the scene is on its way out.
    pub starting: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    StartPressed,
    TimerFired(String),
}

/// Start fades out and schedules the swap; the scheduled swap advances and
/// fades back in. Presses after the first one are ignored.
pub fn reduce_menu(mut state: MenuState, action: &MenuAction) -> (MenuState, Vec<SceneEffect>) {
    match action {
        MenuAction::StartPressed if state.starting => (state, Vec::new()),
        MenuAction::StartPressed => {
            state.starting = true;
            (
                state,
                vec![
                    SceneEffect::FadeOut {
                        seconds: FADE_SECONDS,
                    },
                    SceneEffect::Schedule {
                        seconds: FADE_SECONDS,
                        signal: ENTER_PILLOW_SIGNAL.to_string(),
                    },
                ],
            )
        }
        MenuAction::TimerFired(signal) if signal == ENTER_PILLOW_SIGNAL => (
            state,
            vec![
                SceneEffect::AdvanceScene,
                SceneEffect::FadeIn {
                    seconds: FADE_SECONDS,
                },
            ],
        ),
        MenuAction::TimerFired(_) => (state, Vec::new()),
    }
}

pub fn enter_menu(
    mut commands: Commands,
    sizes: Res<ImageSizes>,
    config: Res<GameConfig>,
    mut clear: ResMut<ClearColor>,
    mut audio: MessageWriter<AudioCmd>,
) {
    info!("Entering menu scene");
    commands.insert_resource(MenuState::default());
    clear.0 = Color::WHITE;

    commands.spawn((
        Sprite::new(START_BUTTON_IMAGE, sizes.size_of(START_BUTTON_IMAGE)),
        ScreenPosition::new(450.0, 200.0),
        Scale::uniform(0.5),
        Clickable,
        StartButton,
        SceneScoped,
    ));
    commands.spawn((
        Sprite::new(LOGO_IMAGE, sizes.size_of(LOGO_IMAGE)),
        ScreenPosition::new(1000.0, 300.0),
        Scale::uniform(0.4),
        SceneScoped,
    ));
    commands.spawn((
        DynamicText::new(INSTRUCTIONS, 24.0, Color::BLACK),
        ScreenPosition::new(100.0, 600.0),
        SceneScoped,
    ));

    audio.write(AudioCmd::PlayMusic {
        id: MUSIC.to_string(),
        looped: true,
    });
    audio.write(AudioCmd::VolumeMusic {
        id: MUSIC.to_string(),
        vol: config.music_volume,
    });

    commands.spawn((Observer::new(on_menu_click), SceneScoped));
    commands.spawn((Observer::new(on_menu_timer), SceneScoped));
}

fn on_menu_click(
    trigger: On<ClickEvent>,
    buttons: Query<(), With<StartButton>>,
    mut state: ResMut<MenuState>,
    mut effects: MessageWriter<SceneEffect>,
) {
    if !buttons.contains(trigger.event().entity) {
        return;
    }
    debug!("Start pressed");
    let (next, fx) = reduce_menu(*state, &MenuAction::StartPressed);
    *state = next;
    effects.write_batch(fx);
}

fn on_menu_timer(
    trigger: On<TimerEvent>,
    mut state: ResMut<MenuState>,
    mut effects: MessageWriter<SceneEffect>,
) {
    let (next, fx) = reduce_menu(*state, &MenuAction::TimerFired(trigger.event().signal.clone()));
    *state = next;
    effects.write_batch(fx);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_fades_out_and_schedules_swap() {
        let (state, fx) = reduce_menu(MenuState::default(), &MenuAction::StartPressed);
        assert!(state.starting);
        assert_eq!(
            fx,
            vec![
                SceneEffect::FadeOut { seconds: 0.5 },
                SceneEffect::Schedule {
                    seconds: 0.5,
                    signal: "enter_pillow".to_string()
                },
            ]
        );
    }

    #[test]
    fn second_start_press_is_ignored() {
        let (state, _) = reduce_menu(MenuState::default(), &MenuAction::StartPressed);
        let (state, fx) = reduce_menu(state, &MenuAction::StartPressed);
        assert!(state.starting);
        assert!(fx.is_empty());
    }

    #[test]
    fn scheduled_swap_advances_and_fades_in() {
        let (_, fx) = reduce_menu(
            MenuState { starting: true },
            &MenuAction::TimerFired(ENTER_PILLOW_SIGNAL.to_string()),
        );
        assert_eq!(
            fx,
            vec![SceneEffect::AdvanceScene, SceneEffect::FadeIn { seconds: 0.5 }]
        );
    }

    #[test]
    fn unrelated_timer_is_ignored() {
        let (state, fx) = reduce_menu(MenuState::default(), &MenuAction::TimerFired("other".into()));
        assert!(fx.is_empty());
        assert_eq!(state, MenuState::default());
    }
}
