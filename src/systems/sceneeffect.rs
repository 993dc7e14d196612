//! Scene effect application.
//!
//! [`apply_scene_effects`] is the only place where what a scene reducer
//! asked for turns into world changes: scene requests, fades, timers, audio
//! commands, label updates and tweens. Effects are applied in the order they
//! were written.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::dynamictext::DynamicText;
use crate::components::scale::Scale;
use crate::components::scenescoped::SceneScoped;
use crate::components::screenposition::ScreenPosition;
use crate::components::timer::Timer;
use crate::components::tween::{Easing, LoopMode, TweenPosition, TweenScale};
use crate::events::audio::AudioCmd;
use crate::events::sceneeffect::SceneEffect;
use crate::resources::scene::{ActiveScene, NextScene};
use crate::resources::screenfade::ScreenFade;
use crate::scenes::pillow::{
    CounterLabel, PANEL_SLIDE_SECONDS, PULSE_FACTOR, PULSE_SECONDS, PanelState, Pillow, SidePanel,
};

/// Carry out every [`SceneEffect`] written since the last run.
#[allow(clippy::too_many_arguments)]
pub fn apply_scene_effects(
    mut commands: Commands,
    mut effects: MessageReader<SceneEffect>,
    active: Res<ActiveScene>,
    mut next_scene: ResMut<NextScene>,
    mut fade: ResMut<ScreenFade>,
    mut audio: MessageWriter<AudioCmd>,
    mut labels: Query<&mut DynamicText, With<CounterLabel>>,
    mut pillows: Query<(Entity, &Pillow, &mut Scale)>,
    panels: Query<(Entity, &SidePanel, &ScreenPosition)>,
) {
    for effect in effects.read() {
        debug!("Applying {:?}", effect);
        match effect {
            SceneEffect::AdvanceScene => match active.get().successor() {
                Some(next) => next_scene.set(next),
                None => warn!("{:?} has no successor scene", active.get()),
            },
            SceneEffect::FadeOut { seconds } => fade.fade_out(*seconds),
            SceneEffect::FadeIn { seconds } => fade.fade_in(*seconds),
            SceneEffect::Schedule { seconds, signal } => {
                commands.spawn((Timer::new(*seconds, signal.clone()), SceneScoped));
            }
            SceneEffect::PlayFx { id } => {
                audio.write(AudioCmd::PlayFx { id: id.clone() });
            }
            SceneEffect::SetCounterText(text) => {
                for mut label in labels.iter_mut() {
                    label.set_content(text.clone());
                }
            }
            SceneEffect::ResetPillowScale => {
                for (_, pillow, mut scale) in pillows.iter_mut() {
                    scale.scale = pillow.base_scale;
                }
            }
            SceneEffect::PulsePillow => {
                for (entity, pillow, _) in pillows.iter() {
                    let peak = Vector2 {
                        x: pillow.base_scale.x * PULSE_FACTOR,
                        y: pillow.base_scale.y * PULSE_FACTOR,
                    };
                    commands.spawn((
                        TweenScale::new(entity, pillow.base_scale, peak, PULSE_SECONDS)
                        .with_easing(Easing::CubicInOut)
                        .with_loop_mode(LoopMode::Yoyo),
                        SceneScoped,
                    ));
                }
            }
            SceneEffect::SlidePanel(state) => {
                let easing = match state {
                    PanelState::Open => Easing::CubicOut,
                    PanelState::Closed => Easing::CubicIn,
                };
                for (entity, panel, position) in panels.iter() {
                    let to = Vector2::new(panel.target_x(*state), position.pos.y);
                    commands.spawn((
                        TweenPosition::new(entity, position.pos, to, PANEL_SLIDE_SECONDS)
                            .with_easing(easing),
                        SceneScoped,
                    ));
                }
            }
        }
    }
}

/// Advance the [`SceneEffect`] message queue once per frame.
pub fn update_scene_effect_messages(mut msgs: ResMut<Messages<SceneEffect>>) {
    msgs.update();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::init_world;
    use crate::resources::gameconfig::GameConfig;
    use crate::resources::screensize::ScreenSize;

    fn world_with_pillow(scale: f32) -> (World, Entity) {
        let mut world = World::new();
        init_world(&mut world, GameConfig::new(), ScreenSize { w: 1280, h: 720 });
        let pillow = world
            .spawn((
                Pillow {
                    base_scale: Vector2::new(0.3, 0.3),
                },
                Scale::uniform(scale),
            ))
            .id();
        (world, pillow)
    }

    fn apply(world: &mut World, effects: Vec<SceneEffect>) {
        {
            let mut msgs = world.resource_mut::<Messages<SceneEffect>>();
            for effect in effects {
                msgs.write(effect);
            }
        }
        let mut schedule = Schedule::default();
        schedule.add_systems(apply_scene_effects);
        schedule.run(world);
    }

    #[test]
    fn reset_restores_base_scale() {
        let (mut world, pillow) = world_with_pillow(0.34);
        apply(&mut world, vec![SceneEffect::ResetPillowScale]);
        assert_eq!(world.get::<Scale>(pillow).unwrap().scale, Vector2::new(0.3, 0.3));
    }

    #[test]
    fn pulse_runs_from_base_scale_even_mid_pulse() {
        let (mut world, pillow) = world_with_pillow(0.35);
        apply(&mut world, vec![SceneEffect::PulsePillow]);

        let mut q = world.query::<&TweenScale>();
        let tweens: Vec<_> = q.iter(&world).collect();
        assert_eq!(tweens.len(), 1);
        assert_eq!(tweens[0].target, pillow);
        assert_eq!(tweens[0].from, Vector2::new(0.3, 0.3));
        assert!((tweens[0].to.x - 0.36).abs() < 1e-6);
    }
}
