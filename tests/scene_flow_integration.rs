//! Headless end-to-end tests of the scene flow: splash → menu → pillow.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use pillowclicker::components::dynamictext::DynamicText;
use pillowclicker::components::scale::Scale;
use pillowclicker::components::screenposition::ScreenPosition;
use pillowclicker::components::sprite::Sprite;
use pillowclicker::components::timer::Timer;
use pillowclicker::components::tween::{Easing, LoopMode, TweenPosition, TweenScale};
use pillowclicker::events::audio::AudioCmd;
use pillowclicker::game::{build_schedule, init_world, request_scene, run_frame};
use pillowclicker::resources::clearcolor::ClearColor;
use pillowclicker::resources::gameconfig::GameConfig;
use pillowclicker::resources::imagesizes::ImageSizes;
use pillowclicker::resources::input::PointerState;
use pillowclicker::resources::scene::{ActiveScene, Scenes};
use pillowclicker::resources::screenfade::ScreenFade;
use pillowclicker::resources::screensize::ScreenSize;
use pillowclicker::scenes::pillow::{
    CounterLabel, PanelState, Pillow, PillowState, SidePanel, background_color,
};

const FRAME: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

struct Game {
    world: World,
    schedule: Schedule,
}

impl Game {
    /// World with known image sizes, entered into `first` after one frame.
    fn start(first: Scenes) -> Self {
        let mut world = World::new();
        let mut sizes = ImageSizes::new();
        sizes.insert("background", Vector2::new(640.0, 360.0));
        sizes.insert("startButton", Vector2::new(400.0, 200.0));
        sizes.insert("logoPNG", Vector2::new(300.0, 300.0));
        sizes.insert("pillowImage", Vector2::new(1000.0, 600.0));
        sizes.insert("menu", Vector2::new(1000.0, 1200.0));
        world.insert_resource(sizes);
        init_world(&mut world, GameConfig::new(), ScreenSize { w: 1280, h: 720 });
        request_scene(&mut world, first);

        let mut game = Game {
            world,
            schedule: build_schedule(),
        };
        game.frame(0.0);
        game
    }

    fn frame(&mut self, dt: f32) {
        run_frame(&mut self.world, &mut self.schedule, dt);
    }

    fn press(&mut self, x: f32, y: f32) {
        self.world.resource_mut::<PointerState>().press(x, y);
        self.frame(FRAME);
    }

    fn wait(&mut self, seconds: f32, dt: f32) {
        let frames = (seconds / dt).round() as usize;
        for _ in 0..frames {
            self.frame(dt);
        }
    }

    fn scene(&self) -> Scenes {
        self.world.resource::<ActiveScene>().get()
    }

    fn pillow_state(&self) -> PillowState {
        *self.world.resource::<PillowState>()
    }

    fn counter_text(&mut self) -> String {
        let mut q = self
            .world
            .query_filtered::<&DynamicText, With<CounterLabel>>();
        q.iter(&self.world).next().unwrap().content.clone()
    }

    fn panel_x(&mut self) -> f32 {
        let mut q = self
            .world
            .query_filtered::<&ScreenPosition, With<SidePanel>>();
        q.iter(&self.world).next().unwrap().pos.x
    }

    fn pillow_scale(&mut self) -> f32 {
        let mut q = self.world.query_filtered::<&Scale, With<Pillow>>();
        q.iter(&self.world).next().unwrap().scale.x
    }

    fn scale_tweens(&mut self) -> Vec<TweenScale> {
        let mut q = self.world.query::<&TweenScale>();
        q.iter(&self.world).cloned().collect()
    }

    fn position_tweens(&mut self) -> Vec<TweenPosition> {
        let mut q = self.world.query::<&TweenPosition>();
        q.iter(&self.world).cloned().collect()
    }

    fn sprite_keys(&mut self) -> Vec<String> {
        let mut q = self.world.query::<&Sprite>();
        let mut keys: Vec<String> = q.iter(&self.world).map(|s| s.tex_key.clone()).collect();
        keys.sort();
        keys
    }

    fn drain_audio(&mut self) -> Vec<AudioCmd> {
        self.world
            .resource_mut::<Messages<AudioCmd>>()
            .drain()
            .collect()
    }

    fn press_start(&mut self) {
        self.press(450.0, 200.0);
    }

    fn press_pillow(&mut self) {
        self.press(640.0, 360.0);
    }
}

// ==================== SPLASH ====================

#[test]
fn splash_builds_background_and_title() {
    let mut game = Game::start(Scenes::Splash);
    assert_eq!(game.scene(), Scenes::Splash);
    assert_eq!(game.sprite_keys(), vec!["background".to_string()]);

    let mut q = game.world.query::<(&DynamicText, &ScreenPosition)>();
    let (text, pos) = q.iter(&game.world).next().unwrap();
    assert_eq!(text.content, "Fluffy Pillow Studios");
    assert_eq!(text.font_size, 100.0);
    assert_eq!(pos.pos, Vector2::new(640.0, 100.0));
}

#[test]
fn any_press_on_splash_goes_to_menu() {
    for (x, y) in [(5.0, 5.0), (640.0, 360.0), (1270.0, 710.0)] {
        let mut game = Game::start(Scenes::Splash);
        game.press(x, y);
        assert_eq!(game.scene(), Scenes::Menu, "press at ({}, {})", x, y);
    }
}

#[test]
fn leaving_splash_removes_its_entities() {
    let mut game = Game::start(Scenes::Splash);
    game.press(10.0, 10.0);
    let keys = game.sprite_keys();
    assert!(!keys.contains(&"background".to_string()));
    assert_eq!(keys, vec!["logoPNG".to_string(), "startButton".to_string()]);
}

// ==================== MENU ====================

#[test]
fn menu_starts_looping_music_at_configured_volume() {
    let mut game = Game::start(Scenes::Menu);
    let cmds = game.drain_audio();
    assert!(cmds.contains(&AudioCmd::PlayMusic {
        id: "backgroundMusic".to_string(),
        looped: true
    }));
    assert!(cmds.contains(&AudioCmd::VolumeMusic {
        id: "backgroundMusic".to_string(),
        vol: 0.5
    }));
    assert_eq!(game.world.resource::<ClearColor>().0, Color::WHITE);
}

#[test]
fn press_outside_start_button_does_nothing() {
    let mut game = Game::start(Scenes::Menu);
    game.press(50.0, 50.0);
    game.wait(1.0, 0.1);
    assert_eq!(game.scene(), Scenes::Menu);
    assert_eq!(game.world.resource::<ScreenFade>().alpha, 0.0);
}

#[test]
fn start_swaps_to_pillow_no_earlier_than_fade_out() {
    let mut game = Game::start(Scenes::Menu);
    game.press_start();

    game.wait(0.4, 0.1);
    assert_eq!(game.scene(), Scenes::Menu);
    assert!(game.world.resource::<ScreenFade>().alpha > 0.7);

    game.wait(0.2, 0.1);
    assert_eq!(game.scene(), Scenes::Pillow);
    assert!(game.world.resource::<ScreenFade>().alpha > 0.5);

    game.wait(0.6, 0.1);
    assert!(approx_eq(game.world.resource::<ScreenFade>().alpha, 0.0));
}

#[test]
fn second_start_press_keeps_fade_on_schedule() {
    let mut game = Game::start(Scenes::Menu);
    game.press_start();
    game.wait(0.4, 0.1);
    game.press_start();
    assert_eq!(game.world.query::<&Timer>().iter(&game.world).count(), 1);

    let mut frames = 0;
    while game.scene() == Scenes::Menu && frames < 10 {
        game.frame(0.1);
        frames += 1;
    }
    assert_eq!(game.scene(), Scenes::Pillow);
    assert!(approx_eq(game.world.resource::<ScreenFade>().alpha, 1.0));
}

#[test]
fn pending_swap_dies_with_the_menu() {
    let mut game = Game::start(Scenes::Menu);
    game.press_start();
    assert_eq!(game.world.query::<&Timer>().iter(&game.world).count(), 1);

    // Leave the menu some other way before the timer fires.
    request_scene(&mut game.world, Scenes::Splash);
    game.frame(FRAME);
    assert_eq!(game.world.query::<&Timer>().iter(&game.world).count(), 0);

    game.wait(1.0, 0.1);
    assert_eq!(game.scene(), Scenes::Splash);
}

// ==================== PILLOW ====================

#[test]
fn pillow_scene_starts_fresh() {
    let mut game = Game::start(Scenes::Pillow);
    assert_eq!(game.pillow_state(), PillowState::default());
    assert_eq!(game.counter_text(), "0");
    assert!(approx_eq(game.panel_x(), -500.0));
    assert_eq!(game.world.resource::<ClearColor>().0, background_color());
}

#[test]
fn pillow_presses_count_and_play_sound() {
    let mut game = Game::start(Scenes::Pillow);
    game.drain_audio();
    for n in 1..=5u32 {
        game.press_pillow();
        assert_eq!(game.pillow_state().clicks, n);
        assert_eq!(game.counter_text(), n.to_string());
        let cmds = game.drain_audio();
        assert_eq!(
            cmds,
            vec![AudioCmd::PlayFx {
                id: "pillowSound".to_string()
            }]
        );
    }
}

#[test]
fn pillow_press_starts_one_yoyo_pulse() {
    let mut game = Game::start(Scenes::Pillow);
    game.press_pillow();

    let tweens = game.scale_tweens();
    assert_eq!(tweens.len(), 1);
    let pulse = &tweens[0];
    assert!(approx_eq(pulse.from.x, 0.3));
    assert!(approx_eq(pulse.to.x, 0.36));
    assert!(approx_eq(pulse.to.y, 0.36));
    assert!(approx_eq(pulse.clock.duration, 0.1));
    assert_eq!(pulse.clock.easing, Easing::CubicInOut);
    assert_eq!(pulse.clock.loop_mode, LoopMode::Yoyo);
}

#[test]
fn pulse_peaks_then_returns_to_base_scale() {
    let mut game = Game::start(Scenes::Pillow);
    game.press_pillow();

    let mut peak: f32 = game.pillow_scale();
    for _ in 0..30 {
        game.frame(0.01);
        peak = peak.max(game.pillow_scale());
    }
    assert!(approx_eq(peak, 0.36), "peak scale {}", peak);
    assert!(approx_eq(game.pillow_scale(), 0.3));
    assert!(game.scale_tweens().is_empty());
}

#[test]
fn rapid_presses_overlap_pulses_from_base_scale() {
    let mut game = Game::start(Scenes::Pillow);
    game.press_pillow();
    game.wait(0.05, 0.01);
    assert!(game.pillow_scale() > 0.3);
    game.press_pillow();

    let tweens = game.scale_tweens();
    assert_eq!(tweens.len(), 2);
    for tw in &tweens {
        assert!(approx_eq(tw.from.x, 0.3));
        assert!(approx_eq(tw.to.x, 0.36));
    }

    game.wait(0.3, 0.01);
    assert!(game.scale_tweens().is_empty());
    assert!(approx_eq(game.pillow_scale(), 0.3));
}

#[test]
fn panel_opens_ease_out_and_closes_ease_in() {
    let mut game = Game::start(Scenes::Pillow);
    game.press(50.0, 50.0);
    game.press(50.0, 50.0);

    let tweens = game.position_tweens();
    assert_eq!(tweens.len(), 2);
    let opening = tweens.iter().find(|t| approx_eq(t.to.x, 300.0)).unwrap();
    let closing = tweens.iter().find(|t| approx_eq(t.to.x, -500.0)).unwrap();
    assert_eq!(opening.clock.easing, Easing::CubicOut);
    assert_eq!(closing.clock.easing, Easing::CubicIn);
    for tw in &tweens {
        assert!(approx_eq(tw.clock.duration, 0.3));
        assert_eq!(tw.clock.loop_mode, LoopMode::Once);
    }
}

#[test]
fn hotspot_toggles_panel_and_slides_it() {
    let mut game = Game::start(Scenes::Pillow);

    game.press(50.0, 50.0);
    assert_eq!(game.pillow_state().panel, PanelState::Open);
    game.wait(0.5, FRAME);
    assert!(approx_eq(game.panel_x(), 300.0));

    game.press(50.0, 50.0);
    assert_eq!(game.pillow_state().panel, PanelState::Closed);
    game.wait(0.5, FRAME);
    assert!(approx_eq(game.panel_x(), -500.0));
}

#[test]
fn press_outside_hotspot_never_moves_panel() {
    let mut game = Game::start(Scenes::Pillow);
    game.press(150.0, 50.0);
    game.press(50.0, 150.0);
    game.press_pillow();
    game.wait(0.5, FRAME);
    assert_eq!(game.pillow_state().panel, PanelState::Closed);
    assert!(approx_eq(game.panel_x(), -500.0));
}

#[test]
fn overlapping_slides_settle_on_last_state() {
    let mut game = Game::start(Scenes::Pillow);
    game.press(50.0, 50.0);
    game.press(50.0, 50.0);
    assert_eq!(game.pillow_state().panel, PanelState::Closed);
    game.wait(0.5, FRAME);
    assert!(approx_eq(game.panel_x(), -500.0));
}

#[test]
fn reentering_pillow_resets_counter_and_panel() {
    let mut game = Game::start(Scenes::Pillow);
    game.press_pillow();
    game.press_pillow();
    game.press(50.0, 50.0);
    assert_eq!(game.pillow_state().clicks, 2);

    request_scene(&mut game.world, Scenes::Pillow);
    game.frame(FRAME);
    assert_eq!(game.pillow_state(), PillowState::default());
    assert_eq!(game.counter_text(), "0");
    assert!(approx_eq(game.panel_x(), -500.0));
}

// ==================== END TO END ====================

#[test]
fn splash_to_pillow_then_three_clicks() {
    let mut game = Game::start(Scenes::Splash);

    game.press(300.0, 300.0);
    assert_eq!(game.scene(), Scenes::Menu);

    game.press_start();
    game.wait(0.4, 0.1);
    assert_eq!(game.scene(), Scenes::Menu);
    game.wait(0.2, 0.1);
    assert_eq!(game.scene(), Scenes::Pillow);
    assert_eq!(game.pillow_state().clicks, 0);
    assert_eq!(game.pillow_state().panel, PanelState::Closed);

    game.wait(0.5, 0.1);
    for _ in 0..3 {
        game.press_pillow();
    }
    assert_eq!(game.pillow_state().clicks, 3);
    assert_eq!(game.counter_text(), "3");
}
