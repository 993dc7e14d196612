//! World setup and the per-frame schedule.
//!
//! Everything here is headless: the raylib binary and the integration tests
//! build the world the same way and differ only in what they put into the
//! [`FrameSet::Input`] and [`FrameSet::Render`] sets.

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ScheduleLabel;
use log::{info, warn};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::events::scene::observe_scene_change_event;
use crate::events::sceneeffect::SceneEffect;
use crate::resources::assetmanifest::AssetManifest;
use crate::resources::clearcolor::ClearColor;
use crate::resources::gameconfig::GameConfig;
use crate::resources::imagesizes::ImageSizes;
use crate::resources::input::PointerState;
use crate::resources::scene::{ActiveScene, NextScene, Scenes};
use crate::resources::screenfade::ScreenFade;
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::scenes::{menu, pillow, splash};
use crate::systems::audio::{
    log_audio_messages, update_audio_cmd_messages, update_audio_messages,
};
use crate::systems::fade::update_screen_fade;
use crate::systems::input::dispatch_pointer_presses;
use crate::systems::scene::check_pending_scene;
use crate::systems::sceneeffect::{apply_scene_effects, update_scene_effect_messages};
use crate::systems::time::{update_timers, update_world_time};
use crate::systems::tween::{tween_position_system, tween_scale_system};

/// Label of the schedule run once per frame.
#[derive(ScheduleLabel, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame;

/// Phases of a frame, run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Frontend input polling and window size sync.
    Input,
    /// Game logic. Runs headless.
    Logic,
    /// Frontend drawing and audio forwarding.
    Render,
}

/// Insert every resource the game needs, register the scene enter systems
/// and the scene transition observer.
///
/// An [`ImageSizes`] table already in the world is kept; the frontend fills
/// it while uploading textures.
pub fn init_world(world: &mut World, config: GameConfig, screen: ScreenSize) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(PointerState::default());
    world.insert_resource(screen);
    world.insert_resource(ActiveScene::new());
    world.insert_resource(NextScene::new());
    world.insert_resource(ClearColor::default());
    world.insert_resource(ScreenFade::new());
    world.init_resource::<ImageSizes>();
    world.insert_resource(config);

    world.init_resource::<Messages<SceneEffect>>();
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();

    let mut systems_store = SystemsStore::new();
    systems_store.insert("enter_splash", world.register_system(splash::enter_splash));
    systems_store.insert("enter_menu", world.register_system(menu::enter_menu));
    systems_store.insert("enter_pillow", world.register_system(pillow::enter_pillow));
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_scene_change_event));
    // Observers must be registered before anything triggers.
    world.flush();
}

/// Pick the manifest named in the config, falling back to the built-in one.
pub fn load_manifest(config: &GameConfig) -> AssetManifest {
    match &config.manifest_path {
        Some(path) => match AssetManifest::load_from_file(path) {
            Ok(manifest) => {
                info!("Loaded asset manifest {:?}", path);
                manifest
            }
            Err(e) => {
                warn!("Failed to load asset manifest {:?}: {}. Using built-in.", path, e);
                AssetManifest::default()
            }
        },
        None => AssetManifest::default(),
    }
}

/// Queue loading of every music track and sound effect in the manifest.
pub fn queue_audio_loads(world: &mut World, manifest: &AssetManifest) {
    let assets_dir = world.resource::<GameConfig>().assets_dir.clone();
    let mut cmds = world.resource_mut::<Messages<AudioCmd>>();
    for entry in &manifest.music {
        cmds.write(AudioCmd::LoadMusic {
            id: entry.id.clone(),
            path: AssetManifest::resolve(&assets_dir, entry)
                .to_string_lossy()
                .into_owned(),
        });
    }
    for entry in &manifest.fx {
        cmds.write(AudioCmd::LoadFx {
            id: entry.id.clone(),
            path: AssetManifest::resolve(&assets_dir, entry)
                .to_string_lossy()
                .into_owned(),
        });
    }
}

/// The frame schedule with the game logic in place.
///
/// Logic order: pointer dispatch (scene observers react inline), fade,
/// timers, effect application, pending scene transition, tweens, then the
/// message queues advance. The fade advances before timers so a fade and a
/// timer started together finish on the same frame.
pub fn build_schedule() -> Schedule {
    let mut schedule = Schedule::new(Frame);
    schedule.configure_sets((FrameSet::Input, FrameSet::Logic, FrameSet::Render).chain());
    schedule.add_systems(
        (
            dispatch_pointer_presses,
            update_screen_fade,
            update_timers,
            apply_scene_effects,
            check_pending_scene,
            tween_position_system,
            tween_scale_system,
            log_audio_messages,
            update_scene_effect_messages,
            update_audio_cmd_messages,
            update_audio_messages,
        )
            .chain()
            .in_set(FrameSet::Logic),
    );
    schedule
}

/// Ask for `scene` to be entered on the next frame.
pub fn request_scene(world: &mut World, scene: Scenes) {
    world.resource_mut::<NextScene>().set(scene);
}

/// Advance the clock by `dt` seconds and run one frame.
pub fn run_frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}
