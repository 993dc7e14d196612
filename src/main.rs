//! Pillow Clicker main entry point.
//!
//! Opens the raylib window, loads textures and sounds from the asset
//! manifest, builds the ECS world and runs the frame loop until the window
//! closes.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::{Parser, ValueEnum};
use log::{info, warn};
use raylib::prelude::Vector2;

use pillowclicker::game::{self, FrameSet};
use pillowclicker::resources::assetmanifest::AssetManifest;
use pillowclicker::resources::audio::{setup_audio, shutdown_audio};
use pillowclicker::resources::gameconfig::GameConfig;
use pillowclicker::resources::imagesizes::ImageSizes;
use pillowclicker::resources::scene::Scenes;
use pillowclicker::resources::screensize::ScreenSize;
use pillowclicker::resources::texturestore::TextureStore;
use pillowclicker::systems::audio::{forward_audio_cmds, poll_audio_messages};
use pillowclicker::systems::input::{update_pointer_state, update_screen_size};
use pillowclicker::systems::render::render_system;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstScene {
    Splash,
    Menu,
    Pillow,
}

impl From<FirstScene> for Scenes {
    fn from(s: FirstScene) -> Self {
        match s {
            FirstScene::Splash => Scenes::Splash,
            FirstScene::Menu => Scenes::Menu,
            FirstScene::Pillow => Scenes::Pillow,
        }
    }
}

/// Pillow Clicker
#[derive(Parser)]
#[command(version, about = "Click the pillow. Rest well.")]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Scene to start in.
    #[arg(long, value_enum, default_value_t = FirstScene::Splash)]
    scene: FirstScene,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

/// Upload every manifest image and record its size.
fn load_textures(
    rl: &mut raylib::RaylibHandle,
    th: &raylib::RaylibThread,
    manifest: &AssetManifest,
    config: &GameConfig,
) -> (TextureStore, ImageSizes) {
    let mut textures = TextureStore::new();
    let mut sizes = ImageSizes::new();
    for entry in &manifest.images {
        let path = AssetManifest::resolve(&config.assets_dir, entry);
        match rl.load_texture(th, &path.to_string_lossy()) {
            Ok(tex) => {
                sizes.insert(
                    entry.id.clone(),
                    Vector2::new(tex.width() as f32, tex.height() as f32),
                );
                textures.insert(entry.id.clone(), tex);
            }
            Err(e) => warn!("Failed to load image '{}' from {:?}: {}", entry.id, path, e),
        }
    }
    (textures, sizes)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        info!("{}; using defaults", e);
    }

    // Early-exit: write config and quit (no window/audio needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    // --------------- Raylib window & assets ---------------
    let (width, height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(width as i32, height as i32)
        .resizable()
        .title("Pillow Clicker")
        .build();
    rl.set_target_fps(config.target_fps);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    let manifest = game::load_manifest(&config);
    let (textures, sizes) = load_textures(&mut rl, &thread, &manifest, &config);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(sizes);
    world.insert_resource(textures);
    let screen = ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };
    game::init_world(&mut world, config, screen);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // Init audio before anything writes commands.
    setup_audio(&mut world);
    game::queue_audio_loads(&mut world, &manifest);
    game::request_scene(&mut world, cli.scene.into());

    let mut schedule = game::build_schedule();
    schedule.add_systems(
        (update_screen_size, update_pointer_state, poll_audio_messages).in_set(FrameSet::Input),
    );
    schedule.add_systems((forward_audio_cmds, render_system).chain().in_set(FrameSet::Render));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        game::run_frame(&mut world, &mut schedule, dt);
    }
    shutdown_audio(&mut world);
    // Textures must be unloaded while the window is still open.
    world.remove_resource::<TextureStore>();
}
