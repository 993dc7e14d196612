//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, scene flow,
//! asset tables and frontend handles. Each submodule documents the semantics
//! and intended usage of its resource(s).
//!
//! Overview
//! - `assetmanifest` – id → path table of every image and sound
//! - `audio` – bridge and channels for the background audio thread
//! - `clearcolor` – background color of the active scene
//! - `gameconfig` – settings loaded from `config.ini`
//! - `imagesizes` – pixel size of each image, known without a GPU
//! - `input` – per-frame pointer state
//! - `scene` – authoritative and pending scene
//! - `screenfade` – full-screen black overlay used for transitions
//! - `screensize` – current framebuffer dimensions in pixels
//! - `systemsstore` – registry of scene enter systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod assetmanifest;
pub mod audio;
pub mod clearcolor;
pub mod gameconfig;
pub mod imagesizes;
pub mod input;
pub mod scene;
pub mod screenfade;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
