//! Pillow Clicker library.
//!
//! A three-scene clicker game on `bevy_ecs`: a studio splash, a title menu
//! and the pillow scene. Positions, sizes and colors are raylib value types;
//! the window, drawing and audio device are only touched by the binary, so
//! the scene logic runs headless in tests.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod scenes;
pub mod systems;
