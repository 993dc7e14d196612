//! ECS systems.
//!
//! Systems implement the game's behavior by reading resources and
//! components each frame.
//!
//! Submodules overview:
//! - [`audio`] – audio message queues, logging and the audio thread
//! - [`fade`] – advances the transition overlay
//! - [`input`] – pointer hit-testing and event dispatch
//! - [`render`] – Raylib drawing
//! - [`scene`] – detection of pending scene transitions
//! - [`sceneeffect`] – carries out effects returned by scene reducers
//! - [`time`] – world time and one-shot timers
//! - [`tween`] – tween animation systems for position and scale
pub mod audio;
pub mod fade;
pub mod input;
pub mod render;
pub mod scene;
pub mod sceneeffect;
pub mod time;
pub mod tween;
