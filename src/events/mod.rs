//! Event types and observers used by the game.
//!
//! Submodules:
//! - [`audio`] – commands and replies for the background audio thread
//! - [`input`] – pointer presses, scene-wide and per clickable entity
//! - [`scene`] – scene transition notification and its observer
//! - [`sceneeffect`] – side effects requested by scene reducers
//! - [`timer`] – expiration of one-shot timers
pub mod audio;
pub mod input;
pub mod scene;
pub mod sceneeffect;
pub mod timer;
