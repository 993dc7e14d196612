//! ECS components for entities.
//!
//! Components hold the data of a scene's visual elements and of the
//! short-lived helpers (tweens, timers) that animate them.
//!
//! Submodules overview:
//! - [`clickable`] – marks sprites that receive pointer hits
//! - [`dynamictext`] – text drawn at a screen position
//! - [`rectshape`] – solid filled rectangle
//! - [`scale`] – 2D scale factor for sprites
//! - [`scenescoped`] – marker for entities owned by the active scene
//! - [`screenposition`] – screen-space position for every element
//! - [`sprite`] – textured image with a normalized origin
//! - [`timer`] – one-shot delayed call
//! - [`tween`] – animated interpolation of position and scale
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod clickable;
pub mod dynamictext;
pub mod rectshape;
pub mod scale;
pub mod scenescoped;
pub mod screenposition;
pub mod sprite;
pub mod timer;
pub mod tween;
pub mod zindex;
