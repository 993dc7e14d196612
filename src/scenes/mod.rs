//! The three scenes of the game.
//!
//! Each scene module follows the same shape:
//! - a state struct inserted as a resource when the scene is entered;
//! - an action enum describing what the scene reacts to;
//! - a pure reducer `reduce_*(state, &action) -> (state, effects)`;
//! - an enter system that spawns the scene's [`SceneScoped`] entities,
//!   including the observers that feed actions to the reducer.
//!
//! Reducers never touch the world. The effects they return are written as
//! [`SceneEffect`] messages and carried out by
//! [`apply_scene_effects`](crate::systems::sceneeffect::apply_scene_effects).
//!
//! [`SceneScoped`]: crate::components::scenescoped::SceneScoped
//! [`SceneEffect`]: crate::events::sceneeffect::SceneEffect

pub mod menu;
pub mod pillow;
pub mod splash;
