//! Scene transition event and observer.
//!
//! Systems request a scene change by updating
//! [`NextScene`](crate::resources::scene::NextScene). Emitting a
//! [`SceneChangedEvent`] then triggers [`observe_scene_change_event`], which
//! tears down the old scene (every [`SceneScoped`] entity), makes the new
//! scene active and runs its enter system from
//! [`SystemsStore`](crate::resources::systemsstore::SystemsStore).

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::scenescoped::SceneScoped;
use crate::resources::scene::NextScenes::{Pending, Unchanged};
use crate::resources::scene::{ActiveScene, NextScene};
use crate::resources::systemsstore::SystemsStore;

/// Event used to indicate that a pending scene transition should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangedEvent {}

/// Observer that applies a pending scene transition.
///
/// Contract
/// - Reads the intention from [`NextScene`]; does nothing if unchanged.
/// - Despawns every [`SceneScoped`] entity of the outgoing scene.
/// - Makes the new scene active, clears [`NextScene`] and queues the new
///   scene's enter system.
///
/// A transition to the scene that is already active restarts it.
pub fn observe_scene_change_event(
    _trigger: On<SceneChangedEvent>,
    mut commands: Commands,
    mut next_scene: Option<ResMut<NextScene>>,
    mut active_scene: Option<ResMut<ActiveScene>>,
    systems_store: Res<SystemsStore>,
    scoped: Query<Entity, With<SceneScoped>>,
) {
    let (Some(next_scene), Some(active_scene)) =
        (next_scene.as_deref_mut(), active_scene.as_deref_mut())
    else {
        warn!("Scene resources missing in observe_scene_change_event");
        return;
    };

    match *next_scene.get() {
        Pending(new_scene) => {
            info!("Transitioning from {:?} to {:?}", active_scene.get(), new_scene);
            let mut despawned = 0;
            for entity in scoped.iter() {
                commands.entity(entity).try_despawn();
                despawned += 1;
            }
            debug!("Despawned {} scene entities", despawned);

            active_scene.set(new_scene);
            next_scene.reset();

            match new_scene.enter_system_key() {
                Some(key) => match systems_store.get(key) {
                    Some(system_id) => commands.run_system(*system_id),
                    None => warn!("Enter system '{}' not found in SystemsStore", key),
                },
                None => debug!("{:?} has no enter system", new_scene),
            }
        }
        Unchanged => {
            debug!("No scene change pending.");
        }
    }
}
