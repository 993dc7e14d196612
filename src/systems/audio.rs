//! Audio systems.
//!
//! Game code writes [`AudioCmd`] messages; this module moves them on:
//! - [`update_audio_cmd_messages`] and [`update_audio_messages`] advance the
//!   ECS message queues once per frame.
//! - [`log_audio_messages`] reports what the audio thread answered, so a
//!   missing file shows up in the log instead of failing silently.
//! - [`forward_audio_cmds`] sends commands to the audio thread,
//!   [`poll_audio_messages`] drains its replies and [`audio_thread`] owns
//!   the Raylib audio device.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_audio_cmd_messages(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Log replies from the audio thread. Failures are warnings; the asset is
/// then simply silent.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("Music '{}' failed to load: {}", id, error)
            }
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("Sound '{}' failed to load: {}", id, error)
            }
            AudioMessage::FxMissing { id } => warn!("Sound '{}' is not loaded", id),
            other => debug!("Audio: {:?}", other),
        }
    }
}

/// Drain pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors; the thread may already be gone on shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns the Raylib audio device and every `Music`/`Sound` handle, reacts
/// to [`AudioCmd`]s and pumps music streams, restarting looped tracks
/// when they end. Returns on [`AudioCmd::Shutdown`]. If the device cannot
/// be opened the thread logs the error and exits; commands sent to it
/// are then dropped and the game runs silent.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("Failed to initialize audio device: {}", e);
            return;
        }
    };

    info!("Audio thread running (id={:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("Loaded music '{}' from '{}'", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("Play music '{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id.clone());
                        } else {
                            looped.remove(&id);
                        }
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                    }
                }
                AudioCmd::VolumeMusic { id, vol } => {
                    if let Some(music) = musics.get(&id) {
                        music.set_volume(vol);
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("Loaded sound '{}' from '{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => match sounds.get(&id) {
                    Some(sound) => sound.play(),
                    None => {
                        let _ = tx_evt.send(AudioMessage::FxMissing { id });
                    }
                },
                AudioCmd::Shutdown => {
                    info!("Audio shutdown requested");
                    break 'run;
                }
            }
        }

        // 2) Pump streaming and restart looped tracks that ended.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else if music.get_time_played() >= music.get_time_length() - 0.01 {
                    ended.push(id.clone());
                }
            }
        }
        for id in ended.iter() {
            if looped.contains(id) {
                if let Some(music) = musics.get(id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                playing.remove(id);
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    // Handles must drop before the device.
    sounds.clear();
    musics.clear();
    info!("Audio thread exiting");
}
