//! Audio commands and replies.
//!
//! Game code never touches the audio device. It writes [`AudioCmd`]
//! messages; when the game window is running they are forwarded to the
//! audio thread, which answers with [`AudioMessage`]s. Headless runs (tests)
//! simply leave the commands in their message queue.

use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    VolumeMusic { id: String, vol: f32 },
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    Shutdown,
}

/// Events sent *back* from the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxMissing { id: String },
}
