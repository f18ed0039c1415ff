use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use crate::common::types::GuildId;
use crate::protocol::filters::{EqualizerBand, Filters, Timescale};
use crate::protocol::tracks::Track;

/// Control messages sent from the client to the node over one connection.
///
/// Serialize-only: node events travel the other way and are decoded
/// elsewhere. The `op` tag is fixed per variant and every operation except
/// `configureResuming` is scoped to one guild. Wire field names must match
/// the node byte-for-byte.
///
/// `Play`/`PlayPartial` and `AudioFilters`/`Timescale` intentionally share an
/// `op` name; that is unambiguous because these payloads are never
/// deserialized.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum OutgoingMessage {
    /// Configures session resuming for the whole connection. No guild scope.
    ConfigureResuming { key: String, timeout: u64 },

    /// Forwards the platform's voice server credentials to the node.
    VoiceUpdate {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
        #[serde(rename = "sessionId")]
        session_id: String,
        /// Raw voice-server-update event as received from the gateway.
        event: Value,
    },

    /// Starts playback of a track from position 0.
    Play {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
        track: String,
    },

    /// Plays a bounded window of a track.
    #[serde(rename = "play")]
    PlayPartial {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
        track: String,
        #[serde(rename = "startTime")]
        start_time: u64,
        #[serde(rename = "endTime")]
        end_time: u64,
    },

    Pause {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
        pause: bool,
    },

    /// Halts playback and clears the current track.
    Stop {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
    },

    /// Absolute seek, in milliseconds.
    Seek {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
        position: u64,
    },

    Volume {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
        volume: i32,
    },

    /// Tears down the player for this guild on the node.
    Destroy {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
    },

    /// Applies the present filter kinds, leaving absent kinds untouched.
    #[serde(rename = "filters")]
    AudioFilters {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
        #[serde(flatten)]
        filters: Filters,
    },

    /// Timescale-only shorthand for the `filters` op.
    #[serde(rename = "filters")]
    Timescale {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
        timescale: Timescale,
    },

    Equalizer {
        #[serde(rename = "guildId")]
        guild_id: GuildId,
        bands: Vec<EqualizerBand>,
    },
}

impl OutgoingMessage {
    pub fn configure_resuming(key: &str, timeout: u64) -> Self {
        Self::ConfigureResuming {
            key: key.to_string(),
            timeout,
        }
    }

    pub fn voice_update(guild_id: GuildId, session_id: &str, event: Value) -> Self {
        Self::VoiceUpdate {
            guild_id,
            session_id: session_id.to_string(),
            event,
        }
    }

    pub fn play(guild_id: GuildId, track: &Track) -> Self {
        Self::Play {
            guild_id,
            track: track.encoded.clone(),
        }
    }

    /// Start and stop are truncated to whole milliseconds. `start <= stop` is
    /// not checked here; the node rejects nonsensical windows.
    pub fn play_partial(guild_id: GuildId, track: &Track, start: Duration, stop: Duration) -> Self {
        Self::PlayPartial {
            guild_id,
            track: track.encoded.clone(),
            start_time: start.as_millis() as u64,
            end_time: stop.as_millis() as u64,
        }
    }

    pub fn pause(guild_id: GuildId, pause: bool) -> Self {
        Self::Pause { guild_id, pause }
    }

    pub fn stop(guild_id: GuildId) -> Self {
        Self::Stop { guild_id }
    }

    pub fn seek(guild_id: GuildId, position: Duration) -> Self {
        Self::Seek {
            guild_id,
            position: position.as_millis() as u64,
        }
    }

    /// The volume is forwarded unclamped; the node enforces its own range.
    pub fn volume(guild_id: GuildId, volume: i32) -> Self {
        Self::Volume { guild_id, volume }
    }

    pub fn destroy(guild_id: GuildId) -> Self {
        Self::Destroy { guild_id }
    }

    pub fn filters(guild_id: GuildId, filters: Filters) -> Self {
        Self::AudioFilters { guild_id, filters }
    }

    pub fn timescale(guild_id: GuildId, timescale: Timescale) -> Self {
        Self::Timescale {
            guild_id,
            timescale,
        }
    }

    pub fn equalizer(guild_id: GuildId, bands: impl IntoIterator<Item = EqualizerBand>) -> Self {
        Self::Equalizer {
            guild_id,
            bands: bands.into_iter().collect(),
        }
    }

    /// The `op` value this payload serializes with.
    pub fn op(&self) -> &'static str {
        match self {
            Self::ConfigureResuming { .. } => "configureResuming",
            Self::VoiceUpdate { .. } => "voiceUpdate",
            Self::Play { .. } | Self::PlayPartial { .. } => "play",
            Self::Pause { .. } => "pause",
            Self::Stop { .. } => "stop",
            Self::Seek { .. } => "seek",
            Self::Volume { .. } => "volume",
            Self::Destroy { .. } => "destroy",
            Self::AudioFilters { .. } | Self::Timescale { .. } => "filters",
            Self::Equalizer { .. } => "equalizer",
        }
    }

    /// The guild this payload targets, if it is guild-scoped.
    pub fn guild_id(&self) -> Option<GuildId> {
        match self {
            Self::ConfigureResuming { .. } => None,
            Self::VoiceUpdate { guild_id, .. }
            | Self::Play { guild_id, .. }
            | Self::PlayPartial { guild_id, .. }
            | Self::Pause { guild_id, .. }
            | Self::Stop { guild_id }
            | Self::Seek { guild_id, .. }
            | Self::Volume { guild_id, .. }
            | Self::Destroy { guild_id }
            | Self::AudioFilters { guild_id, .. }
            | Self::Timescale { guild_id, .. }
            | Self::Equalizer { guild_id, .. } => Some(*guild_id),
        }
    }
}
