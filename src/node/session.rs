use std::time::Duration;

use serde_json::Value;

use crate::common::errors::Result;
use crate::common::types::GuildId;
use crate::protocol::filters::{EqualizerBand, Filters, Timescale};
use crate::protocol::payloads::OutgoingMessage;
use crate::protocol::tracks::Track;

/// One guild's voice session on a node.
///
/// Immutable after construction: a guild id plus a clone of the node's
/// outbound sender. Every method builds one payload and hands it to the
/// transport; nothing here blocks or waits for the node's reaction.
pub struct GuildSession {
    guild_id: GuildId,
    sender: flume::Sender<String>,
}

impl GuildSession {
    pub(crate) fn new(guild_id: GuildId, sender: flume::Sender<String>) -> Self {
        Self { guild_id, sender }
    }

    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Forward the platform's voice server credentials to the node.
    pub fn voice_update(&self, session_id: &str, event: Value) -> Result<()> {
        self.send(&OutgoingMessage::voice_update(
            self.guild_id,
            session_id,
            event,
        ))
    }

    /// Play a track from the beginning.
    pub fn play(&self, track: &Track) -> Result<()> {
        self.send(&OutgoingMessage::play(self.guild_id, track))
    }

    /// Play a bounded window of a track. `start <= stop` is not checked.
    pub fn play_partial(&self, track: &Track, start: Duration, stop: Duration) -> Result<()> {
        self.send(&OutgoingMessage::play_partial(
            self.guild_id,
            track,
            start,
            stop,
        ))
    }

    pub fn set_paused(&self, paused: bool) -> Result<()> {
        self.send(&OutgoingMessage::pause(self.guild_id, paused))
    }

    /// Halt playback and clear the current track on the node.
    pub fn stop(&self) -> Result<()> {
        self.send(&OutgoingMessage::stop(self.guild_id))
    }

    pub fn seek(&self, position: Duration) -> Result<()> {
        self.send(&OutgoingMessage::seek(self.guild_id, position))
    }

    /// Set playback volume, unclamped.
    pub fn set_volume(&self, volume: i32) -> Result<()> {
        self.send(&OutgoingMessage::volume(self.guild_id, volume))
    }

    /// Apply the present filter kinds; absent kinds stay as they are.
    pub fn set_filters(&self, filters: Filters) -> Result<()> {
        self.send(&OutgoingMessage::filters(self.guild_id, filters))
    }

    /// Shorthand for a filters op carrying only the timescale.
    pub fn set_timescale(&self, timescale: Timescale) -> Result<()> {
        self.send(&OutgoingMessage::timescale(self.guild_id, timescale))
    }

    pub fn set_equalizer(
        &self,
        bands: impl IntoIterator<Item = EqualizerBand>,
    ) -> Result<()> {
        self.send(&OutgoingMessage::equalizer(self.guild_id, bands))
    }

    /// Send an empty band list, which the node reads as "clear all bands".
    pub fn reset_equalizer(&self) -> Result<()> {
        self.send(&OutgoingMessage::equalizer(self.guild_id, []))
    }

    fn send(&self, msg: &OutgoingMessage) -> Result<()> {
        super::send_payload(&self.sender, msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::handle::Node;
    use crate::protocol::tracks::TrackInfo;

    fn sample_track() -> Track {
        Track::new(TrackInfo {
            identifier: "abc123".to_string(),
            is_seekable: true,
            author: "Daft Punk".to_string(),
            length: 344000,
            is_stream: false,
            position: 0,
            title: "Around the World".to_string(),
            uri: None,
            source_name: "soundcloud".to_string(),
        })
    }

    #[test]
    fn test_play_reaches_transport_verbatim() {
        let (node, rx) = Node::new();
        let session = node.session(GuildId::from(123));
        assert_eq!(session.guild_id(), GuildId::from(123));
        let track = sample_track();

        session.play(&track).unwrap();

        assert_eq!(
            rx.recv().unwrap(),
            format!(
                "{{\"op\":\"play\",\"guildId\":\"123\",\"track\":\"{}\"}}",
                track.encoded
            )
        );
    }

    #[test]
    fn test_command_sequence_preserves_send_order() {
        let (node, rx) = Node::new();
        let session = node.session(GuildId::from(5));

        session.set_paused(true).unwrap();
        session.seek(Duration::from_secs(90)).unwrap();
        session.set_volume(80).unwrap();
        session.stop().unwrap();

        assert_eq!(
            rx.recv().unwrap(),
            "{\"op\":\"pause\",\"guildId\":\"5\",\"pause\":true}"
        );
        assert_eq!(
            rx.recv().unwrap(),
            "{\"op\":\"seek\",\"guildId\":\"5\",\"position\":90000}"
        );
        assert_eq!(
            rx.recv().unwrap(),
            "{\"op\":\"volume\",\"guildId\":\"5\",\"volume\":80}"
        );
        assert_eq!(rx.recv().unwrap(), "{\"op\":\"stop\",\"guildId\":\"5\"}");
    }

    #[test]
    fn test_reset_equalizer_sends_empty_bands() {
        let (node, rx) = Node::new();
        let session = node.session(GuildId::from(9));

        session.reset_equalizer().unwrap();

        assert_eq!(
            rx.recv().unwrap(),
            "{\"op\":\"equalizer\",\"guildId\":\"9\",\"bands\":[]}"
        );
    }

    #[test]
    fn test_voice_update_envelope() {
        let (node, rx) = Node::new();
        let session = node.session(GuildId::from(11));

        session
            .voice_update(
                "sess-1",
                serde_json::json!({"token": "t", "endpoint": "e"}),
            )
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&rx.recv().unwrap()).unwrap();
        assert_eq!(json["op"], "voiceUpdate");
        assert_eq!(json["guildId"], "11");
        assert_eq!(json["sessionId"], "sess-1");
        assert_eq!(json["event"]["token"], "t");
    }

    #[test]
    fn test_timescale_shorthand_wire_form() {
        let (node, rx) = Node::new();
        let session = node.session(GuildId::from(3));

        session
            .set_timescale(Timescale {
                speed: 1.25,
                pitch: 1.0,
                rate: 1.0,
            })
            .unwrap();

        assert_eq!(
            rx.recv().unwrap(),
            "{\"op\":\"filters\",\"guildId\":\"3\",\"timescale\":{\"speed\":1.25,\"pitch\":1.0,\"rate\":1.0}}"
        );
    }

    // The sink is drained from async transport code in practice; make sure
    // the flume receiver behaves there too.
    #[tokio::test]
    async fn test_async_transport_drain() {
        let (node, rx) = Node::new();
        let session = node.session(GuildId::from(77));

        let drain = tokio::spawn(async move { rx.recv_async().await.unwrap() });
        session.set_paused(false).unwrap();

        let json = drain.await.unwrap();
        assert_eq!(json, "{\"op\":\"pause\",\"guildId\":\"77\",\"pause\":false}");
    }
}
