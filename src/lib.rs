//! Client-side command layer for Lavalink-compatible audio nodes.
//!
//! This crate defines the vocabulary of control operations a bot sends to a
//! remote audio node (play, pause, seek, volume, filters, equalizer) and
//! the JSON envelopes they serialize to. It owns no connection: the transport
//! layer drains a [`flume::Receiver`] of ready-to-send messages obtained from
//! [`Node::new`] and writes them to the WebSocket.
//!
//! ```no_run
//! use nodelink::{GuildId, Node};
//!
//! let (node, outbound) = Node::new();
//! // hand `outbound` to the transport task, then:
//! let session = node.session(GuildId::from(290926798626357250));
//! session.set_volume(80)?;
//! # Ok::<(), nodelink::Error>(())
//! ```

pub mod common;
pub mod configs;
pub mod node;
pub mod protocol;

pub use common::errors::{Error, Result};
pub use common::types::GuildId;
pub use configs::{Config, LoggingConfig, NodeConfig, ResumeConfig};
pub use node::{GuildSession, Node};
pub use protocol::filters::{
    ChannelMix, Distortion, EqualizerBand, Filters, Karaoke, LowPass, Rotation, Timescale,
    Tremolo, Vibrato,
};
pub use protocol::payloads::OutgoingMessage;
pub use protocol::tracks::{Track, TrackError, TrackInfo};
