use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;

use crate::common::errors::Result;
use crate::common::types::GuildId;
use crate::configs::ResumeConfig;
use crate::node::session::GuildSession;
use crate::protocol::payloads::OutgoingMessage;

/// Handle to one audio node connection.
///
/// Owns the outbound message sink and the per-guild session registry. The
/// transport layer drains the returned receiver and writes each string to
/// the WebSocket; this handle never performs I/O itself. Multiple nodes
/// coexist by holding multiple handles; there is no global state.
pub struct Node {
    sender: flume::Sender<String>,
    sessions: DashMap<GuildId, Arc<GuildSession>>,
}

impl Node {
    /// Create a node handle and the receiver the transport drains.
    pub fn new() -> (Arc<Self>, flume::Receiver<String>) {
        let (sender, receiver) = flume::unbounded();
        let node = Arc::new(Self {
            sender,
            sessions: DashMap::new(),
        });
        (node, receiver)
    }

    /// Ask the node to keep this session resumable across reconnects.
    pub fn configure_resuming(&self, resume: &ResumeConfig) -> Result<()> {
        debug!(timeout = resume.timeout, "configuring resuming");
        self.send(&OutgoingMessage::configure_resuming(
            &resume.key,
            resume.timeout,
        ))
    }

    /// Get or create the session for a guild.
    pub fn session(&self, guild_id: GuildId) -> Arc<GuildSession> {
        self.sessions
            .entry(guild_id)
            .or_insert_with(|| Arc::new(GuildSession::new(guild_id, self.sender.clone())))
            .clone()
    }

    /// The session for a guild, if one was created.
    pub fn get_session(&self, guild_id: GuildId) -> Option<Arc<GuildSession>> {
        self.sessions.get(&guild_id).map(|s| s.clone())
    }

    /// Tear down the guild's player on the node and drop its session.
    ///
    /// The destroy payload is sent even when no local session exists: after a
    /// resumed connection the node can hold players this registry never saw.
    pub fn destroy(&self, guild_id: GuildId) -> Result<()> {
        self.sessions.remove(&guild_id);
        debug!(guild = %guild_id, "destroying player");
        self.send(&OutgoingMessage::destroy(guild_id))
    }

    /// Number of live guild sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    fn send(&self, msg: &OutgoingMessage) -> Result<()> {
        super::send_payload(&self.sender, msg)
    }
}
