use serde::{Deserialize, Serialize};

/// Connection details for one audio node.
///
/// Consumed by the transport layer when opening the WebSocket; this crate
/// only carries the values.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NodeConfig {
    pub host: String,
    pub port: u16,
    pub password: String,
    /// Use wss/https instead of ws/http.
    #[serde(default)]
    pub secure: bool,
    /// Bot user id sent in the connection handshake.
    pub user_id: u64,
    #[serde(default = "default_num_shards")]
    pub num_shards: u64,
}

fn default_num_shards() -> u64 {
    1
}

/// Session resuming parameters, sent via the `configureResuming` op.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResumeConfig {
    /// Resume key the transport presents when reconnecting.
    pub key: String,
    /// Seconds the node keeps the session alive after a disconnect.
    pub timeout: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub filters: Option<String>,
}
