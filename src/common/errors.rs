use thiserror::Error;

use crate::protocol::tracks::TrackError;

/// Errors surfaced by the client command layer.
///
/// Payload construction itself never fails; everything here comes from the
/// edges: encoding, the outbound sink, configuration, or track tokens.
#[derive(Debug, Error)]
pub enum Error {
    /// Serializing a payload to JSON failed.
    #[error("failed to encode payload: {0}")]
    Encode(#[from] serde_json::Error),

    /// The transport end of the outbound sink has been dropped.
    #[error("connection to the node is closed")]
    ConnectionClosed,

    /// Neither `config.toml` nor `config.default.toml` was found.
    #[error("config.toml or config.default.toml not found")]
    ConfigMissing,

    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    ConfigRead(#[from] std::io::Error),

    /// The configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A track token could not be decoded.
    #[error(transparent)]
    Track(#[from] TrackError),
}

/// Convenient Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
