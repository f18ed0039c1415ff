pub mod handle;
pub mod session;

pub use handle::*;
pub use session::*;

use crate::common::errors::{Error, Result};
use crate::protocol::payloads::OutgoingMessage;

/// Serialize a payload and push it into the outbound sink.
///
/// The transport drains the other end and writes each string as one
/// connection message; a dropped receiver means the connection is gone.
pub(crate) fn send_payload(sender: &flume::Sender<String>, msg: &OutgoingMessage) -> Result<()> {
    let json = serde_json::to_string(msg)?;
    tracing::trace!(op = msg.op(), guild = ?msg.guild_id(), "sending payload");
    sender.send(json).map_err(|_| Error::ConnectionClosed)
}
