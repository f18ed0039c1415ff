use serde::Serializer;

/// A guild (chat-server) identifier.
///
/// Stored as the platform's 64-bit snowflake but rendered as a decimal
/// string on the wire, which is what the node expects in `guildId` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GuildId(pub u64);

impl serde::Serialize for GuildId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl From<u64> for GuildId {
    fn from(u: u64) -> Self {
        Self(u)
    }
}

impl std::fmt::Display for GuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
