use std::io::{Cursor, Read, Write};

use base64::prelude::*;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use serde::Serialize;
use thiserror::Error;

/// Why a track token failed to decode.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("track token is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    #[error("track token is truncated or malformed")]
    Malformed,
    #[error("unsupported track format version {0}")]
    UnsupportedVersion(u8),
}

/// A playable audio item: the opaque token the node consumes plus the
/// metadata it carries.
///
/// Play commands only ever read `encoded`; the decoded `info` exists so the
/// surrounding bot can show titles and durations without a round trip to the
/// node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Base64-encoded track token, as produced by the resolver.
    pub encoded: String,
    pub info: TrackInfo,
}

/// Metadata for an audio track.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfo {
    pub identifier: String,
    pub is_seekable: bool,
    pub author: String,
    /// Duration in milliseconds. 0 for live streams.
    pub length: u64,
    pub is_stream: bool,
    /// Starting playback position in milliseconds.
    pub position: u64,
    pub title: String,
    pub uri: Option<String>,
    pub source_name: String,
}

impl Track {
    /// Create a Track from metadata, producing its token.
    pub fn new(info: TrackInfo) -> Self {
        let mut track = Self {
            encoded: String::new(),
            info,
        };
        track.encoded = track.encode();
        track
    }

    /// Encode the track into a base64 token.
    ///
    /// Binary format (Lavaplayer-compatible, version 2):
    ///   [u32 header: payload_size | (flags << 30)]
    ///     flags bit 0 = TRACK_INFO_VERSIONED (version byte present)
    ///   [u8  version = 2]
    ///   [utf title]
    ///   [utf author]
    ///   [u64 length ms]
    ///   [utf identifier]
    ///   [u8  is_stream: 0/1]
    ///   [opt_utf uri]   -- v2+
    ///   [utf source_name]
    ///   [u64 position ms]
    pub fn encode(&self) -> String {
        let mut msg_buf = Vec::new();
        msg_buf.write_u8(2).unwrap();

        write_utf(&mut msg_buf, &self.info.title);
        write_utf(&mut msg_buf, &self.info.author);
        msg_buf.write_u64::<BigEndian>(self.info.length).unwrap();
        write_utf(&mut msg_buf, &self.info.identifier);
        msg_buf
            .write_u8(if self.info.is_stream { 1 } else { 0 })
            .unwrap();
        write_opt_utf(&mut msg_buf, self.info.uri.as_deref());
        write_utf(&mut msg_buf, &self.info.source_name);
        msg_buf.write_u64::<BigEndian>(self.info.position).unwrap();

        // Header: low 30 bits = payload size, high 2 bits = flags.
        let mut final_buf = Vec::new();
        let size = msg_buf.len() as u32;
        let flags: u32 = 1; // TRACK_INFO_VERSIONED
        let header = size | (flags << 30);
        final_buf.write_u32::<BigEndian>(header).unwrap();
        final_buf.extend_from_slice(&msg_buf);

        BASE64_STANDARD.encode(&final_buf)
    }

    /// Decode a track token received from the resolver.
    ///
    /// Supports Lavaplayer track format versions 1 and 2. Later format
    /// versions carry fields this layer does not know about and are refused
    /// rather than misread.
    pub fn decode(encoded: &str) -> Result<Self, TrackError> {
        let data = BASE64_STANDARD.decode(encoded)?;
        if data.len() < 4 {
            return Err(TrackError::Malformed);
        }

        let mut cursor = Cursor::new(data);
        let header = cursor
            .read_u32::<BigEndian>()
            .map_err(|_| TrackError::Malformed)?;
        let flags = (header >> 30) & 0x03;

        // Bit 0 of flags = TRACK_INFO_VERSIONED: version byte follows header.
        // If not set, assume version 1 (legacy format).
        let version = if (flags & 1) != 0 {
            cursor.read_u8().map_err(|_| TrackError::Malformed)?
        } else {
            1
        };

        if version > 2 {
            return Err(TrackError::UnsupportedVersion(version));
        }

        let title = read_utf(&mut cursor).ok_or(TrackError::Malformed)?;
        let author = read_utf(&mut cursor).ok_or(TrackError::Malformed)?;
        let length = cursor
            .read_u64::<BigEndian>()
            .map_err(|_| TrackError::Malformed)?;
        let identifier = read_utf(&mut cursor).ok_or(TrackError::Malformed)?;
        let is_stream = cursor.read_u8().map_err(|_| TrackError::Malformed)? != 0;

        let uri = if version >= 2 {
            read_opt_utf(&mut cursor)
        } else {
            None
        };

        let source_name = read_utf(&mut cursor).ok_or(TrackError::Malformed)?;

        // Position is at the end; treat missing as 0.
        let position = cursor.read_u64::<BigEndian>().unwrap_or(0);

        Ok(Self {
            encoded: encoded.to_string(),
            info: TrackInfo {
                identifier,
                is_seekable: !is_stream,
                author,
                length,
                is_stream,
                position,
                title,
                uri,
                source_name,
            },
        })
    }
}

fn write_utf(w: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    w.write_u16::<BigEndian>(bytes.len() as u16).unwrap();
    w.write_all(bytes).unwrap();
}

fn write_opt_utf(w: &mut Vec<u8>, s: Option<&str>) {
    match s {
        Some(s) => {
            w.write_u8(1).unwrap();
            write_utf(w, s);
        }
        None => {
            w.write_u8(0).unwrap();
        }
    }
}

fn read_utf<R: Read>(r: &mut R) -> Option<String> {
    let len = r.read_u16::<BigEndian>().ok()? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf).ok()?;
    String::from_utf8(buf).ok()
}

fn read_opt_utf<R: Read>(r: &mut R) -> Option<String> {
    let present = r.read_u8().ok()? != 0;
    if present { read_utf(r) } else { None }
}
