//! Protocol module - line-delimited JSON accelerometer samples
//!
//! Each line carries one reading:
//!
//! ```text
//! {"type":"sample","x":0.01,"y":-0.98,"z":0.12}
//! ```
//!
//! `type` may be omitted (it defaults to `sample`); an optional `ts`
//! (milliseconds) is accepted and ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::AccelSample;

const SAMPLE_TYPE: &str = "sample";

/// Longest line a producer may send, excluding the newline.
pub const MAX_LINE_BYTES: usize = 1024;

fn default_type() -> String {
    SAMPLE_TYPE.to_string()
}

/// Wire form of one accelerometer reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleMessage {
    #[serde(rename = "type", default = "default_type")]
    pub msg_type: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<u64>,
}

impl From<AccelSample> for SampleMessage {
    fn from(s: AccelSample) -> Self {
        Self {
            msg_type: default_type(),
            x: s.x,
            y: s.y,
            z: s.z,
            ts: None,
        }
    }
}

/// Why a line was rejected.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("malformed sample: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported message type `{0}`")]
    UnsupportedType(String),
    #[error("non-finite axis value")]
    NonFinite,
    #[error("line is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Decode one raw line (trailing newline optional) into trimmed text.
pub fn decode_line(bytes: &[u8]) -> Result<&str, ProtocolError> {
    Ok(std::str::from_utf8(bytes)?.trim())
}

/// Parse one line into a sample.
pub fn parse_line(line: &str) -> Result<AccelSample, ProtocolError> {
    let msg: SampleMessage = serde_json::from_str(line)?;
    if msg.msg_type != SAMPLE_TYPE {
        return Err(ProtocolError::UnsupportedType(msg.msg_type));
    }
    if !(msg.x.is_finite() && msg.y.is_finite() && msg.z.is_finite()) {
        return Err(ProtocolError::NonFinite);
    }
    Ok(AccelSample::new(msg.x, msg.y, msg.z))
}

/// Serialize a sample as one protocol line (without the trailing newline).
pub fn encode_sample(sample: AccelSample) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(&SampleMessage::from(sample))?)
}
