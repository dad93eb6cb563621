//! Wire records for the ping pong simulation
//!
//! A drawing layer or trace tool receives per-frame records as postcard
//! bytes. Streams of records are COBS framed so they can be concatenated
//! into a single file and split again on the zero delimiter.

use postcard::{from_bytes, from_bytes_cobs, to_allocvec, to_allocvec_cobs};

// ============================================================================
// Records
// ============================================================================

/// Held actions fed into one frame
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InputFrame {
    pub frame: u64,
    /// Bitset of held actions, same layout as the simulation's action flags
    pub actions: u8,
    pub dt_ms: f64,
}

/// Renderable state after one frame
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StateFrame {
    pub frame: u64,
    pub left_y: f64,
    pub right_y: f64,
    pub ball_x: f64,
    pub ball_y: f64,
    pub score_left: u32,
    pub score_right: u32,
    pub paused: bool,
    pub ai_right: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum TraceRecord {
    /// First record of a trace: the seed the session was created with
    Header { seed: u64 },

    /// Input applied on a frame
    Input(InputFrame),

    /// State observed after the frame's input was applied
    State(StateFrame),
}

// ============================================================================
// Serialization Helpers
// ============================================================================

impl TraceRecord {
    /// Serialize a single record to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize a single record from bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}

/// Encode records as one COBS-framed byte stream
pub fn encode_trace(records: &[TraceRecord]) -> Result<Vec<u8>, postcard::Error> {
    let mut out = Vec::new();
    for record in records {
        out.extend(to_allocvec_cobs(record)?);
    }
    Ok(out)
}

/// Split a COBS-framed stream back into records
pub fn decode_trace(mut bytes: Vec<u8>) -> Result<Vec<TraceRecord>, postcard::Error> {
    let mut records = Vec::new();
    for chunk in bytes.split_inclusive_mut(|b| *b == 0) {
        records.push(from_bytes_cobs(chunk)?);
    }
    Ok(records)
}
