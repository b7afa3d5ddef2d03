//! Length-prefixed binary message framing.
//!
//! msgframe converts a message (32-bit id + opaque payload) into an 8-byte
//! little-endian header followed by the payload, and decodes that header
//! back under a size bound so a hostile peer cannot force large allocations.
//!
//! # Crate Structure
//!
//! - [`frame`] — Message type, encoder, two-stage decoder and stream adapters

/// Re-export frame types.
pub mod frame {
    pub use msgframe_frame::*;
}

pub use msgframe_frame::{
    decode_header, encode, FrameError, FrameHeader, Message, MAX_FRAME_SIZE,
};
