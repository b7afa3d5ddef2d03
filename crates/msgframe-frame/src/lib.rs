//! Length-prefixed message framing.
//!
//! Every message is framed with an 8-byte header:
//! - A 4-byte little-endian declared payload length
//! - A 4-byte little-endian message id
//!
//! followed by the raw payload. Decoding is split in two stages: the fixed
//! header is decoded and size-checked first, then exactly `length` payload
//! bytes are read from the same stream.

#[cfg(feature = "async")]
pub mod async_codec;
pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

#[cfg(feature = "async")]
pub use async_codec::MessageCodec;
pub use codec::{
    decode_header, decode_message, encode, encode_into, FrameConfig, FrameHeader, Message,
    HEADER_SIZE, MAX_FRAME_SIZE,
};
pub use error::{FrameError, Result};
pub use reader::{read_payload, FrameReader};
pub use writer::FrameWriter;
