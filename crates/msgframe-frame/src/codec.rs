use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::{debug, trace};

use crate::error::{FrameError, Result};

/// Frame header: length (4) + id (4) = 8 bytes.
pub const HEADER_SIZE: usize = 8;

/// Maximum declared payload length accepted by the decoder.
pub const MAX_FRAME_SIZE: usize = 4096;

/// The decoded fixed-size prefix of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Declared payload length in bytes.
    pub length: u32,
    /// Application-defined message type.
    pub id: u32,
}

impl FrameHeader {
    /// Number of payload bytes that follow this header on the wire.
    pub fn payload_len(&self) -> usize {
        self.length as usize
    }
}

/// One unit of application data.
///
/// `length` is carried as its own field and written to the wire verbatim;
/// it is not required to match `payload.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    length: u32,
    id: u32,
    payload: Bytes,
}

impl Message {
    /// Create a message whose declared length is the payload size.
    pub fn new(id: u32, payload: impl Into<Bytes>) -> Self {
        let payload = payload.into();
        let length = u32::try_from(payload.len()).unwrap_or(u32::MAX);
        Self {
            length,
            id,
            payload,
        }
    }

    /// Create a message with an explicitly declared length.
    pub fn with_length(length: u32, id: u32, payload: impl Into<Bytes>) -> Self {
        Self {
            length,
            id,
            payload: payload.into(),
        }
    }

    /// Assemble a message from a decoded header and its payload.
    pub fn from_parts(header: FrameHeader, payload: impl Into<Bytes>) -> Self {
        Self::with_length(header.length, header.id, payload)
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    pub fn into_payload(self) -> Bytes {
        self.payload
    }

    /// The header this message encodes to.
    pub fn header(&self) -> FrameHeader {
        FrameHeader {
            length: self.length,
            id: self.id,
        }
    }

    /// The total wire size of this message (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a message into a newly allocated frame.
///
/// Wire format:
/// ```text
/// ┌───────────┬───────────┬─────────────────────┐
/// │ Length    │ Id        │ Payload             │
/// │ (4B LE)   │ (4B LE)   │ (payload.len() B)   │
/// └───────────┴───────────┴─────────────────────┘
/// ```
///
/// Fails with [`FrameError::Encoding`] if the frame buffer cannot be allocated.
pub fn encode(msg: &Message) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(msg.wire_size())?;
    out.put_u32_le(msg.length);
    out.put_u32_le(msg.id);
    out.put_slice(&msg.payload);
    trace!(
        length = msg.length,
        id = msg.id,
        payload_size = msg.payload.len(),
        "encoded frame"
    );
    Ok(out)
}

/// Append the encoded frame for `msg` to `dst`.
pub fn encode_into(msg: &Message, dst: &mut BytesMut) {
    dst.reserve(msg.wire_size());
    dst.put_u32_le(msg.length);
    dst.put_u32_le(msg.id);
    dst.put_slice(&msg.payload);
}

/// Decode the fixed header at the start of `src`.
///
/// Only the first [`HEADER_SIZE`] bytes are examined; payload bytes need not
/// be present yet.
pub fn decode_header(src: &[u8], max_frame_size: usize) -> Result<FrameHeader> {
    if src.len() < HEADER_SIZE {
        debug!(have = src.len(), "rejecting truncated frame header");
        return Err(FrameError::TruncatedHeader {
            need: HEADER_SIZE,
            have: src.len(),
        });
    }

    let mut header = &src[..HEADER_SIZE];
    let length = header.get_u32_le();
    let id = header.get_u32_le();

    if length as usize > max_frame_size {
        debug!(length, id, max = max_frame_size, "rejecting oversized frame");
        return Err(FrameError::FrameTooLarge {
            size: length as usize,
            max: max_frame_size,
        });
    }

    trace!(length, id, "decoded frame header");
    Ok(FrameHeader { length, id })
}

/// Decode one complete message from an accumulating buffer.
///
/// Returns `Ok(None)` if the header or the declared payload has not fully
/// arrived yet. An oversized header is rejected as soon as it is readable.
/// On success, consumes the frame bytes from the buffer.
pub fn decode_message(src: &mut BytesMut, max_frame_size: usize) -> Result<Option<Message>> {
    if src.len() < HEADER_SIZE {
        return Ok(None); // Need more data
    }

    let header = decode_header(src, max_frame_size)?;

    let total = HEADER_SIZE + header.payload_len();
    if src.len() < total {
        src.reserve(total - src.len());
        return Ok(None); // Need more data
    }

    src.advance(HEADER_SIZE);
    // Copied out so the message never shares storage with the caller's buffer.
    let payload = Bytes::copy_from_slice(&src[..header.payload_len()]);
    src.advance(header.payload_len());

    Ok(Some(Message::from_parts(header, payload)))
}

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Maximum declared payload length in bytes. Default: 4096.
    pub max_frame_size: usize,
}

impl FrameConfig {
    pub fn with_max_frame_size(max_frame_size: usize) -> Self {
        Self { max_frame_size }
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frame_size: MAX_FRAME_SIZE,
        }
    }
}
