use std::io::{ErrorKind, Read};

use bytes::Bytes;
use tracing::trace;

use crate::codec::{decode_header, FrameConfig, FrameHeader, Message, HEADER_SIZE};
use crate::error::{FrameError, Result};

/// Read exactly `length` payload bytes from `reader`.
///
/// The second half of a header-then-payload decode: once a header has been
/// decoded, its declared length is read from the same stream into a new
/// buffer owned by the caller.
pub fn read_payload<R: Read>(reader: &mut R, length: usize) -> Result<Bytes> {
    let mut payload = Vec::new();
    payload.try_reserve_exact(length)?;
    payload.resize(length, 0);

    let filled = read_full(reader, &mut payload)?;
    if filled < length {
        return Err(FrameError::TruncatedPayload {
            need: length,
            have: filled,
        });
    }

    Ok(Bytes::from(payload))
}

/// Fill `buf` from `reader`, returning fewer bytes only on EOF.
fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0usize;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(FrameError::Io(err)),
        }
    }
    Ok(filled)
}

/// Reads frames from any `Read` stream in two stages: header, then payload.
///
/// Handles partial reads internally.
pub struct FrameReader<T> {
    inner: T,
    config: FrameConfig,
}

impl<T: Read> FrameReader<T> {
    /// Create a new frame reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new frame reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self { inner, config }
    }

    /// Read and validate the next frame header (blocking).
    ///
    /// Returns `Err(FrameError::ConnectionClosed)` when EOF is reached before
    /// any header byte, and `Err(FrameError::TruncatedHeader)` when EOF cuts a
    /// header short.
    pub fn read_header(&mut self) -> Result<FrameHeader> {
        let mut header = [0u8; HEADER_SIZE];
        let filled = read_full(&mut self.inner, &mut header)?;
        if filled == 0 {
            return Err(FrameError::ConnectionClosed);
        }
        decode_header(&header[..filled], self.config.max_frame_size)
    }

    /// Read the payload declared by `header` (blocking).
    pub fn read_payload(&mut self, header: &FrameHeader) -> Result<Bytes> {
        read_payload(&mut self.inner, header.payload_len())
    }

    /// Read the next complete message (blocking).
    pub fn read_message(&mut self) -> Result<Message> {
        let header = self.read_header()?;
        let payload = self.read_payload(&header)?;
        trace!(length = header.length, id = header.id, "read message");
        Ok(Message::from_parts(header, payload))
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Update maximum frame size for subsequent header decoding.
    pub fn set_max_frame_size(&mut self, max_frame_size: usize) {
        self.config.max_frame_size = max_frame_size;
    }

    /// Current frame reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}
