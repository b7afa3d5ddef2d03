use std::collections::TryReserveError;

/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// Fewer bytes were supplied than the fixed header requires.
    #[error("truncated frame header ({have} bytes, need {need})")]
    TruncatedHeader { need: usize, have: usize },

    /// The stream ended before the declared payload was fully read.
    #[error("truncated frame payload ({have} bytes, need {need})")]
    TruncatedPayload { need: usize, have: usize },

    /// The declared payload length exceeds the configured maximum.
    #[error("frame too large ({size} bytes, max {max})")]
    FrameTooLarge { size: usize, max: usize },

    /// The output buffer could not be grown to hold the frame.
    #[error("frame encoding failed: {0}")]
    Encoding(#[from] TryReserveError),

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream was closed on a frame boundary.
    #[error("connection closed")]
    ConnectionClosed,
}

impl FrameError {
    /// True when more input may still complete the frame.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FrameError::TruncatedHeader { .. } | FrameError::TruncatedPayload { .. }
        )
    }

    /// True when the peer sent a frame that must not be accepted; the stream
    /// should be reset rather than retried.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, FrameError::FrameTooLarge { .. })
    }
}

pub type Result<T> = std::result::Result<T, FrameError>;
