use std::fmt;
use std::io;

use msgframe_frame::FrameError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => USAGE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Io(source) => io_error(context, source),
        FrameError::TruncatedHeader { .. }
        | FrameError::TruncatedPayload { .. }
        | FrameError::FrameTooLarge { .. } => {
            CliError::new(DATA_INVALID, format!("{context}: {err}"))
        }
        FrameError::ConnectionClosed => CliError::new(FAILURE, format!("{context}: {err}")),
        FrameError::Encoding(_) => CliError::new(INTERNAL, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_frames_map_to_data_invalid() {
        let err = frame_error(
            "decode failed",
            FrameError::FrameTooLarge {
                size: 5000,
                max: 4096,
            },
        );
        assert_eq!(err.code, DATA_INVALID);
        assert_eq!(
            err.message,
            "decode failed: frame too large (5000 bytes, max 4096)"
        );

        let err = frame_error("decode failed", FrameError::TruncatedHeader { need: 8, have: 2 });
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn io_errors_map_by_kind() {
        let err = io_error("read", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.code, USAGE);

        let err = frame_error("read", FrameError::Io(io::Error::other("boom")));
        assert_eq!(err.code, INTERNAL);
    }
}
