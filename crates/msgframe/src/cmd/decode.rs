use std::io::Cursor;

use msgframe_frame::{decode_header, read_payload, FrameConfig, FrameError, HEADER_SIZE};
use tracing::{debug, warn};

use crate::cmd::{parse_hex, read_file, read_stdin, DecodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{payload_preview, print_decoded, DecodedReport, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat, config: &FrameConfig) -> CliResult<i32> {
    let input = match (&args.hex, &args.file) {
        (Some(hex), _) => parse_hex(hex)?,
        (None, Some(path)) => read_file(path)?,
        (None, None) => read_stdin()?,
    };
    debug!(input_size = input.len(), "decoding frame");

    let report = decode_frame(&input, config, args.strict)?;
    print_decoded(&report, format);

    Ok(SUCCESS)
}

/// Decode the header, then read up to the declared payload from the bytes
/// that follow it.
fn decode_frame(input: &[u8], config: &FrameConfig, strict: bool) -> CliResult<DecodedReport> {
    let header = decode_header(input, config.max_frame_size)
        .map_err(|err| frame_error("decode failed", err))?;

    let body = &input[HEADER_SIZE..];
    let (payload, complete) = match read_payload(&mut Cursor::new(body), header.payload_len()) {
        Ok(payload) => (payload.to_vec(), true),
        Err(err @ FrameError::TruncatedPayload { .. }) => {
            if strict {
                return Err(frame_error("decode failed", err));
            }
            warn!(%err, "payload incomplete");
            (body.to_vec(), false)
        }
        Err(err) => return Err(frame_error("payload read failed", err)),
    };

    Ok(DecodedReport {
        id: header.id,
        length: header.length,
        payload_size: payload.len(),
        payload_complete: complete,
        trailing_bytes: body.len() - payload.len(),
        payload: payload_preview(&payload),
        payload_bytes: payload,
    })
}

#[cfg(test)]
mod tests {
    use msgframe_frame::{encode, Message};

    use super::*;
    use crate::exit::DATA_INVALID;

    #[test]
    fn declared_length_shorter_than_body_leaves_trailing_bytes() {
        let wire = encode(&Message::with_length(8, 100, &b"hello goku"[..])).unwrap();
        let report = decode_frame(&wire, &FrameConfig::default(), false).unwrap();

        assert_eq!(report.id, 100);
        assert_eq!(report.length, 8);
        assert_eq!(report.payload, "hello go");
        assert!(report.payload_complete);
        assert_eq!(report.trailing_bytes, 2);
    }

    #[test]
    fn header_only_input_is_incomplete_but_ok() {
        let wire = encode(&Message::with_length(32, 1, Vec::new())).unwrap();
        let report = decode_frame(&wire, &FrameConfig::default(), false).unwrap();

        assert_eq!(report.length, 32);
        assert_eq!(report.payload_size, 0);
        assert!(!report.payload_complete);
    }

    #[test]
    fn strict_mode_rejects_incomplete_payload() {
        let wire = encode(&Message::with_length(32, 1, &b"short"[..])).unwrap();
        let err = decode_frame(&wire, &FrameConfig::default(), true).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn oversize_and_truncated_headers_are_data_invalid() {
        let wire = encode(&Message::with_length(4097, 1, Vec::new())).unwrap();
        let err = decode_frame(&wire, &FrameConfig::default(), false).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);

        let err = decode_frame(&[1, 2, 3], &FrameConfig::default(), false).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn configured_bound_is_used() {
        let wire = encode(&Message::new(1, vec![0u8; 100])).unwrap();
        let err = decode_frame(&wire, &FrameConfig::with_max_frame_size(99), false).unwrap_err();
        assert_eq!(err.code, DATA_INVALID);
    }
}
