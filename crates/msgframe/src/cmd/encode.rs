use msgframe_frame::{encode, FrameConfig, Message};
use tracing::{info, warn};

use crate::cmd::{parse_hex, read_file, EncodeArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_encoded, EncodedReport, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat, config: &FrameConfig) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;
    let msg = build_message(args.id, args.length, payload);

    if msg.length() as usize != msg.payload().len() {
        warn!(
            length = msg.length(),
            payload_size = msg.payload().len(),
            "declared length differs from payload size"
        );
    }
    if msg.length() as usize > config.max_frame_size {
        warn!(
            length = msg.length(),
            max = config.max_frame_size,
            "declared length exceeds max frame size; peers will reject this frame"
        );
    }

    let frame = encode(&msg).map_err(|err| frame_error("encode failed", err))?;
    info!(id = msg.id(), frame_size = frame.len(), "encoded frame");

    let report = EncodedReport {
        id: msg.id(),
        length: msg.length(),
        payload_size: msg.payload().len(),
        frame_size: frame.len(),
        frame_hex: hex::encode(&frame),
        frame,
    };
    print_encoded(&report, format);

    Ok(SUCCESS)
}

fn resolve_payload(args: &EncodeArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(path) = &args.file {
        return read_file(path);
    }
    Ok(Vec::new())
}

fn build_message(id: u32, length: Option<u32>, payload: Vec<u8>) -> Message {
    match length {
        Some(length) => Message::with_length(length, id, payload),
        None => Message::new(id, payload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(data: Option<&str>, hex: Option<&str>) -> EncodeArgs {
        EncodeArgs {
            id: 1,
            length: None,
            data: data.map(str::to_string),
            hex: hex.map(str::to_string),
            file: None,
        }
    }

    #[test]
    fn payload_from_data_or_hex() {
        assert_eq!(resolve_payload(&args(Some("hi"), None)).unwrap(), b"hi");
        assert_eq!(
            resolve_payload(&args(None, Some("6869"))).unwrap(),
            b"hi"
        );
        assert!(resolve_payload(&args(None, None)).unwrap().is_empty());
    }

    #[test]
    fn explicit_length_is_kept() {
        let msg = build_message(100, Some(8), b"hello goku".to_vec());
        assert_eq!(msg.length(), 8);
        assert_eq!(msg.payload().len(), 10);

        let msg = build_message(100, None, b"hello goku".to_vec());
        assert_eq!(msg.length(), 10);
    }
}
