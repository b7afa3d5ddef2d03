use std::io::Cursor;

use msgframe_frame::{
    decode_header, encode, read_payload, FrameError, FrameHeader, Message, HEADER_SIZE,
    MAX_FRAME_SIZE,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_header_then_payload_roundtrip(
        id in any::<u32>(),
        payload in proptest::collection::vec(any::<u8>(), 0..=MAX_FRAME_SIZE),
    ) {
        let msg = Message::new(id, payload.clone());
        let wire = encode(&msg).unwrap();
        prop_assert_eq!(wire.len(), HEADER_SIZE + payload.len());

        let header = decode_header(&wire, MAX_FRAME_SIZE).unwrap();
        prop_assert_eq!(header, FrameHeader { length: payload.len() as u32, id });

        let mut rest = Cursor::new(&wire[HEADER_SIZE..]);
        let decoded = read_payload(&mut rest, header.payload_len()).unwrap();
        prop_assert_eq!(decoded.as_ref(), payload.as_slice());
    }

    #[test]
    fn prop_encode_is_pure(id in any::<u32>(), length in any::<u32>(), payload in any::<Vec<u8>>()) {
        let msg = Message::with_length(length, id, payload);
        let before = msg.clone();
        let first = encode(&msg).unwrap();
        let second = encode(&msg).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(msg, before);
    }

    #[test]
    fn prop_size_bound_enforced(length in any::<u32>(), id in any::<u32>()) {
        let mut wire = length.to_le_bytes().to_vec();
        wire.extend_from_slice(&id.to_le_bytes());

        match decode_header(&wire, MAX_FRAME_SIZE) {
            Ok(header) => {
                prop_assert!(header.payload_len() <= MAX_FRAME_SIZE);
                prop_assert_eq!(header, FrameHeader { length, id });
            }
            Err(FrameError::FrameTooLarge { size, max }) => {
                prop_assert!(size > MAX_FRAME_SIZE);
                prop_assert_eq!(max, MAX_FRAME_SIZE);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    #[test]
    fn prop_short_input_is_truncated(bytes in proptest::collection::vec(any::<u8>(), 0..HEADER_SIZE)) {
        let result = decode_header(&bytes, MAX_FRAME_SIZE);
        let is_truncated = matches!(result, Err(FrameError::TruncatedHeader { .. }));
        prop_assert!(is_truncated);
    }
}

#[test]
fn sample_message_frame() {
    let msg = Message::with_length(8, 100, &b"hello goku"[..]);
    let wire = encode(&msg).unwrap();

    let mut expected = vec![0x08, 0x00, 0x00, 0x00, 0x64, 0x00, 0x00, 0x00];
    expected.extend_from_slice(b"hello goku");
    assert_eq!(wire, expected);

    let header = decode_header(&wire[..HEADER_SIZE], MAX_FRAME_SIZE).unwrap();
    assert_eq!(header, FrameHeader { length: 8, id: 100 });
}

#[test]
fn encode_and_decode_across_threads() {
    let handles: Vec<_> = (0..8u32)
        .map(|id| {
            std::thread::spawn(move || {
                let wire = encode(&Message::new(id, vec![id as u8; 64])).unwrap();
                decode_header(&wire, MAX_FRAME_SIZE).unwrap()
            })
        })
        .collect();

    for (id, handle) in handles.into_iter().enumerate() {
        let header = handle.join().unwrap();
        assert_eq!(header, FrameHeader { length: 64, id: id as u32 });
    }
}
