//! `tokio_util::codec` adapter for use with `FramedRead` / `FramedWrite`.

use bytes::BytesMut;
use tokio_util::codec::{Decoder, Encoder};

use crate::codec::{decode_message, encode_into, FrameConfig, Message};
use crate::error::FrameError;

/// Stream codec over the length + id frame format.
#[derive(Debug, Clone, Default)]
pub struct MessageCodec {
    config: FrameConfig,
}

impl MessageCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FrameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl Decoder for MessageCodec {
    type Item = Message;
    type Error = FrameError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        decode_message(src, self.config.max_frame_size)
    }
}

impl Encoder<Message> for MessageCodec {
    type Error = FrameError;

    fn encode(&mut self, item: Message, dst: &mut BytesMut) -> Result<(), Self::Error> {
        let declared = item.length() as usize;
        if declared > self.config.max_frame_size {
            return Err(FrameError::FrameTooLarge {
                size: declared,
                max: self.config.max_frame_size,
            });
        }
        encode_into(&item, dst);
        Ok(())
    }
}
