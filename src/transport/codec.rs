//! Length-prefix framing codec.
//!
//! Messages on the wire are delimited by a 4-byte big-endian length prefix.
//! The codec is installed as a filter in front of the transport pool at
//! `start` and is opaque to the orchestrator afterwards; each connection gets
//! its own codec instance from the factory so reassembly buffers are never
//! shared.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{self, Result};

/// Frames larger than this are treated as stream corruption.
const MAX_FRAME_LEN: usize = 64 * 1024 * 1024;

const LENGTH_PREFIX_LEN: usize = 4;

/// Per-connection message boundary codec.
pub trait Codec: Send {
    /// Wrap one outbound message into its wire form.
    fn encode(&mut self, data: Bytes) -> Result<Bytes>;

    /// Feed inbound bytes into the reassembly buffer.
    fn feed(&mut self, data: &[u8]);

    /// Pop the next complete message, if the buffer holds one.
    fn decode(&mut self) -> Result<Option<Bytes>>;
}

/// Creates one [`Codec`] per connection.
pub trait CodecFactory: Send + Sync {
    fn build(&self) -> Box<dyn Codec>;
}

/// 4-byte big-endian length prefix framing.
#[derive(Debug, Default)]
pub struct LengthPrefixCodec {
    buffer: BytesMut,
}

impl LengthPrefixCodec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Codec for LengthPrefixCodec {
    fn encode(&mut self, data: Bytes) -> Result<Bytes> {
        if data.len() > MAX_FRAME_LEN {
            return Err(error::codec(format!(
                "outbound frame of {} bytes exceeds limit of {MAX_FRAME_LEN}",
                data.len()
            )));
        }

        let mut framed = BytesMut::with_capacity(LENGTH_PREFIX_LEN + data.len());
        framed.put_u32(data.len() as u32);
        framed.extend_from_slice(&data);
        Ok(framed.freeze())
    }

    fn feed(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    fn decode(&mut self) -> Result<Option<Bytes>> {
        if self.buffer.len() < LENGTH_PREFIX_LEN {
            return Ok(None);
        }

        let len = u32::from_be_bytes([
            self.buffer[0],
            self.buffer[1],
            self.buffer[2],
            self.buffer[3],
        ]) as usize;

        if len > MAX_FRAME_LEN {
            return Err(error::codec(format!(
                "inbound frame of {len} bytes exceeds limit of {MAX_FRAME_LEN}"
            )));
        }

        if self.buffer.len() < LENGTH_PREFIX_LEN + len {
            return Ok(None);
        }

        self.buffer.advance(LENGTH_PREFIX_LEN);
        Ok(Some(self.buffer.split_to(len).freeze()))
    }
}

/// Factory for [`LengthPrefixCodec`] instances.
#[derive(Debug, Default)]
pub struct LengthPrefixCodecFactory;

impl CodecFactory for LengthPrefixCodecFactory {
    fn build(&self) -> Box<dyn Codec> {
        Box::new(LengthPrefixCodec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_prepends_length() {
        let mut codec = LengthPrefixCodec::new();
        let framed = codec.encode(Bytes::from_static(b"abc")).unwrap();
        assert_eq!(&framed[..], &[0, 0, 0, 3, b'a', b'b', b'c']);
    }

    #[test]
    fn test_decode_handles_split_and_coalesced_frames() {
        let mut codec = LengthPrefixCodec::new();

        // First frame arrives in two pieces, second arrives glued to the rest.
        codec.feed(&[0, 0, 0, 2, b'h']);
        assert!(codec.decode().unwrap().is_none());

        codec.feed(&[b'i', 0, 0, 0, 3, b'x', b'y', b'z']);
        assert_eq!(codec.decode().unwrap().unwrap(), Bytes::from_static(b"hi"));
        assert_eq!(codec.decode().unwrap().unwrap(), Bytes::from_static(b"xyz"));
        assert!(codec.decode().unwrap().is_none());
    }

    #[test]
    fn test_decode_allows_empty_frame() {
        let mut codec = LengthPrefixCodec::new();
        codec.feed(&[0, 0, 0, 0]);
        assert_eq!(codec.decode().unwrap().unwrap(), Bytes::new());
    }

    #[test]
    fn test_decode_rejects_oversize_frame() {
        let mut codec = LengthPrefixCodec::new();
        codec.feed(&[0xFF, 0xFF, 0xFF, 0xFF]);
        let err = codec.decode().unwrap_err();
        assert!(err.is_codec());
    }

    #[test]
    fn test_round_trip_through_encode_and_decode() {
        let mut codec = LengthPrefixCodec::new();
        let framed = codec.encode(Bytes::from_static(b"handshake-rsp")).unwrap();
        codec.feed(&framed);
        assert_eq!(
            codec.decode().unwrap().unwrap(),
            Bytes::from_static(b"handshake-rsp")
        );
    }
}
