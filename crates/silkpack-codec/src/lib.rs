//! Codec adapter for SILK v3 voice containers.
//!
//! Splits PCM into fixed 20 ms frames for an external per-frame encoder and
//! reassembles decoder output across a container's frame records, including
//! the SDK's multi-frame continuation. The codec primitive sits behind the
//! [`primitive::FrameEncoder`]/[`primitive::FrameDecoder`] traits; the
//! `silk` feature provides the reference SDK binding.

pub mod error;
pub mod pcm;
pub mod primitive;
pub mod stream;

#[cfg(feature = "silk")]
pub mod silk;
#[cfg(feature = "silk")]
mod sys;

pub use error::{CodecError, Result};
pub use pcm::{samples_per_frame, FRAME_MS, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE};
pub use primitive::{
    DecodedFrame, EncoderConfig, FrameDecoder, FrameEncoder, PrimitiveError,
    MAX_FRAMES_PER_PACKET,
};
pub use stream::{decode_stream, encode_stream};

/// Encode PCM (16-bit LE mono) into a SILK container with the SDK encoder.
#[cfg(feature = "silk")]
pub fn encode(pcm: &[u8], sample_rate: u32) -> Result<Vec<u8>> {
    pcm::ensure_supported_rate(sample_rate)?;
    let encoder =
        silk::SilkEncoder::new(&EncoderConfig::new(sample_rate)).map_err(CodecError::Init)?;
    encode_stream(encoder, pcm, sample_rate)
}

/// Decode a SILK container into PCM (16-bit LE mono) with the SDK decoder.
#[cfg(feature = "silk")]
pub fn decode(container: &[u8], sample_rate: u32) -> Result<Vec<u8>> {
    pcm::ensure_supported_rate(sample_rate)?;
    let decoder = silk::SilkDecoder::new(sample_rate).map_err(CodecError::Init)?;
    decode_stream(decoder, container)
}
