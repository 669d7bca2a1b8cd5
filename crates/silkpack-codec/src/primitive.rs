//! The boundary to the external per-frame codec.
//!
//! The SILK compression math itself (LPC analysis, NLSF quantization, range
//! coding) lives behind these traits. The adapter in [`crate::stream`] only
//! assumes: an encoder turns exactly one fixed-size PCM frame into zero or
//! more compressed bytes, and a decoder turns one compressed payload into
//! zero or more PCM samples, possibly holding further frames internally.

use crate::pcm::samples_per_frame;

/// SILK packs at most this many frames into one packet, which bounds the
/// continuation drain on decode.
pub const MAX_FRAMES_PER_PACKET: usize = 5;

/// Errors reported by a codec primitive.
#[derive(Debug, thiserror::Error)]
pub enum PrimitiveError {
    /// The underlying codec returned a nonzero status code.
    #[error("codec error {code} during {op}")]
    Codec { op: &'static str, code: i32 },

    /// The primitive rejected its configuration.
    #[error("codec rejected configuration: {0}")]
    Config(String),
}

/// Initialization parameters for a frame encoder.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Sample rate of the PCM fed to the encoder.
    pub sample_rate: u32,
    /// Ceiling for the codec's internal rate; the codec may downsample
    /// internally but never above this.
    pub max_internal_sample_rate: u32,
    /// Samples per frame; must equal `samples_per_frame(sample_rate)`.
    pub frame_samples: usize,
    /// Target bit rate in bits per second.
    pub bit_rate: u32,
    /// Codec complexity, 0 (lowest) to 2 (highest).
    pub complexity: u32,
    /// In-band forward error correction.
    pub use_in_band_fec: bool,
    /// Discontinuous transmission (silence frames produce no bytes).
    pub use_dtx: bool,
}

impl EncoderConfig {
    /// Voice-message defaults at the given rate.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            max_internal_sample_rate: sample_rate.min(24000),
            frame_samples: samples_per_frame(sample_rate),
            bit_rate: 25000,
            complexity: 2,
            use_in_band_fec: false,
            use_dtx: false,
        }
    }
}

/// One decoder invocation's output.
#[derive(Debug, Default)]
pub struct DecodedFrame {
    /// PCM samples produced by this invocation; may be empty.
    pub samples: Vec<i16>,
    /// True while the decoder holds further frames from the same payload;
    /// drain them by decoding with an empty input.
    pub more_pending: bool,
}

/// Per-frame encoder: exactly one fixed-size PCM frame in, compressed
/// bytes out.
pub trait FrameEncoder {
    /// Encode one frame. An empty return is legal (DTX) and means the frame
    /// produced no container record.
    fn encode_frame(&mut self, frame: &[i16]) -> Result<Vec<u8>, PrimitiveError>;
}

/// Per-frame decoder with internal multi-frame continuation.
pub trait FrameDecoder {
    /// Decode one compressed payload. With an empty `payload`, emit the
    /// next internally pending frame instead.
    fn decode_frame(&mut self, payload: &[u8]) -> Result<DecodedFrame, PrimitiveError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_track_rate() {
        let config = EncoderConfig::new(24000);
        assert_eq!(config.frame_samples, 480);
        assert_eq!(config.max_internal_sample_rate, 24000);

        let config = EncoderConfig::new(48000);
        assert_eq!(config.frame_samples, 960);
        assert_eq!(config.max_internal_sample_rate, 24000);

        let config = EncoderConfig::new(8000);
        assert_eq!(config.max_internal_sample_rate, 8000);
    }
}
