//! PCM sample handling: 16-bit signed little-endian, mono.

use crate::error::{CodecError, Result};

/// Frame duration. A protocol constant, not a per-stream setting.
pub const FRAME_MS: u32 = 20;

/// Lowest sample rate the codec accepts.
pub const MIN_SAMPLE_RATE: u32 = 8000;

/// Highest sample rate the codec accepts.
pub const MAX_SAMPLE_RATE: u32 = 48000;

/// Samples per 20 ms frame at the given rate.
///
/// Uses integer millisecond arithmetic (`rate / 1000 * 20`), so rates that
/// are not a multiple of 1000 truncate (44100 Hz → 880 samples).
pub fn samples_per_frame(sample_rate: u32) -> usize {
    (sample_rate / 1000 * FRAME_MS) as usize
}

/// Validate a caller-declared sample rate.
pub fn ensure_supported_rate(sample_rate: u32) -> Result<()> {
    if (MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&sample_rate) {
        Ok(())
    } else {
        Err(CodecError::UnsupportedSampleRate {
            rate: sample_rate,
            min: MIN_SAMPLE_RATE,
            max: MAX_SAMPLE_RATE,
        })
    }
}

/// Reinterpret a PCM byte buffer as samples.
///
/// Fails on odd byte length; a stray trailing byte means the input is not
/// sample-aligned.
pub fn bytes_to_samples(pcm: &[u8]) -> Result<Vec<i16>> {
    if pcm.len() % 2 != 0 {
        return Err(CodecError::MalformedPcmLength { len: pcm.len() });
    }
    Ok(pcm
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

/// Serialize samples back to a PCM byte buffer.
pub fn samples_to_bytes(samples: &[i16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_sizes_at_common_rates() {
        assert_eq!(samples_per_frame(8000), 160);
        assert_eq!(samples_per_frame(16000), 320);
        assert_eq!(samples_per_frame(24000), 480);
        assert_eq!(samples_per_frame(48000), 960);
        // Integer-millisecond truncation.
        assert_eq!(samples_per_frame(44100), 880);
    }

    #[test]
    fn rate_bounds() {
        assert!(ensure_supported_rate(8000).is_ok());
        assert!(ensure_supported_rate(24000).is_ok());
        assert!(ensure_supported_rate(48000).is_ok());
        assert!(matches!(
            ensure_supported_rate(0),
            Err(CodecError::UnsupportedSampleRate { .. })
        ));
        assert!(ensure_supported_rate(7999).is_err());
        assert!(ensure_supported_rate(96000).is_err());
    }

    #[test]
    fn sample_roundtrip() {
        let samples = [0i16, -1, i16::MIN, i16::MAX, 12345];
        let bytes = samples_to_bytes(&samples);
        assert_eq!(bytes_to_samples(&bytes).unwrap(), samples);
    }

    #[test]
    fn little_endian_layout() {
        assert_eq!(samples_to_bytes(&[0x0102]), vec![0x02, 0x01]);
    }

    #[test]
    fn odd_length_rejected() {
        let err = bytes_to_samples(&[0x00, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, CodecError::MalformedPcmLength { len: 3 }));
    }

    #[test]
    fn empty_buffer_is_fine() {
        assert!(bytes_to_samples(&[]).unwrap().is_empty());
    }
}
