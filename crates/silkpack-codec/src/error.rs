use silkpack_container::ContainerError;

use crate::primitive::PrimitiveError;

/// Errors that can fail a whole encode or decode call.
///
/// Per-frame decode failures are deliberately absent: they are absorbed
/// inside [`decode_stream`](crate::decode_stream) and surface only as
/// reduced output length.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Input PCM has an odd byte length, so there is no well-defined
    /// sample boundary.
    #[error("malformed PCM input: odd byte length {len}")]
    MalformedPcmLength { len: usize },

    /// The sample rate is outside what the codec supports.
    #[error("unsupported sample rate {rate} Hz (supported: {min}-{max})")]
    UnsupportedSampleRate { rate: u32, min: u32, max: u32 },

    /// A single frame failed to compress; encode is all-or-nothing.
    #[error("failed to encode frame {frame}: {source}")]
    EncodeFailed {
        frame: usize,
        source: PrimitiveError,
    },

    /// Header or framing failure from the container layer.
    #[error(transparent)]
    Container(#[from] ContainerError),

    /// The codec primitive could not be initialized.
    #[error("codec initialization failed: {0}")]
    Init(#[source] PrimitiveError),
}

pub type Result<T> = std::result::Result<T, CodecError>;
