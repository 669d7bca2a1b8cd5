/// Errors that can occur while framing or parsing a container.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    /// The buffer does not start with a SILK v3 header.
    #[error("invalid container header (expected \"#!SILK_V3\", optionally 0x02-prefixed)")]
    InvalidHeader,

    /// A compressed frame does not fit in the 16-bit length field.
    #[error("frame payload too large ({size} bytes, max {max})")]
    FrameTooLarge { size: usize, max: usize },

    /// An I/O error occurred while reading or writing a container stream.
    #[error("container I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output stream closed before a complete container was written.
    #[error("stream closed (incomplete container)")]
    StreamClosed,
}

pub type Result<T> = std::result::Result<T, ContainerError>;
