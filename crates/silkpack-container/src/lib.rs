//! Length-prefixed framing for SILK v3 bitstream containers.
//!
//! This is the format layer of silkpack. A container is:
//! - An optional vendor marker byte (0x02), emitted on encode and accepted
//!   either way on decode
//! - The 9-byte ASCII magic "#!SILK_V3"
//! - Frame records: a 2-byte little-endian payload length followed by that
//!   many bytes of opaque compressed audio
//! - A zero-length record as the end-of-stream marker
//!
//! Frames are opaque byte blobs here; everything audio-shaped lives in
//! `silkpack-codec`.

pub mod error;
pub mod frame;
pub mod header;
pub mod reader;
pub mod writer;

pub use error::{ContainerError, Result};
pub use frame::{write_end_marker, write_frame, FrameIter, END_MARKER, LENGTH_SIZE, MAX_PAYLOAD};
pub use header::{
    is_valid_container, parse_header, write_header, MAGIC, MIN_CONTAINER_LEN, VENDOR_PREFIX,
};
pub use reader::ContainerReader;
pub use writer::ContainerWriter;
