//! SILK v3 voice containers for Rust.
//!
//! silkpack implements the length-prefixed bitstream container used for
//! mobile voice messages and the adapter that drives a per-frame SILK codec
//! across whole PCM buffers.
//!
//! # Crate Structure
//!
//! - [`container`] — magic header, length-prefixed frame records, streaming
//!   reader/writer
//! - [`codec`] — PCM chunking, codec-primitive traits, encode/decode stream
//!   adapter (SDK binding behind the `silk` feature)
//! - [`pack`] — the persisted name → base64-container voice-pack mapping

/// Re-export container types.
pub mod container {
    pub use silkpack_container::*;
}

/// Re-export codec types.
pub mod codec {
    pub use silkpack_codec::*;
}

pub mod pack;
