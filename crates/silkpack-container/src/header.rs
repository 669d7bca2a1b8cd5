use bytes::{BufMut, BytesMut};

use crate::error::{ContainerError, Result};

/// Magic bytes: "#!SILK_V3".
pub const MAGIC: [u8; 9] = *b"#!SILK_V3";

/// Vendor marker byte some messenger apps prepend to the magic.
pub const VENDOR_PREFIX: u8 = 0x02;

/// Smallest buffer that can hold a header worth parsing.
pub const MIN_CONTAINER_LEN: usize = 10;

/// Append a container header to `dst`.
///
/// The vendor-prefixed form is what this library emits on encode; the bare
/// form exists only so tests and interop tooling can produce both variants.
pub fn write_header(dst: &mut BytesMut, vendor_prefix: bool) {
    dst.reserve(MAGIC.len() + usize::from(vendor_prefix));
    if vendor_prefix {
        dst.put_u8(VENDOR_PREFIX);
    }
    dst.put_slice(&MAGIC);
}

/// Check whether `data` starts with a SILK v3 header.
///
/// True iff, after optionally skipping a single vendor byte, the next 9 bytes
/// equal the magic. Buffers under [`MIN_CONTAINER_LEN`] bytes are never valid.
pub fn is_valid_container(data: &[u8]) -> bool {
    parse_header(data).is_ok()
}

/// Locate the header and return the offset of the first body byte.
///
/// Returns `MAGIC.len() + 1` for the vendor-prefixed form and `MAGIC.len()`
/// for the bare form.
pub fn parse_header(data: &[u8]) -> Result<usize> {
    if data.len() < MIN_CONTAINER_LEN {
        return Err(ContainerError::InvalidHeader);
    }
    if data[0] == VENDOR_PREFIX && data[1..1 + MAGIC.len()] == MAGIC {
        return Ok(1 + MAGIC.len());
    }
    if data[..MAGIC.len()] == MAGIC {
        return Ok(MAGIC.len());
    }
    Err(ContainerError::InvalidHeader)
}
