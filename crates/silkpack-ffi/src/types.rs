use silkpack_codec::CodecError;
use silkpack_container::ContainerError;

use crate::error::set_error_message;

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpResult {
    Ok = 0,
    InvalidArgument = 1,
    InvalidHeader = 2,
    CodecFailed = 3,
    Unsupported = 10,
    Internal = 99,
}

#[allow(dead_code)]
pub const SP_OK: SpResult = SpResult::Ok;
#[allow(dead_code)]
pub const SP_ERR_INVALID_ARGUMENT: SpResult = SpResult::InvalidArgument;
#[allow(dead_code)]
pub const SP_ERR_INVALID_HEADER: SpResult = SpResult::InvalidHeader;
#[allow(dead_code)]
pub const SP_ERR_CODEC_FAILED: SpResult = SpResult::CodecFailed;
#[allow(dead_code)]
pub const SP_ERR_UNSUPPORTED: SpResult = SpResult::Unsupported;
#[allow(dead_code)]
pub const SP_ERR_INTERNAL: SpResult = SpResult::Internal;

/// An owned byte buffer handed across the FFI boundary.
///
/// Populated by `sp_encode`/`sp_decode`; the caller releases it with
/// `sp_buffer_free`. A zero-length result carries a null `data` pointer.
#[repr(C)]
#[derive(Debug)]
pub struct SpBuffer {
    pub data: *mut u8,
    pub len: usize,
}

impl Default for SpBuffer {
    fn default() -> Self {
        Self {
            data: std::ptr::null_mut(),
            len: 0,
        }
    }
}

#[allow(dead_code)]
pub(crate) fn map_codec_error(err: &CodecError) -> SpResult {
    set_error_message(err.to_string());
    match err {
        CodecError::MalformedPcmLength { .. } | CodecError::UnsupportedSampleRate { .. } => {
            SpResult::InvalidArgument
        }
        CodecError::Container(ContainerError::InvalidHeader) => SpResult::InvalidHeader,
        CodecError::EncodeFailed { .. }
        | CodecError::Init(_)
        | CodecError::Container(ContainerError::FrameTooLarge { .. }) => SpResult::CodecFailed,
        CodecError::Container(_) => SpResult::Internal,
    }
}
