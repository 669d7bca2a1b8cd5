//! silkpack-ffi: C-ABI exports for SILK container encode/decode.
//!
//! The exported surface matches what mobile voice-message bridges expect:
//! encode PCM to a magic-prefixed SILK container, decode a container back to
//! PCM, each with a declared sample rate. `sp_encode`/`sp_decode` require
//! the `silk` feature (the SDK binding); header validation and buffer
//! management work in every build.

mod buffer;
mod error;
mod types;

use std::panic::AssertUnwindSafe;

pub use buffer::sp_buffer_free;
pub use types::{
    SpBuffer, SpResult, SP_ERR_CODEC_FAILED, SP_ERR_INTERNAL, SP_ERR_INVALID_ARGUMENT,
    SP_ERR_INVALID_HEADER, SP_ERR_UNSUPPORTED, SP_OK,
};

fn ffi_boundary<T>(on_panic: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => value,
        Err(_) => {
            error::set_panic_error();
            on_panic
        }
    }
}

/// Borrow an input buffer from raw parts, tolerating the null/0 case.
///
/// # Safety
/// `data` must be valid for `len` bytes when non-null.
unsafe fn input_slice<'a>(data: *const u8, len: usize) -> Option<&'a [u8]> {
    if data.is_null() {
        if len == 0 {
            return Some(&[]);
        }
        return None;
    }
    // SAFETY: non-null and valid for `len` bytes per the caller contract.
    Some(unsafe { std::slice::from_raw_parts(data, len) })
}

#[cfg_attr(not(feature = "silk"), allow(dead_code))]
fn fill_output(out: &mut SpBuffer, bytes: Vec<u8>) {
    if bytes.is_empty() {
        *out = SpBuffer::default();
        return;
    }
    let boxed = bytes.into_boxed_slice();
    out.len = boxed.len();
    out.data = Box::into_raw(boxed) as *mut u8;
}

/// Encode 16-bit LE mono PCM into a SILK container.
///
/// On success `out` owns the container bytes (free with [`sp_buffer_free`]);
/// empty PCM yields an empty buffer. Returns `SP_ERR_UNSUPPORTED` when built
/// without the `silk` feature.
///
/// # Safety
/// `pcm` must be valid for `len` bytes (or null with `len == 0`); `out` must
/// be a valid pointer to an `SpBuffer`.
#[no_mangle]
pub unsafe extern "C" fn sp_encode(
    pcm: *const u8,
    len: usize,
    sample_rate: i32,
    out: *mut SpBuffer,
) -> SpResult {
    ffi_boundary(SpResult::Internal, || {
        error::clear_error_state();
        if out.is_null() {
            return error_invalid("out buffer pointer is null");
        }
        // SAFETY: caller guarantees `pcm` covers `len` bytes.
        let Some(pcm) = (unsafe { input_slice(pcm, len) }) else {
            return error_invalid("pcm pointer is null with nonzero length");
        };
        if sample_rate <= 0 {
            return error_invalid("sample rate must be positive");
        }

        // SAFETY: `out` checked non-null above.
        let out = unsafe { &mut *out };
        *out = SpBuffer::default();
        encode_impl(pcm, sample_rate as u32, out)
    })
}

/// Decode a SILK container into 16-bit LE mono PCM.
///
/// # Safety
/// `container` must be valid for `len` bytes (or null with `len == 0`);
/// `out` must be a valid pointer to an `SpBuffer`.
#[no_mangle]
pub unsafe extern "C" fn sp_decode(
    container: *const u8,
    len: usize,
    sample_rate: i32,
    out: *mut SpBuffer,
) -> SpResult {
    ffi_boundary(SpResult::Internal, || {
        error::clear_error_state();
        if out.is_null() {
            return error_invalid("out buffer pointer is null");
        }
        // SAFETY: caller guarantees `container` covers `len` bytes.
        let Some(container) = (unsafe { input_slice(container, len) }) else {
            return error_invalid("container pointer is null with nonzero length");
        };
        if sample_rate <= 0 {
            return error_invalid("sample rate must be positive");
        }

        // SAFETY: `out` checked non-null above.
        let out = unsafe { &mut *out };
        *out = SpBuffer::default();
        decode_impl(container, sample_rate as u32, out)
    })
}

/// Check whether a buffer starts with a SILK v3 header (either form).
///
/// # Safety
/// `data` must be valid for `len` bytes (or null with `len == 0`).
#[no_mangle]
pub unsafe extern "C" fn sp_container_valid(data: *const u8, len: usize) -> bool {
    ffi_boundary(false, || {
        // SAFETY: caller guarantees `data` covers `len` bytes.
        match unsafe { input_slice(data, len) } {
            Some(data) => silkpack_container::is_valid_container(data),
            None => false,
        }
    })
}

/// Last error text for the calling thread; empty string when none.
#[no_mangle]
pub extern "C" fn sp_last_error() -> *const std::os::raw::c_char {
    ffi_boundary(std::ptr::null(), error::last_error_ptr)
}

fn error_invalid(message: &str) -> SpResult {
    error::set_error_message(message);
    SpResult::InvalidArgument
}

#[cfg(feature = "silk")]
fn encode_impl(pcm: &[u8], sample_rate: u32, out: &mut SpBuffer) -> SpResult {
    match silkpack_codec::encode(pcm, sample_rate) {
        Ok(container) => {
            fill_output(out, container);
            SpResult::Ok
        }
        Err(err) => types::map_codec_error(&err),
    }
}

#[cfg(feature = "silk")]
fn decode_impl(container: &[u8], sample_rate: u32, out: &mut SpBuffer) -> SpResult {
    match silkpack_codec::decode(container, sample_rate) {
        Ok(pcm) => {
            fill_output(out, pcm);
            SpResult::Ok
        }
        Err(err) => types::map_codec_error(&err),
    }
}

#[cfg(not(feature = "silk"))]
fn encode_impl(_pcm: &[u8], _sample_rate: u32, _out: &mut SpBuffer) -> SpResult {
    error::set_error_message("silkpack-ffi built without the silk feature");
    SpResult::Unsupported
}

#[cfg(not(feature = "silk"))]
fn decode_impl(_container: &[u8], _sample_rate: u32, _out: &mut SpBuffer) -> SpResult {
    error::set_error_message("silkpack-ffi built without the silk feature");
    SpResult::Unsupported
}
