use std::ptr;

use crate::types::SpBuffer;

/// Free the bytes held by an [`SpBuffer`] populated by encode/decode.
///
/// # Safety
/// `buffer` must be either null or a valid pointer to an `SpBuffer`. If
/// `buffer->data` is non-null, it must have originated from this library.
#[no_mangle]
pub unsafe extern "C" fn sp_buffer_free(buffer: *mut SpBuffer) {
    crate::ffi_boundary((), || {
        if buffer.is_null() {
            return;
        }

        let buffer_ref = {
            // SAFETY: Pointer validity is guaranteed by the caller.
            unsafe { &mut *buffer }
        };

        if !buffer_ref.data.is_null() {
            let slice_ptr = ptr::slice_from_raw_parts_mut(buffer_ref.data, buffer_ref.len);
            // SAFETY: `data` was allocated by `Box<[u8]>` in `fill_output`.
            unsafe {
                drop(Box::from_raw(slice_ptr));
            }
        }

        *buffer_ref = SpBuffer::default();
    });
}
