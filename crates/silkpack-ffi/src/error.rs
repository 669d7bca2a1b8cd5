use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;

// Returned while no error is recorded; callers always get a valid string.
static NO_ERROR: &[u8] = b"\0";

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

pub(crate) fn clear_error_state() {
    LAST_ERROR.with(|state| {
        *state.borrow_mut() = None;
    });
}

pub(crate) fn set_error_message(message: impl Into<String>) {
    let sanitized = message.into().replace('\0', "?");
    LAST_ERROR.with(|state| {
        *state.borrow_mut() = CString::new(sanitized).ok();
    });
}

pub(crate) fn set_panic_error() {
    set_error_message("panic across FFI boundary");
}

pub(crate) fn last_error_ptr() -> *const c_char {
    LAST_ERROR.with(|state| match state.borrow().as_ref() {
        Some(message) => message.as_ptr(),
        None => NO_ERROR.as_ptr() as *const c_char,
    })
}
