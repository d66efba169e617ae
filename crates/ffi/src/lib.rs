//! C-callable wrapper around the fingerprint engine.
//!
//! Every function returning a string allocates it; release it with
//! [`httpfinger_string_free`]. Errors -- a null required pointer, invalid
//! UTF-8, or malformed percent-encoding in the request URI -- surface as
//! a null return.

use std::ffi::{c_char, c_int, CStr, CString};

use httpfinger_common::{Lexicons, ReportMode};
use httpfinger_core::{uri, Fingerprinter, HttpRequest};

/// Compute the 14-field fingerprint of one request.
///
/// `version` may be an empty string (no version declared) and `payload`
/// may be null or empty (no payload). `headers` points at
/// `headers_count` raw `"Name: value"` lines in request order.
///
/// # Safety
///
/// `uri` and `method` must be valid NUL-terminated strings; `headers`
/// must point at `headers_count` valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn httpfinger_fingerprint(
    uri: *const c_char,
    method: *const c_char,
    version: *const c_char,
    headers: *const *const c_char,
    headers_count: c_int,
    payload: *const c_char,
) -> *mut c_char {
    let (Some(uri), Some(method)) = (ptr_to_str(uri), ptr_to_str(method)) else {
        return std::ptr::null_mut();
    };
    let version = ptr_to_str(version).unwrap_or("");

    let mut header_lines = Vec::new();
    if headers_count > 0 {
        if headers.is_null() {
            return std::ptr::null_mut();
        }
        let raw = std::slice::from_raw_parts(headers, headers_count as usize);
        for line in raw {
            match ptr_to_str(*line) {
                Some(line) => header_lines.push(line.to_string()),
                None => return std::ptr::null_mut(),
            }
        }
    }

    let request = HttpRequest {
        uri: uri.to_string(),
        method: method.to_string(),
        version: version.to_string(),
        headers: header_lines,
        payload: ptr_to_str(payload).map(str::to_string),
    };

    let engine = Fingerprinter::builtin(ReportMode::Full);
    match engine.fingerprint(&request) {
        Ok(fingerprint) => into_raw_string(fingerprint),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Compute only the 7-field URI portion of the fingerprint.
///
/// # Safety
///
/// `uri` must be a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn httpfinger_uri_fingerprint(uri: *const c_char) -> *mut c_char {
    let Some(uri) = ptr_to_str(uri) else {
        return std::ptr::null_mut();
    };
    match uri::uri_fingerprint(uri, &Lexicons::builtin()) {
        Ok(fingerprint) => into_raw_string(fingerprint),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Release a string returned by this library. Null is a no-op.
///
/// # Safety
///
/// `s` must have been returned by a function of this library and not
/// already freed.
#[no_mangle]
pub unsafe extern "C" fn httpfinger_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

unsafe fn ptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

fn into_raw_string(s: String) -> *mut c_char {
    // Fingerprints never contain interior NULs; fall back to null rather
    // than panicking across the FFI boundary if one ever appears.
    match CString::new(s) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}
