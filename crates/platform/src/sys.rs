//! Raw OS queries behind the providers.
//!
//! All FFI is confined to this module. Both queries degrade to the empty
//! string instead of failing; a garbage or empty identifier is a legal raw
//! value for the resolution pipeline.

#![allow(unsafe_code)]

use std::ffi::CStr;
use tracing::debug;

/// Read the `machine` field of the `uname(2)` system descriptor.
#[allow(dead_code)]
pub(crate) fn uname_machine() -> String {
    let mut raw = std::mem::MaybeUninit::<libc::utsname>::uninit();

    unsafe {
        if libc::uname(raw.as_mut_ptr()) != 0 {
            debug!("uname query failed, identifier degrades to empty string");
            return String::new();
        }
        let info = raw.assume_init();
        // `machine` is a fixed-size `c_char` array; convert to `&[u8]` and
        // stop at the first NUL.
        let machine: &[u8] =
            std::slice::from_raw_parts(info.machine.as_ptr().cast(), info.machine.len());

        CStr::from_bytes_until_nul(machine)
            .ok()
            .and_then(|value| value.to_str().ok())
            .map_or_else(String::new, str::to_owned)
    }
}

/// Read a string value via `sysctlbyname(3)`.
///
/// `name` must be NUL-terminated.
#[cfg(target_os = "macos")]
pub(crate) fn sysctl_str(name: &[u8]) -> String {
    let mut len = 0;

    unsafe {
        libc::sysctlbyname(
            name.as_ptr().cast(),
            std::ptr::null_mut(),
            &mut len,
            std::ptr::null_mut(),
            0,
        );
        if len < 1 {
            return String::new();
        }

        let mut buf: Vec<u8> = Vec::with_capacity(len);
        if libc::sysctlbyname(
            name.as_ptr().cast(),
            buf.as_mut_ptr().cast(),
            &mut len,
            std::ptr::null_mut(),
            0,
        ) != 0
        {
            return String::new();
        }
        buf.set_len(len);
        while buf.last() == Some(&b'\0') {
            buf.pop();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uname_machine_yields_a_value() {
        // Whatever unix host runs the tests reports *some* machine token.
        assert!(!uname_machine().is_empty());
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_sysctl_str_hw_model() {
        assert!(!sysctl_str(b"hw.model\0").is_empty());
    }
}
