//! The hazard case implementations.
//!
//! Every function here reproduces one catalogued unsafe operation through
//! the real C routine, reached over FFI, inside its own `unsafe` region.
//! One region per case keeps a fault detected under instrumentation
//! attributable to exactly one catalogue entry. None of these functions
//! validates anything; the missing checks are the fixture's payload, so do
//! not "fix" them.

use libc::{c_char, c_int, c_void};

/// Declared capacity of the shared fixed buffer, terminator included.
pub const BUF_CAPACITY: usize = 100;

/// Byte count of the bulk copy. Deliberately larger than [`BUF_CAPACITY`],
/// so the copy overruns even for an empty input.
pub const BULK_COPY_COUNT: usize = 200;

/// Size of the heap region for the contrast case.
pub const HEAP_REGION_SIZE: usize = 100;

/// Literal appended by the concat case.
pub const CONCAT_SUFFIX: &core::ffi::CStr = c" suffix";

/// Copy `input` into `buf` with no length check.
///
/// # Safety
/// `buf` must point to at least [`BUF_CAPACITY`] writable bytes and `input`
/// must be NUL-terminated. The copy itself is unbounded: an input of
/// `BUF_CAPACITY - 1` bytes or more writes past the end of `buf`.
pub unsafe fn overflow_copy(buf: *mut c_char, input: *const c_char) {
    unsafe {
        libc::strcpy(buf, input);
    }
}

/// Append [`CONCAT_SUFFIX`] to whatever `buf` currently holds, no bound check.
///
/// # Safety
/// `buf` must hold a NUL-terminated string. Overflows once existing content
/// plus the suffix exceeds [`BUF_CAPACITY`].
pub unsafe fn overflow_concat(buf: *mut c_char) {
    unsafe {
        libc::strcat(buf, CONCAT_SUFFIX.as_ptr());
    }
}

/// Render `User: <input>` into `buf` with no bound check.
///
/// # Safety
/// `buf` must point to at least [`BUF_CAPACITY`] writable bytes and `input`
/// must be NUL-terminated. The rendered length is unchecked.
pub unsafe fn overflow_format(buf: *mut c_char, input: *const c_char) {
    unsafe {
        libc::sprintf(buf, c"User: %s".as_ptr(), input);
    }
}

/// Read one line from stdin into `buf` with no length limit.
///
/// Modern toolchains dropped the `gets` symbol, so this is the same
/// unbounded read spelled as a `getchar` loop: bytes land in `buf` until
/// newline or EOF, however many arrive.
///
/// # Safety
/// `buf` must point to at least [`BUF_CAPACITY`] writable bytes; any line of
/// `BUF_CAPACITY` bytes or more writes past its end.
pub unsafe fn unbounded_stdin_read(buf: *mut c_char) {
    unsafe {
        let mut i: isize = 0;
        loop {
            let ch = libc::getchar();
            if ch == libc::EOF || ch == c_int::from(b'\n') {
                break;
            }
            *buf.offset(i) = ch as c_char;
            i += 1;
        }
        *buf.offset(i) = 0;
    }
}

/// Read one whitespace-delimited token from stdin via `scanf("%s")`.
///
/// The format carries no width specifier, so the read is bounded by the
/// token, not by the buffer.
///
/// # Safety
/// `buf` must point to at least [`BUF_CAPACITY`] writable bytes; a token of
/// `BUF_CAPACITY` bytes or more writes past its end.
pub unsafe fn bounded_token_read(buf: *mut c_char) {
    unsafe {
        libc::scanf(c"%s".as_ptr(), buf);
    }
}

/// Pass `input` as the format-control argument of `printf`, not as data.
///
/// # Safety
/// `input` must be NUL-terminated. Format directives in the input (`%s`,
/// `%x`, `%n`) read or write through arguments that were never supplied.
pub unsafe fn format_string_injection(input: *const c_char) {
    unsafe {
        libc::printf(input);
    }
}

/// Hand `input`, unmodified, to the host command interpreter.
///
/// # Safety
/// `input` must be NUL-terminated. Shell metacharacters in the input run
/// arbitrary commands with this process's privileges.
pub unsafe fn command_injection(input: *const c_char) {
    unsafe {
        libc::system(input);
    }
}

/// Contrast case: one allocation, one matching release, no further access.
pub fn heap_lifecycle() {
    unsafe {
        let region = libc::malloc(HEAP_REGION_SIZE);
        libc::free(region);
    }
}

/// Copy exactly [`BULK_COPY_COUNT`] bytes from `input` into `buf`.
///
/// The count is fixed and independent of the actual input length, so the
/// copy overruns `buf` (and over-reads `input`) even for an empty input.
///
/// # Safety
/// `buf` must point to at least [`BUF_CAPACITY`] writable bytes; the write
/// always exceeds that.
pub unsafe fn bulk_copy_overrun(buf: *mut c_char, input: *const c_char) {
    unsafe {
        libc::memcpy(buf as *mut c_void, input as *const c_void, BULK_COPY_COUNT);
    }
}

/// Draw one value from the C library's non-cryptographic PRNG. No seed
/// control is exposed; without a prior `srand` the stream is the default
/// seed's, identical on every run.
pub fn weak_randomness() -> c_int {
    unsafe { libc::rand() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{CStr, CString};

    // Only the non-overflowing paths run here. The overflow paths are
    // undefined behavior and belong to the instrumented harness.

    fn contents(buf: &[c_char]) -> String {
        unsafe { CStr::from_ptr(buf.as_ptr()) }
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn short_input_lands_intact() {
        let input = CString::new("hello").unwrap();
        let mut buf = [0 as c_char; BUF_CAPACITY];
        unsafe { overflow_copy(buf.as_mut_ptr(), input.as_ptr()) };
        assert_eq!(contents(&buf), "hello");
    }

    #[test]
    fn concat_appends_exactly_the_suffix() {
        let input = CString::new("abc").unwrap();
        let mut buf = [0 as c_char; BUF_CAPACITY];
        unsafe {
            overflow_copy(buf.as_mut_ptr(), input.as_ptr());
            overflow_concat(buf.as_mut_ptr());
        }
        assert_eq!(contents(&buf), "abc suffix");
    }

    #[test]
    fn format_renders_user_prefix() {
        let input = CString::new("abc").unwrap();
        let mut buf = [0 as c_char; BUF_CAPACITY];
        unsafe { overflow_format(buf.as_mut_ptr(), input.as_ptr()) };
        assert_eq!(contents(&buf), "User: abc");
    }

    #[test]
    fn bulk_copy_count_exceeds_capacity() {
        // The defining property of the case: overflow does not depend on
        // input length.
        assert!(BULK_COPY_COUNT > BUF_CAPACITY);
    }

    #[test]
    fn bulk_copy_moves_exactly_the_fixed_count() {
        // Oversized scratch regions on both sides keep the test itself
        // within bounds while exercising the real memcpy path.
        let src = vec![0x41 as c_char; BULK_COPY_COUNT + 8];
        let mut dst = vec![0 as c_char; BULK_COPY_COUNT + 8];
        unsafe { bulk_copy_overrun(dst.as_mut_ptr(), src.as_ptr()) };
        assert!(dst[..BULK_COPY_COUNT].iter().all(|&b| b == 0x41 as c_char));
        assert_eq!(dst[BULK_COPY_COUNT], 0);
    }

    #[test]
    fn heap_lifecycle_is_balanced() {
        // Nothing to assert from the outside; an allocation tracker sees one
        // malloc and one free per call.
        heap_lifecycle();
        heap_lifecycle();
    }

    #[test]
    fn weak_randomness_repeats_under_a_fixed_seed() {
        unsafe { libc::srand(1234) };
        let first = weak_randomness();
        unsafe { libc::srand(1234) };
        let second = weak_randomness();
        assert_eq!(first, second);
    }

    #[test]
    fn shell_syntax_in_input_is_executed() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("marker");
        let cmd = CString::new(format!("echo PWNED > {}", marker.display())).unwrap();
        unsafe { command_injection(cmd.as_ptr()) };
        let observed = std::fs::read_to_string(&marker).unwrap();
        assert_eq!(observed.trim(), "PWNED");
    }

    #[test]
    fn directive_free_input_prints_as_is() {
        // Safe only because the input carries no '%' directive.
        let input = CString::new("plain text").unwrap();
        unsafe { format_string_injection(input.as_ptr()) };
    }
}
