use crate::catalogue::cases;
use crate::errors::HazResult;
use libc::c_char;
use std::ffi::CString;
use std::io::Write;

/// The Hazard Catalogue Runner.
///
/// One straight-line sequence over the shared fixed buffer, in catalogue
/// order. No guard stops the sequence after an earlier case has already
/// corrupted memory, so which hazard is observed first depends on the
/// target's memory protection, not on this code. The attribution log line
/// before each dispatch goes to stderr.
pub fn handle(input: &str) -> HazResult<()> {
    // argv can never carry an interior NUL on POSIX; rejecting it here is
    // plumbing, not a check on any catalogued case.
    let input = CString::new(input)?;
    let mut buffer = [0 as c_char; cases::BUF_CAPACITY];
    let buf = buffer.as_mut_ptr();

    tracing::info!(case = "overflow-copy", "dispatching");
    unsafe { cases::overflow_copy(buf, input.as_ptr()) };

    tracing::info!(case = "overflow-concat", "dispatching");
    unsafe { cases::overflow_concat(buf) };

    tracing::info!(case = "overflow-format", "dispatching");
    unsafe { cases::overflow_format(buf, input.as_ptr()) };

    print!("Enter data: ");
    std::io::stdout().flush()?;

    tracing::info!(case = "unbounded-stdin-read", "dispatching");
    unsafe { cases::unbounded_stdin_read(buf) };

    tracing::info!(case = "bounded-token-read", "dispatching");
    unsafe { cases::bounded_token_read(buf) };

    tracing::info!(case = "format-string-injection", "dispatching");
    unsafe { cases::format_string_injection(input.as_ptr()) };

    tracing::info!(case = "command-injection", "dispatching");
    unsafe { cases::command_injection(input.as_ptr()) };

    tracing::info!(case = "heap-lifecycle", "dispatching");
    cases::heap_lifecycle();

    tracing::info!(case = "bulk-copy-overrun", "dispatching");
    unsafe { cases::bulk_copy_overrun(buf, input.as_ptr()) };

    tracing::info!(case = "weak-randomness", "dispatching");
    let drawn = cases::weak_randomness();
    tracing::debug!(value = drawn, "weak-randomness drew");

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::errors::HazError;
    use std::ffi::CString;

    #[test]
    fn interior_nul_is_rejected_as_plumbing() {
        let err = CString::new("a\0b").map_err(HazError::from).unwrap_err();
        assert!(matches!(err, HazError::Nul(_)));
    }
}
