//! Error handling for the CLI application

use omakase_core::NarrationError;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Exit status for a failed invocation.
///
/// Narration failures are part of the program's own vocabulary and exit
/// with 1; anything else is unexpected and exits with 2.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<NarrationError>().is_some() {
        1
    } else {
        2
    }
}
