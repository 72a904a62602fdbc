//! Error types for the console cycle loop.

use thiserror::Error;

/// Errors that can terminate the run loop.
///
/// Guard rejections never appear here: they are `ShiftOutcome` values
/// surfaced as console warnings. These are real faults of the boundary.
#[derive(Debug, Error)]
pub enum CycleError {
    /// Reading or writing the console failed.
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before an exit command was received.
    #[error("input closed before exit")]
    InputClosed,
}
