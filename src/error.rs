//! Error types for run editing.
//!
//! Time parsing and formatting never fail: malformed text degrades to the closest
//! computable value. Errors only arise when building a [`Run`](crate::Run) from
//! editor state or when addressing editor rows that do not exist.
//!
//! ## Recovery
//!
//! Every error carries suggestions a host application can show to the user:
//!
//! ```rust
//! use runsplit::SplitsError;
//!
//! let error = SplitsError::row_out_of_range(7, 3);
//! for suggestion in error.recovery_suggestions() {
//!     println!("  - {}", suggestion);
//! }
//! ```

use std::num::ParseIntError;
use thiserror::Error;

/// Result type alias for run editing operations.
pub type Result<T, E = SplitsError> = std::result::Result<T, E>;

/// Main error type for run editing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SplitsError {
    #[error("Invalid attempts count '{text}': {source}")]
    InvalidAttemptsCount {
        text: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Row {index} is out of range for an editor with {len} rows")]
    RowOutOfRange { index: usize, len: usize },
}

impl SplitsError {
    /// Returns suggested recovery actions for this error.
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            SplitsError::InvalidAttemptsCount { .. } => vec![
                "Enter the attempts count as a whole number of digits",
                "Leave the attempts count blank to start from zero",
                "Use AttemptsPolicy::ClampToZero to accept unreadable counts",
            ],
            SplitsError::RowOutOfRange { .. } => vec![
                "Check the row index against RunEditor::row_count",
                "Add a row with RunEditor::add_row before writing to it",
            ],
        }
    }

    /// Helper constructor for attempts count parse failures.
    pub fn invalid_attempts_count(text: impl Into<String>, source: ParseIntError) -> Self {
        SplitsError::InvalidAttemptsCount { text: text.into(), source }
    }

    /// Helper constructor for row index errors.
    pub fn row_out_of_range(index: usize, len: usize) -> Self {
        SplitsError::RowOutOfRange { index, len }
    }
}
