//! # Time Codec
//!
//! Stateless conversion between the time strings a user types into a splits editor and
//! numeric durations in seconds.
//!
//! ## Formats
//!
//! Times are read and written most-significant field first, separated by `:`:
//!
//! ```text
//! 1:05:09.30   hours:minutes:seconds   (>= 1 hour)
//!    5:09.30   minutes:seconds         (>= 1 minute)
//!       9.30   seconds
//! ```
//!
//! [`format_time`] always produces exactly two decimals, truncating rather than
//! rounding. [`parse_time`] accepts anything and never fails, since editors feed it
//! partial, in-progress keystrokes.
//!
//! ## Example
//!
//! ```rust
//! use runsplit::time::{format_time, parse_time};
//!
//! let seconds = parse_time("5:09.30");
//! assert!((seconds - 309.3).abs() < 1e-9);
//! assert_eq!(format_time(seconds), "5:09.30");
//!
//! // Unreadable fields are skipped, not zeroed
//! assert_eq!(parse_time("1:abc:30"), 90.0);
//! ```

mod codec;
mod trim;

pub use codec::{format_time, parse_time, truncate_hundredths};
pub use trim::trim_decimals;

/// A duration in seconds.
///
/// Valid durations are non-negative. A derived segment time may be negative when a
/// run's split times decrease, which is tolerated rather than rejected.
pub type Seconds = f64;
