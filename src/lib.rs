//! Time parsing, formatting and segment-time derivation for speedrun split editors.
//!
//! runsplit is the model behind a splits editor: a tool for authoring a run as a
//! named, ordered list of segments, each with a cumulative split time, its own
//! segment time and a best segment time.
//!
//! # Features
//!
//! - **Forgiving time input**: [`parse_time`] reads partial, in-progress keystrokes
//!   without ever failing
//! - **Canonical display**: [`format_time`] renders `H:MM:SS.ff`, `M:SS.ff` or `S.ff`
//! - **Derived columns**: [`derive_segment_times`] recomputes segment times from
//!   splits, keeping missing splits distinct from zero
//! - **Save-time validation**: [`build_run`] turns editor rows into a fresh [`Run`]
//!
//! # Quick Start
//!
//! ```rust
//! use runsplit::{Column, RunEditor};
//!
//! # fn main() -> runsplit::Result<()> {
//! let mut editor = RunEditor::new();
//! editor.set_title("Celeste Any%");
//! editor.set_attempts_text("41");
//! editor.set_cell(0, Column::Name, "Forsaken City")?;
//! editor.set_cell(0, Column::Split, "2:05.31")?;
//!
//! editor.fill_segment_times();
//! let run = editor.save()?;
//!
//! assert_eq!(run.attempts_count, 41);
//! assert_eq!(run.segments[0].name, "Forsaken City");
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The crate logs through [`tracing`] and never installs a subscriber itself.

// Core types and error handling
pub mod config;
mod error;
#[cfg_attr(any(test, feature = "benchmark"), path = "test_utils.rs")]
#[cfg(any(test, feature = "benchmark"))]
pub mod test_utils;

// Time codec and run model
pub mod editor;
pub mod run;
pub mod time;

// Core exports
pub use config::{AttemptsPolicy, EditorConfig};
pub use error::*;

// Main API exports
pub use editor::RunEditor;
pub use run::{
    Column, Run, Segment, SegmentRow, accepts_attempts_char, build_run, build_run_with,
    derive_segment_times, parse_split_cell,
};
pub use time::{Seconds, format_time, parse_time, trim_decimals, truncate_hundredths};
