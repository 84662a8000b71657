//! # Run Model
//!
//! A [`Run`] is one editable run definition: a title, a goal, an attempts count and
//! the ordered [`Segment`]s that make up the race.
//!
//! ## Lifecycle
//!
//! Runs are never edited in place. Editor state lives in plain rows of cell text
//! ([`SegmentRow`]) and a fresh run is built from those rows at save time with
//! [`build_run`]. The run then exclusively owns its segments.
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                  Save Pipeline                    │
//! │                                                   │
//! │  SegmentRow cells ──► parse_time ──► Segment      │
//! │        │                                 │        │
//! │        ▼                                 ▼        │
//! │  attempts text ──► AttemptsPolicy ──►  Run        │
//! └───────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Values
//!
//! The two paths in this module treat "nothing entered" differently:
//!
//! - [`derive_segment_times`] works on `Option<Seconds>`; a blank split cell is `None`
//!   and stays distinct from zero.
//! - [`build_run`] defaults absent time cells to `0.0`, so a blank cell and an
//!   entered zero produce the same segment.
//!
//! Both behaviors are kept as they are; callers that need to tell the cases apart
//! should inspect the rows before saving.

use serde::{Deserialize, Serialize};

use crate::time::Seconds;

mod builder;
mod derive;
mod row;

pub use builder::{build_run, build_run_with};
pub use derive::{derive_segment_times, parse_split_cell};
pub use row::{Column, SegmentRow, accepts_attempts_char};

/// One stage of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Segment {
    /// Display name
    pub name: String,
    /// Cumulative time at the end of this segment, from run start
    pub split_time: Seconds,
    /// This segment's own elapsed time
    pub segment_time: Seconds,
    /// Best known segment time across all attempts
    pub best_segment_time: Seconds,
}

impl Segment {
    /// Create a segment from its name and times.
    pub fn new(
        name: impl Into<String>,
        split_time: Seconds,
        segment_time: Seconds,
        best_segment_time: Seconds,
    ) -> Self {
        Self { name: name.into(), split_time, segment_time, best_segment_time }
    }
}

/// One editable run definition
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct Run {
    /// Run title
    pub title: String,
    /// Free-form target, e.g. "sub 1:30:00"
    pub goal: String,
    /// Number of attempts so far
    pub attempts_count: u32,
    /// Segments in run order
    pub segments: Vec<Segment>,
}

impl Run {
    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the run has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
