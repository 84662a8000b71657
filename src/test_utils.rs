//! Shared fixtures for unit tests and benchmarks
//!
//! Sample runs and editor states used across the crate's tests and the criterion
//! benches.

#![cfg(any(test, feature = "benchmark"))]

use crate::{Column, Run, RunEditor, Segment, Seconds};

/// Segment names of the sample run, in order
pub const SAMPLE_SEGMENT_NAMES: [&str; 4] = ["Ceres", "Kraid", "Phantoon", "Ridley"];

/// Split times of the sample run, in order
pub const SAMPLE_SPLITS: [Seconds; 4] = [95.5, 610.25, 1225.0, 2400.75];

/// A complete four-segment run with consistent split and segment times
pub fn sample_run() -> Run {
    let mut previous = 0.0;
    let segments = SAMPLE_SEGMENT_NAMES
        .iter()
        .zip(SAMPLE_SPLITS)
        .map(|(name, split)| {
            let segment_time = split - previous;
            previous = split;
            Segment::new(*name, split, segment_time, segment_time)
        })
        .collect();

    Run { title: "Super Metroid".to_string(), goal: "sub 45:00".to_string(), attempts_count: 12, segments }
}

/// An editor with one row per split text, names left blank.
///
/// Returns `None` only if the editor rejects a row index, which would be a bug.
pub fn editor_with_splits(splits: &[&str]) -> Option<RunEditor> {
    let mut editor = RunEditor::new();
    for (index, split) in splits.iter().enumerate() {
        if index > 0 {
            editor.add_row();
        }
        editor.set_cell(index, Column::Split, *split).ok()?;
    }
    Some(editor)
}

/// `count` split times spaced `step` seconds apart, starting at `step`
pub fn evenly_spaced_splits(count: usize, step: Seconds) -> Vec<Option<Seconds>> {
    (1..=count).map(|index| Some(index as f64 * step)).collect()
}
