//! # Run Editor State
//!
//! [`RunEditor`] holds what a splits editor shows on screen: title, goal, attempts
//! text and a grid of [`SegmentRow`]s. It is plain data with no widget attached; a UI
//! reads and writes cell text through it and calls [`RunEditor::save`] to get a
//! fresh [`Run`].
//!
//! ## Workflow
//!
//! ```rust
//! use runsplit::{Column, RunEditor};
//!
//! # fn main() -> runsplit::Result<()> {
//! let mut editor = RunEditor::new();
//! editor.set_title("Super Metroid");
//! editor.set_cell(0, Column::Name, "Ceres")?;
//! editor.set_cell(0, Column::Split, "1:35.50")?;
//! editor.add_row();
//! editor.set_cell(1, Column::Name, "Kraid")?;
//! editor.set_cell(1, Column::Split, "10:10.25")?;
//!
//! // Segment and best-segment columns are derived from the splits
//! editor.fill_segment_times();
//! assert_eq!(editor.cell(1, Column::Segment)?, Some("8:34.75"));
//!
//! let run = editor.save()?;
//! assert_eq!(run.segments[1].segment_time, 514.75);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EditorConfig;
use crate::run::{
    Column, Run, SegmentRow, build_run_with, derive_segment_times, parse_split_cell,
};
use crate::time::{Seconds, format_time};
use crate::{Result, SplitsError};

/// Attempts text shown by a fresh editor
const INITIAL_ATTEMPTS_TEXT: &str = "0";

/// Transient editing state for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub struct RunEditor {
    title: String,
    goal: String,
    attempts_text: String,
    rows: Vec<SegmentRow>,
}

impl Default for RunEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl RunEditor {
    /// Create an empty editor with a single blank row
    pub fn new() -> Self {
        Self {
            title: String::new(),
            goal: String::new(),
            attempts_text: INITIAL_ATTEMPTS_TEXT.to_string(),
            rows: vec![SegmentRow::default()],
        }
    }

    /// Create an editor pre-populated from an existing run.
    ///
    /// Every segment becomes a row with all three times written as plain seconds
    /// (`95.5`, `3800`). That text is the shortest form that parses back to the same
    /// value, so saving a freshly loaded editor reproduces the run exactly, sub-hundredth
    /// digits included. A run without segments still gets one blank row to type into.
    pub fn from_run(run: &Run) -> Self {
        let mut rows: Vec<SegmentRow> = run
            .segments
            .iter()
            .map(|segment| SegmentRow {
                name: Some(segment.name.clone()),
                split: Some(segment.split_time.to_string()),
                segment: Some(segment.segment_time.to_string()),
                best: Some(segment.best_segment_time.to_string()),
            })
            .collect();

        if rows.is_empty() {
            rows.push(SegmentRow::default());
        }

        debug!(title = %run.title, rows = rows.len(), "Loaded run into editor");

        Self {
            title: run.title.clone(),
            goal: run.goal.clone(),
            attempts_text: run.attempts_count.to_string(),
            rows,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = goal.into();
    }

    /// Attempts count as typed, not yet validated
    pub fn attempts_text(&self) -> &str {
        &self.attempts_text
    }

    pub fn set_attempts_text(&mut self, text: impl Into<String>) {
        self.attempts_text = text.into();
    }

    /// Rows in display order
    pub fn rows(&self) -> &[SegmentRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a blank row
    pub fn add_row(&mut self) {
        self.rows.push(SegmentRow::default());
    }

    /// Insert a blank row before `index`, or at the end when `index` is past it
    pub fn insert_row(&mut self, index: usize) {
        let index = index.min(self.rows.len());
        self.rows.insert(index, SegmentRow::default());
    }

    /// Text of a cell; `None` when the cell was never filled in
    pub fn cell(&self, row: usize, column: Column) -> Result<Option<&str>> {
        Ok(self.row(row)?.cell(column))
    }

    /// Replace the text of a cell
    pub fn set_cell(&mut self, row: usize, column: Column, text: impl Into<String>) -> Result<()> {
        *self.row_mut(row)?.cell_mut(column) = Some(text.into());
        Ok(())
    }

    /// Reset a cell to never-filled-in
    pub fn clear_cell(&mut self, row: usize, column: Column) -> Result<()> {
        *self.row_mut(row)?.cell_mut(column) = None;
        Ok(())
    }

    /// Recompute the segment and best-segment columns from the split column.
    ///
    /// Blank split cells are missing splits. Each derived time is written, formatted,
    /// into both the segment and the best-segment cell of its row, replacing whatever
    /// best time was there. Rows whose time is missing get empty text in both cells.
    ///
    /// Returns the derived times, aligned with the rows.
    pub fn fill_segment_times(&mut self) -> Vec<Option<Seconds>> {
        let splits: Vec<Option<Seconds>> =
            self.rows.iter().map(|row| parse_split_cell(row.split.as_deref())).collect();

        let segments = derive_segment_times(&splits);

        for (row, segment) in self.rows.iter_mut().zip(&segments) {
            let text = segment.map(format_time).unwrap_or_default();
            row.segment = Some(text.clone());
            row.best = Some(text);
        }

        debug!(
            rows = self.rows.len(),
            filled = segments.iter().filter(|segment| segment.is_some()).count(),
            "Filled segment times"
        );

        segments
    }

    /// Build a fresh run from the current state with the default config
    pub fn save(&self) -> Result<Run> {
        self.save_with(&EditorConfig::default())
    }

    /// Build a fresh run from the current state.
    ///
    /// Every row becomes a segment, blank rows included.
    pub fn save_with(&self, config: &EditorConfig) -> Result<Run> {
        build_run_with(config, &self.title, &self.goal, &self.attempts_text, &self.rows)
    }

    fn row(&self, index: usize) -> Result<&SegmentRow> {
        let len = self.rows.len();
        self.rows.get(index).ok_or_else(|| SplitsError::row_out_of_range(index, len))
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut SegmentRow> {
        let len = self.rows.len();
        self.rows.get_mut(index).ok_or_else(|| SplitsError::row_out_of_range(index, len))
    }
}
