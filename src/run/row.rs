//! Editor rows of raw cell text

use serde::{Deserialize, Serialize};

/// A column of the segments grid, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
pub enum Column {
    Name,
    Split,
    Segment,
    BestSegment,
}

impl Column {
    /// Whether a typed character is plausible for this column.
    ///
    /// The name column takes anything. Time columns take ASCII digits, `:`, `.`, `,`
    /// and control characters (backspace and friends). This mirrors what an editor
    /// filters at the keyboard; text set programmatically is never checked.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            Column::Name => true,
            Column::Split | Column::Segment | Column::BestSegment => {
                ch.is_ascii_digit() || ch.is_control() || matches!(ch, ':' | '.' | ',')
            }
        }
    }
}

/// Whether a typed character is plausible for the attempts count field
pub fn accepts_attempts_char(ch: char) -> bool {
    ch.is_ascii_digit() || ch.is_control()
}

/// One grid row of cell text. `None` is a cell that was never filled in.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tauri", derive(specta::Type))]
#[serde(default)]
pub struct SegmentRow {
    pub name: Option<String>,
    pub split: Option<String>,
    pub segment: Option<String>,
    pub best: Option<String>,
}

impl SegmentRow {
    /// A row with only a name and a split time, the usual hand-typed shape
    pub fn with_split(name: impl Into<String>, split: impl Into<String>) -> Self {
        Self { name: Some(name.into()), split: Some(split.into()), ..Self::default() }
    }

    /// Text of a cell
    pub fn cell(&self, column: Column) -> Option<&str> {
        match column {
            Column::Name => self.name.as_deref(),
            Column::Split => self.split.as_deref(),
            Column::Segment => self.segment.as_deref(),
            Column::BestSegment => self.best.as_deref(),
        }
    }

    /// Mutable slot of a cell
    pub fn cell_mut(&mut self, column: Column) -> &mut Option<String> {
        match column {
            Column::Name => &mut self.name,
            Column::Split => &mut self.split,
            Column::Segment => &mut self.segment,
            Column::BestSegment => &mut self.best,
        }
    }
}
