//! Building a [`Run`] from editor rows

use tracing::debug;

use super::{Run, Segment, SegmentRow};
use crate::Result;
use crate::config::EditorConfig;
use crate::time::{Seconds, parse_time};

/// Build a run from editor state with the default [`EditorConfig`].
///
/// See [`build_run_with`].
pub fn build_run(title: &str, goal: &str, attempts_text: &str, rows: &[SegmentRow]) -> Result<Run> {
    build_run_with(&EditorConfig::default(), title, goal, attempts_text, rows)
}

/// Build a run from editor state.
///
/// - Blank attempts text is zero attempts; other text is resolved by the configured
///   [`AttemptsPolicy`](crate::AttemptsPolicy). Under the default strict policy,
///   non-numeric text is an [`InvalidAttemptsCount`](crate::SplitsError::InvalidAttemptsCount)
///   error.
/// - A row without a name cell gets the placeholder name (`"-"` by default).
/// - A row without a time cell gets `0.0` for that time. This differs from
///   [`derive_segment_times`](super::derive_segment_times), where a blank split is
///   missing.
///
/// Produces one segment per row, in row order. Nothing is validated beyond the
/// attempts count; in particular split times may decrease.
pub fn build_run_with(
    config: &EditorConfig,
    title: &str,
    goal: &str,
    attempts_text: &str,
    rows: &[SegmentRow],
) -> Result<Run> {
    let attempts_count = config.attempts_policy.resolve(attempts_text)?;

    let segments: Vec<Segment> = rows.iter().map(|row| build_segment(config, row)).collect();

    debug!(title, attempts_count, segments = segments.len(), "Built run from editor rows");

    Ok(Run { title: title.to_string(), goal: goal.to_string(), attempts_count, segments })
}

fn build_segment(config: &EditorConfig, row: &SegmentRow) -> Segment {
    let name = row.name.clone().unwrap_or_else(|| config.placeholder_name.clone());

    Segment {
        name,
        split_time: time_or_zero(row.split.as_deref()),
        segment_time: time_or_zero(row.segment.as_deref()),
        best_segment_time: time_or_zero(row.best.as_deref()),
    }
}

fn time_or_zero(cell: Option<&str>) -> Seconds {
    cell.map_or(0.0, parse_time)
}
