//! Segment time derivation from cumulative split times

use tracing::debug;

use crate::time::{Seconds, parse_time};

/// Read a split cell for derivation.
///
/// An absent or blank cell is a missing split (`None`), which is not the same as an
/// entered zero. Anything else goes through [`parse_time`].
pub fn parse_split_cell(text: Option<&str>) -> Option<Seconds> {
    text.filter(|text| !text.trim().is_empty()).map(parse_time)
}

/// Derive each segment's own time from the run's cumulative split times.
///
/// - The first segment's time is its split time.
/// - Every later segment's time is `splits[i] - splits[i - 1]`, or `None` when either
///   of the two is missing.
///
/// A missing split only affects its own segment and the one right after it; any later
/// pair of present splits still yields a time. Decreasing splits are not rejected and
/// yield a negative segment time.
///
/// ```rust
/// use runsplit::derive_segment_times;
///
/// let segments = derive_segment_times(&[Some(10.0), None, Some(25.0), Some(40.0)]);
/// assert_eq!(segments, vec![Some(10.0), None, None, Some(15.0)]);
/// ```
pub fn derive_segment_times(splits: &[Option<Seconds>]) -> Vec<Option<Seconds>> {
    let mut segments = Vec::with_capacity(splits.len());
    let mut previous: Option<Option<Seconds>> = None;

    for &split in splits {
        let segment = match previous {
            None => split,
            Some(before) => before.zip(split).map(|(before, current)| current - before),
        };
        segments.push(segment);
        previous = Some(split);
    }

    debug!(
        segments = segments.len(),
        missing = segments.iter().filter(|segment| segment.is_none()).count(),
        "Derived segment times"
    );

    segments
}
