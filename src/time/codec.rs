//! Parsing and formatting of display time strings

use super::Seconds;
use tracing::trace;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;

/// Relative slack applied before truncating to hundredths
const TRUNCATION_TOLERANCE: f64 = 4.0 * f64::EPSILON;

/// Parse a display time string into seconds.
///
/// The text is split on `:` and read most-significant field first. Every field that
/// parses as a number shifts the running total one place (`total * 60 + field`);
/// fields that do not parse are skipped and leave the total untouched. An unreadable
/// middle field therefore shifts the place value of the fields after it:
/// `"1:abc:30"` reads as `1:30`, i.e. 90 seconds.
///
/// Field rules: surrounding whitespace is ignored, `.` is the decimal separator, a
/// leading sign is allowed, and non-finite values (`inf`, `NaN`) count as unreadable.
///
/// Never fails. Wholly unreadable text yields `0.0`.
pub fn parse_time(text: &str) -> Seconds {
    text.split(':').fold(0.0, |total, field| match parse_field(field) {
        Some(value) => total * 60.0 + value,
        None => {
            trace!(field, "Skipping unreadable time field");
            total
        }
    })
}

fn parse_field(field: &str) -> Option<Seconds> {
    field.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Format seconds as the canonical display string.
///
/// The value is truncated toward zero at the hundredths place, then rendered as
/// `H:MM:SS.ff` from one hour up, `M:SS.ff` from one minute up, and `S.ff` below that.
///
/// Negative values, which only arise from decreasing split times, are rendered as
/// signed plain seconds (`-90.00`).
///
/// ```rust
/// use runsplit::time::format_time;
///
/// assert_eq!(format_time(3909.3), "1:05:09.30");
/// assert_eq!(format_time(309.3), "5:09.30");
/// assert_eq!(format_time(9.3), "9.30");
/// assert_eq!(format_time(9.999), "9.99");
/// ```
pub fn format_time(seconds: Seconds) -> String {
    let hundredths = to_hundredths(seconds);

    if hundredths < 0 {
        let magnitude = hundredths.unsigned_abs();
        return format!("-{}.{:02}", magnitude / 100, magnitude % 100);
    }

    let whole = hundredths / 100;
    let fraction = hundredths % 100;

    if whole >= SECONDS_PER_HOUR {
        let hours = whole / SECONDS_PER_HOUR;
        let minutes = (whole % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let secs = whole % SECONDS_PER_MINUTE;
        format!("{hours}:{minutes:02}:{secs:02}.{fraction:02}")
    } else if whole >= SECONDS_PER_MINUTE {
        let minutes = whole / SECONDS_PER_MINUTE;
        let secs = whole % SECONDS_PER_MINUTE;
        format!("{minutes}:{secs:02}.{fraction:02}")
    } else {
        format!("{whole}.{fraction:02}")
    }
}

/// Truncate seconds toward zero at the hundredths place.
///
/// This is the exact truncation [`format_time`] applies, so for any `d`,
/// `parse_time(&format_time(d))` equals `truncate_hundredths(d)` up to floating-point
/// representation.
pub fn truncate_hundredths(seconds: Seconds) -> Seconds {
    to_hundredths(seconds) as f64 / 100.0
}

/// Whole hundredths of a second, truncated toward zero.
///
/// The scaled value is widened by a few ULPs before truncating so that representation
/// noise (`0.29 * 100.0 == 28.999999999999996`) cannot drop a hundredth. Anything
/// further than that below the next hundredth still truncates.
fn to_hundredths(seconds: Seconds) -> i64 {
    (seconds * 100.0 * (1.0 + TRUNCATION_TOLERANCE)).trunc() as i64
}
