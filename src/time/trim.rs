//! Decimal trimming for comma-separated time strings

/// Remove the comma decimal part from an imported time string.
///
/// When `text` is non-blank and contains both a `:` and a `,`, removes `count + 1`
/// characters starting at the first `,` (the comma plus `count` digits). Anything
/// else is returned unchanged. If fewer than `count + 1` characters follow the
/// comma, everything from the comma on is removed.
///
/// This works on the comma-decimal strings other timing tools export, not on the
/// `.`-decimal strings produced by [`format_time`](super::format_time).
///
/// ```rust
/// use runsplit::time::trim_decimals;
///
/// assert_eq!(trim_decimals("1:23,45", 2), "1:23");
/// assert_eq!(trim_decimals("1:23", 2), "1:23");
/// ```
pub fn trim_decimals(text: &str, count: usize) -> String {
    if text.trim().is_empty() || !text.contains(':') {
        return text.to_string();
    }

    let Some(comma) = text.find(',') else {
        return text.to_string();
    };

    let end = text[comma..]
        .char_indices()
        .nth(count.saturating_add(1))
        .map_or(text.len(), |(offset, _)| comma + offset);

    let mut trimmed = String::with_capacity(text.len());
    trimmed.push_str(&text[..comma]);
    trimmed.push_str(&text[end..]);
    trimmed
}
