//! Text formatting helpers shared by the card components.

use chrono::DateTime;
use unicode_width::UnicodeWidthChar;

/// Truncates a line to a maximum display width, appending an ellipsis.
///
/// Width is measured in terminal columns rather than bytes so wide
/// characters do not overflow the row. Only the first line of multi-line
/// input is kept.
pub(crate) fn truncate_line(text: &str, max_width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("").trim();

    let mut width = 0_usize;
    let mut output = String::new();
    for character in first_line.chars() {
        let char_width = character.width().unwrap_or(0);
        if width + char_width > max_width.saturating_sub(3) {
            output.push_str("...");
            return output;
        }
        width += char_width;
        output.push(character);
    }

    output
}

/// Formats an ISO 8601 timestamp for display.
///
/// Falls back to the raw string when the backend sends something the
/// parser does not accept.
pub(crate) fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_owned(),
        |timestamp| timestamp.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}

/// Shortens a commit hash to its first seven characters for display.
pub(crate) fn short_sha(sha: &str) -> String {
    sha.chars().take(7).collect()
}
