//! Shared utility functions.

/// Shorten free text for log lines without splitting a UTF-8 character.
///
/// Question titles can be arbitrarily long; log output keeps the first
/// `max_bytes` bytes and marks the cut with an ellipsis.
pub fn preview(s: &str, max_bytes: usize) -> String {
    if s.len() <= max_bytes {
        return s.to_string();
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
