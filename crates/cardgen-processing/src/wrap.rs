//! Display-oriented text wrapping.
//!
//! Breaks a field value into at most [`MAX_WRAP_LINES`] lines for the text
//! panel. This is a lossy wrap: content past the line cap is silently
//! dropped, which is accepted behavior for very long values.

use cardgen_core::constants::MAX_WRAP_LINES;

/// Candidate separators in priority order. The first one present in the
/// string is used for all breaks.
const SEPARATORS: [&str; 4] = [", ", "、", " ", "-"];

/// Wrap `text` into lines of at most `max_chars` characters.
///
/// A string that already fits comes back as a single line. Otherwise the
/// string is split on the highest-priority separator it contains and the
/// segments are greedily packed, flushing to a new line when the next
/// segment would overflow. With no separator at all, the string is chunked
/// into exact `max_chars` slices. Output is never empty and never longer
/// than [`MAX_WRAP_LINES`].
pub fn wrap_value(text: &str, max_chars: usize) -> Vec<String> {
    if char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    for sep in SEPARATORS {
        if !text.contains(sep) {
            continue;
        }

        let mut lines = Vec::new();
        let mut current = String::new();
        for part in text.split(sep) {
            let candidate = if current.is_empty() {
                part.to_string()
            } else {
                format!("{current}{sep}{part}")
            };
            if char_len(&candidate) <= max_chars {
                current = candidate;
            } else {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                current = part.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines.truncate(MAX_WRAP_LINES);
        return lines;
    }

    // No separator anywhere: exact character chunks.
    text.chars()
        .collect::<Vec<_>>()
        .chunks(max_chars)
        .take(MAX_WRAP_LINES)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
