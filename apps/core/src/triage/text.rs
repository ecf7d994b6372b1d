//! Shared text helpers for classification and summarization.
//!
//! All lengths are measured in characters, not bytes.

/// Joins title and description with a single space and lowercases the result.
///
/// The returned string is the comparison form used for keyword matching;
/// the original inputs are never modified.
pub fn combined_lowercase(title: &str, description: &str) -> String {
    format!("{} {}", title, description).to_lowercase()
}

/// Splits text into sentence fragments on runs of `.`, `!`, `?`.
///
/// Fragments are trimmed; empty and whitespace-only fragments are dropped.
/// The terminators themselves are not part of any fragment.
pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether the text ends with a sentence terminator.
pub fn ends_with_terminator(text: &str) -> bool {
    text.ends_with(['.', '!', '?'])
}

/// Returns the first `max_chars` characters of the text.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Character count of the text.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
