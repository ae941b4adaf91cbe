//! Truncates model output to a displayable short answer.

/// Maximum number of whitespace-delimited tokens kept in a displayed answer.
pub const SHORT_ANSWER_TOKENS: usize = 40;

/// Keeps the first [`SHORT_ANSWER_TOKENS`] tokens of `text`, rejoined with
/// single spaces. Idempotent: shortening a short answer again is a no-op.
pub fn shorten(text: &str) -> String {
    text.split_whitespace()
        .take(SHORT_ANSWER_TOKENS)
        .collect::<Vec<_>>()
        .join(" ")
}
