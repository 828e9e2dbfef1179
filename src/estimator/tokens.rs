/// Approximate token count using the ~4 chars per token heuristic.
pub const CHARS_PER_TOKEN: f64 = 4.0;

/// Estimate tokens from a character count.
#[must_use]
pub fn estimate_tokens(char_count: usize) -> u64 {
    (char_count as f64 / CHARS_PER_TOKEN).ceil() as u64
}

/// True for text made only of whitespace and byte order marks.
#[must_use]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == '\u{FEFF}')
}

/// Estimate the token count of raw prompt text.
///
/// Blank text (empty or whitespace only) counts as zero tokens. Anything else
/// is measured in characters of the untrimmed input.
#[must_use]
pub fn estimate_token_count(text: &str) -> u64 {
    if is_blank(text) {
        return 0;
    }
    estimate_tokens(text.chars().count())
}
