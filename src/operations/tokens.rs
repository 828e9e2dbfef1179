//! Token-count estimate without the energy model.

use serde::Serialize;

use crate::estimator::estimate_token_count;

/// Result of estimating the token count of a text.
#[derive(Debug, Clone, Serialize)]
pub struct TokensResult {
    /// Characters in the text.
    pub chars: usize,
    /// Estimated tokens.
    pub tokens: u64,
}

#[must_use]
pub fn count_tokens(text: &str) -> TokensResult {
    TokensResult {
        chars: text.chars().count(),
        tokens: estimate_token_count(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_tokens_reports_chars() {
        let r = count_tokens("hello world");
        assert_eq!(r.chars, 11);
        assert_eq!(r.tokens, 3);
    }

    #[test]
    fn whitespace_has_chars_but_no_tokens() {
        let r = count_tokens("    ");
        assert_eq!(r.chars, 4);
        assert_eq!(r.tokens, 0);
    }
}
