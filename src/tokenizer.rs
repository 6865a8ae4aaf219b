//! Token estimation
//!
//! Approximate token counting and budget truncation for prompt sizing.
//! Counts are estimated from character length at the cl100k-base average of
//! roughly four characters per token; exact enough for a coarse input
//! budget, with no tokenizer model to load.

use tracing::debug;

/// Average characters per token for cl100k-base-family models.
const CHARS_PER_TOKEN: f32 = 4.0;

/// Result of applying a token budget to a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetedText {
    /// The text, truncated if it exceeded the budget
    pub text: String,
    /// Estimated tokens dropped by truncation; zero when under budget
    pub dropped_tokens: usize,
}

/// Token estimation functionality
pub struct TokenEstimator;

impl TokenEstimator {
    /// Estimate the token count of a text.
    pub fn estimate(text: &str) -> usize {
        (text.chars().count() as f32 / CHARS_PER_TOKEN).ceil() as usize
    }

    /// Cut a text down to an estimated token budget.
    ///
    /// Truncation is from the end, at a character boundary. The dropped
    /// count reports how much was lost so the caller can tell the user.
    pub fn truncate_to(text: &str, max_tokens: usize) -> BudgetedText {
        let total = Self::estimate(text);
        if total <= max_tokens {
            return BudgetedText {
                text: text.to_string(),
                dropped_tokens: 0,
            };
        }

        let keep_chars = (max_tokens as f32 * CHARS_PER_TOKEN) as usize;
        let truncated: String = text.chars().take(keep_chars).collect();
        let dropped = total - Self::estimate(&truncated);

        debug!(
            total_tokens = total,
            kept_tokens = max_tokens,
            dropped_tokens = dropped,
            "Input exceeded token budget, truncated"
        );

        BudgetedText {
            text: truncated,
            dropped_tokens: dropped,
        }
    }
}
