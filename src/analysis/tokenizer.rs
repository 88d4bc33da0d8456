//! Tokenizer implementations for text analysis.
//!
//! # Examples
//!
//! ```
//! use docsort::analysis::{PlainTokenizer, Tokenizer};
//!
//! let tokenizer = PlainTokenizer::new();
//! let tokens = tokenizer.tokenize("Hello, World!\tFoo").unwrap();
//!
//! assert_eq!(tokens, vec!["hello", "world", "foo"]);
//! ```

use crate::error::Result;

/// Trait for tokenizers that convert text into normalized tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered sequence of tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The default tokenizer used for both training and classification.
///
/// # Behavior
///
/// - ASCII punctuation characters are stripped entirely, not replaced
///   with a separator ("don't" becomes "dont"); non-ASCII punctuation
///   such as curly quotes is kept as token content
/// - Tabs and newlines each become a single space
/// - Remaining text is lower-cased
/// - The text is split on the literal space character and empty or
///   whitespace-only segments are dropped
///
/// Output order matches order of occurrence in the input. Empty input
/// yields an empty sequence.
#[derive(Clone, Debug, Default)]
pub struct PlainTokenizer;

impl PlainTokenizer {
    /// Create a new plain tokenizer.
    pub fn new() -> Self {
        PlainTokenizer
    }
}

impl Tokenizer for PlainTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let mut normalized = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_ascii_punctuation() {
                continue;
            }
            if c == '\t' || c == '\n' {
                normalized.push(' ');
            } else {
                normalized.push(c);
            }
        }

        let tokens = normalized
            .to_lowercase()
            .split(' ')
            .filter(|segment| !segment.trim().is_empty())
            .map(|segment| segment.to_string())
            .collect();

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}
