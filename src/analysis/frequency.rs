//! Term frequency counting.

use std::collections::HashMap;

/// Count the occurrences of each distinct token in a sequence.
///
/// Pure and deterministic, O(n) in the sequence length. The returned map
/// carries multiset semantics; token order is not preserved.
///
/// # Examples
///
/// ```
/// use docsort::analysis::term_frequencies;
///
/// let tokens: Vec<String> = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
/// let freqs = term_frequencies(&tokens);
///
/// assert_eq!(freqs["a"], 2);
/// assert_eq!(freqs["b"], 1);
/// ```
pub fn term_frequencies(tokens: &[String]) -> HashMap<String, u64> {
    let mut frequencies = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *frequencies.entry(token.clone()).or_insert(0) += 1;
    }
    frequencies
}
