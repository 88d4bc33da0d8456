//! # docsort
//!
//! A multinomial Naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Additive (Lidstone) smoothing with a small fixed pseudocount
//! - Log-space scoring to avoid probability underflow
//! - Pluggable tokenization
//! - JSON model snapshots with structural validation
//! - Thread-safe shared handle for concurrent use
//!
//! ## Example
//!
//! ```
//! use docsort::classifier::NaiveBayesClassifier;
//!
//! # fn main() -> docsort::error::Result<()> {
//! let mut model = NaiveBayesClassifier::new();
//! model.learn("buy cheap pills", "spam")?;
//! model.learn("meeting agenda attached", "ham")?;
//!
//! assert_eq!(model.categorize("cheap pills")?, "spam");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::{PlainTokenizer, Tokenizer};
    pub use crate::classifier::{NaiveBayesClassifier, SharedClassifier};
    pub use crate::error::{DocsortError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
