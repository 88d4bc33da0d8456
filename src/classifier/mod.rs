//! Multinomial Naive Bayes classification.
//!
//! This module provides the classifier itself plus its persistence and
//! concurrency wrappers:
//!
//! - [`NaiveBayesClassifier`]: the model that owns all training-derived state
//! - [`ModelSnapshot`]: the serializable form of that state
//! - [`SharedClassifier`]: a cheaply clonable, thread-safe handle
//!
//! # Example
//!
//! ```
//! use docsort::classifier::NaiveBayesClassifier;
//!
//! # fn main() -> docsort::error::Result<()> {
//! let mut model = NaiveBayesClassifier::new();
//! model.learn("buy cheap pills now", "spam")?;
//! model.learn("meeting agenda attached", "ham")?;
//!
//! assert_eq!(model.categorize("cheap pills")?, "spam");
//! # Ok(())
//! # }
//! ```

mod model;
mod persist;
mod shared;
mod snapshot;

// Public exports
pub use model::{NaiveBayesClassifier, SMOOTHING_K};
pub use shared::SharedClassifier;
pub use snapshot::ModelSnapshot;
