//! Thread-safe classifier handle.
//!
//! The core model is single-threaded by design: `learn` needs exclusive
//! access while `categorize` and friends only read. [`SharedClassifier`]
//! packages that reader/writer exclusion behind an `Arc<RwLock<_>>` so a
//! trained model can be shared across threads and cloned cheaply.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::classifier::{ModelSnapshot, NaiveBayesClassifier};
use crate::error::Result;

/// A cheaply clonable, thread-safe handle around a [`NaiveBayesClassifier`].
///
/// Reads (`categorize`, `scores`, `token_probability`, accessors) take a
/// shared lock and may run concurrently; `learn` takes the exclusive lock.
#[derive(Clone)]
pub struct SharedClassifier {
    inner: Arc<RwLock<NaiveBayesClassifier>>,
}

impl SharedClassifier {
    /// Wrap a classifier in a shared handle.
    pub fn new(model: NaiveBayesClassifier) -> Self {
        SharedClassifier {
            inner: Arc::new(RwLock::new(model)),
        }
    }

    /// Learn a labeled training document. Takes the write lock.
    pub fn learn(&self, text: &str, category: &str) -> Result<()> {
        self.inner.write().learn(text, category)
    }

    /// Predict the most probable category for `text`.
    pub fn categorize(&self, text: &str) -> Result<String> {
        self.inner.read().categorize(text)
    }

    /// Per-category log-posterior scores for `text`.
    pub fn scores(&self, text: &str) -> Result<Vec<(String, f64)>> {
        self.inner.read().scores(text)
    }

    /// Smoothed P(word | category) estimate.
    pub fn token_probability(&self, word: &str, category: &str) -> Result<f64> {
        self.inner.read().token_probability(word, category)
    }

    /// Total number of documents learned.
    pub fn total_documents(&self) -> u64 {
        self.inner.read().total_documents()
    }

    /// Export the current state as a snapshot.
    pub fn snapshot(&self) -> ModelSnapshot {
        self.inner.read().to_snapshot()
    }

    /// Run a closure against the model under the shared lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&NaiveBayesClassifier) -> R) -> R {
        f(&self.inner.read())
    }
}

impl std::fmt::Debug for SharedClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(&*self.inner.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_learn_and_categorize() {
        let shared = SharedClassifier::new(NaiveBayesClassifier::new());
        shared.learn("buy cheap pills", "spam").unwrap();
        shared.learn("meeting agenda attached", "ham").unwrap();

        assert_eq!(shared.categorize("cheap pills").unwrap(), "spam");
        assert_eq!(shared.total_documents(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let shared = SharedClassifier::new(NaiveBayesClassifier::new());
        let clone = shared.clone();

        shared.learn("hello world", "greetings").unwrap();
        assert_eq!(clone.total_documents(), 1);
    }

    #[test]
    fn test_concurrent_readers_and_writer() {
        let shared = SharedClassifier::new(NaiveBayesClassifier::new());
        shared.learn("buy cheap pills", "spam").unwrap();
        shared.learn("meeting agenda attached", "ham").unwrap();

        let mut handles = Vec::new();
        for _ in 0..4 {
            let reader = shared.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..50 {
                    assert_eq!(reader.categorize("cheap pills").unwrap(), "spam");
                }
            }));
        }

        let writer = shared.clone();
        handles.push(thread::spawn(move || {
            for k in 0..50 {
                writer
                    .learn(&format!("cheap offer {k}"), "spam")
                    .unwrap();
            }
        }));

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.total_documents(), 52);
    }
}
