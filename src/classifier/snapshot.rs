//! Serializable model snapshots.
//!
//! A [`ModelSnapshot`] is the complete persisted form of a trained
//! classifier: category names, per-category document/word counters, the
//! per-category token frequency tables, the global vocabulary and its
//! size, and the total document count. Wire field names (`totalDocs`,
//! `vocabSize`, `wordFreqCount`, ...) are part of the snapshot format and
//! must stay stable so previously saved models keep loading.
//!
//! Snapshots are validated structurally before a classifier is rebuilt
//! from them; see [`ModelSnapshot::validate`].

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::Tokenizer;
use crate::classifier::model::CategoryState;
use crate::classifier::NaiveBayesClassifier;
use crate::error::{DocsortError, Result};

/// The complete serializable state of a [`NaiveBayesClassifier`].
///
/// Round-tripping a trained model through its snapshot must reproduce an
/// operationally identical model: same `categorize` output for any input.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModelSnapshot {
    /// Names of all known categories.
    pub categories: Vec<String>,
    /// Documents learned per category.
    pub doc_count: BTreeMap<String, u64>,
    /// Total documents learned across all categories.
    pub total_docs: u64,
    /// Every distinct token observed during training.
    pub vocab: BTreeSet<String>,
    /// Cardinality of `vocab`, stored redundantly and cross-checked on load.
    pub vocab_size: u64,
    /// Sum of token occurrences per category.
    pub word_count: BTreeMap<String, u64>,
    /// Cumulative token frequency table per category.
    pub word_freq_count: BTreeMap<String, BTreeMap<String, u64>>,
}

impl ModelSnapshot {
    /// Check the snapshot's structural invariants.
    ///
    /// Rejects snapshots whose counters disagree with their collections:
    /// a stale `vocabSize`, category entries missing from one of the
    /// parallel maps, per-category word counts that do not match the sum
    /// of that category's token frequencies, document counts that do not
    /// sum to `totalDocs`, or tokens counted under a category but absent
    /// from the vocabulary.
    pub fn validate(&self) -> Result<()> {
        if self.vocab_size != self.vocab.len() as u64 {
            return Err(DocsortError::invalid_snapshot(format!(
                "vocabSize is {} but vocab holds {} tokens",
                self.vocab_size,
                self.vocab.len()
            )));
        }

        let names: BTreeSet<&str> = self.categories.iter().map(String::as_str).collect();
        if names.len() != self.categories.len() {
            return Err(DocsortError::invalid_snapshot(
                "duplicate category names".to_string(),
            ));
        }
        let doc_keys: BTreeSet<&str> = self.doc_count.keys().map(String::as_str).collect();
        let word_keys: BTreeSet<&str> = self.word_count.keys().map(String::as_str).collect();
        let freq_keys: BTreeSet<&str> = self.word_freq_count.keys().map(String::as_str).collect();
        for (map_name, keys) in [
            ("docCount", &doc_keys),
            ("wordCount", &word_keys),
            ("wordFreqCount", &freq_keys),
        ] {
            if *keys != names {
                return Err(DocsortError::invalid_snapshot(format!(
                    "{map_name} keys do not match the category list"
                )));
            }
        }

        let doc_total: u64 = self.doc_count.values().sum();
        if doc_total != self.total_docs {
            return Err(DocsortError::invalid_snapshot(format!(
                "per-category document counts sum to {doc_total} but totalDocs is {}",
                self.total_docs
            )));
        }

        for (name, frequencies) in &self.word_freq_count {
            let word_total: u64 = frequencies.values().sum();
            if word_total != self.word_count[name] {
                return Err(DocsortError::invalid_snapshot(format!(
                    "category '{name}' wordCount is {} but its token frequencies sum to {word_total}",
                    self.word_count[name]
                )));
            }
            for token in frequencies.keys() {
                if !self.vocab.contains(token) {
                    return Err(DocsortError::invalid_snapshot(format!(
                        "category '{name}' counts token '{token}' missing from vocab"
                    )));
                }
            }
        }

        Ok(())
    }
}

impl NaiveBayesClassifier {
    /// Export the model's complete state as a snapshot.
    pub fn to_snapshot(&self) -> ModelSnapshot {
        let mut doc_count = BTreeMap::new();
        let mut word_count = BTreeMap::new();
        let mut word_freq_count = BTreeMap::new();

        for (name, state) in self.category_states() {
            doc_count.insert(name.clone(), state.doc_count);
            word_count.insert(name.clone(), state.word_count);
            word_freq_count.insert(
                name.clone(),
                state
                    .token_counts
                    .iter()
                    .map(|(token, count)| (token.clone(), *count))
                    .collect(),
            );
        }

        ModelSnapshot {
            categories: self.categories().map(str::to_string).collect(),
            doc_count,
            total_docs: self.total_documents(),
            vocab: self.vocabulary().iter().cloned().collect(),
            vocab_size: self.vocabulary_size(),
            word_count,
            word_freq_count,
        }
    }

    /// Rebuild a classifier from a snapshot, using the default tokenizer.
    ///
    /// # Errors
    ///
    /// Returns [`DocsortError::InvalidSnapshot`] if the snapshot fails
    /// structural validation.
    pub fn from_snapshot(snapshot: ModelSnapshot) -> Result<Self> {
        Self::from_snapshot_with_tokenizer(
            snapshot,
            Arc::new(crate::analysis::PlainTokenizer::new()),
        )
    }

    /// Rebuild a classifier from a snapshot with an explicit tokenizer.
    ///
    /// The tokenizer is not part of the persisted state; it must match the
    /// one used during training for classification results to carry over.
    pub fn from_snapshot_with_tokenizer(
        snapshot: ModelSnapshot,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Result<Self> {
        snapshot.validate()?;

        let mut categories = BTreeMap::new();
        for name in &snapshot.categories {
            let token_counts: HashMap<String, u64> = snapshot.word_freq_count[name]
                .iter()
                .map(|(token, count)| (token.clone(), *count))
                .collect();
            categories.insert(
                name.clone(),
                CategoryState {
                    doc_count: snapshot.doc_count[name],
                    word_count: snapshot.word_count[name],
                    token_counts,
                },
            );
        }

        let vocabulary: HashSet<String> = snapshot.vocab.into_iter().collect();
        Ok(Self::from_parts(
            tokenizer,
            snapshot.total_docs,
            vocabulary,
            snapshot.vocab_size,
            categories,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trained_model() -> NaiveBayesClassifier {
        let mut model = NaiveBayesClassifier::new();
        model.learn("buy cheap pills", "spam").unwrap();
        model.learn("cheap watches here", "spam").unwrap();
        model.learn("meeting agenda attached", "ham").unwrap();
        model
    }

    #[test]
    fn test_snapshot_round_trip() {
        let model = trained_model();
        let snapshot = model.to_snapshot();
        let restored = NaiveBayesClassifier::from_snapshot(snapshot.clone()).unwrap();

        assert_eq!(restored.total_documents(), model.total_documents());
        assert_eq!(restored.vocabulary_size(), model.vocabulary_size());
        assert_eq!(restored.to_snapshot(), snapshot);

        for probe in ["cheap pills", "meeting agenda", "watches attached"] {
            assert_eq!(
                restored.categorize(probe).unwrap(),
                model.categorize(probe).unwrap()
            );
        }
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let model = trained_model();
        let json = serde_json::to_string(&model.to_snapshot()).unwrap();
        let snapshot: ModelSnapshot = serde_json::from_str(&json).unwrap();
        let restored = NaiveBayesClassifier::from_snapshot(snapshot).unwrap();

        assert_eq!(
            restored.categorize("cheap pills").unwrap(),
            model.categorize("cheap pills").unwrap()
        );
    }

    #[test]
    fn test_snapshot_wire_field_names() {
        let model = trained_model();
        let value = serde_json::to_value(model.to_snapshot()).unwrap();
        let object = value.as_object().unwrap();

        for field in [
            "categories",
            "docCount",
            "totalDocs",
            "vocab",
            "vocabSize",
            "wordCount",
            "wordFreqCount",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn test_validate_rejects_vocab_size_mismatch() {
        let mut snapshot = trained_model().to_snapshot();
        snapshot.vocab_size += 1;

        match NaiveBayesClassifier::from_snapshot(snapshot) {
            Err(DocsortError::InvalidSnapshot(_)) => {}
            other => panic!("expected InvalidSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_doc_count_mismatch() {
        let mut snapshot = trained_model().to_snapshot();
        snapshot.total_docs += 5;

        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_category_entry() {
        let mut snapshot = trained_model().to_snapshot();
        snapshot.word_count.remove("ham");

        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_word_count_drift() {
        let mut snapshot = trained_model().to_snapshot();
        *snapshot.word_count.get_mut("spam").unwrap() += 1;

        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_token_outside_vocab() {
        let mut snapshot = trained_model().to_snapshot();
        snapshot.vocab.remove("cheap");
        snapshot.vocab_size -= 1;

        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_empty_model_snapshot_is_valid() {
        let snapshot = NaiveBayesClassifier::new().to_snapshot();
        assert!(snapshot.validate().is_ok());

        let restored = NaiveBayesClassifier::from_snapshot(snapshot).unwrap();
        assert_eq!(restored.total_documents(), 0);
    }
}
