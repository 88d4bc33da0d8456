//! The multinomial Naive Bayes model.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use crate::analysis::{term_frequencies, PlainTokenizer, Tokenizer};
use crate::error::{DocsortError, Result};

/// Additive smoothing pseudocount applied to every token likelihood.
///
/// Deliberately far below the classic Laplace add-one value; the constant
/// is part of the model's scoring contract and must not change between
/// releases, or saved models would rank differently after an upgrade.
pub const SMOOTHING_K: f64 = 0.0001;

/// Per-category training state.
#[derive(Clone, Debug, Default)]
pub(crate) struct CategoryState {
    /// Number of documents learned under this category.
    pub doc_count: u64,
    /// Sum of token occurrences across all of this category's documents.
    pub word_count: u64,
    /// Cumulative occurrence count per token within this category.
    pub token_counts: HashMap<String, u64>,
}

/// A supervised multinomial Naive Bayes text classifier.
///
/// The model learns per-category word-frequency statistics from labeled
/// documents and predicts the most probable category for new text by
/// ranking log-posterior scores. Likelihoods are smoothed with
/// [`SMOOTHING_K`] so tokens never seen in a category still contribute a
/// finite score.
///
/// `learn` is the only mutator; `categorize`, `scores` and
/// `token_probability` are pure readers. Categories and vocabulary only
/// grow; there is no unlearning.
///
/// Categories are kept in a `BTreeMap`, so enumeration order (and thus
/// the tie-break in [`categorize`](Self::categorize)) is lexicographic
/// and stable across runs.
#[derive(Clone)]
pub struct NaiveBayesClassifier {
    /// Tokenizer applied to both training and query text.
    tokenizer: Arc<dyn Tokenizer>,
    /// Total number of documents learned across all categories.
    total_docs: u64,
    /// Set of distinct tokens ever observed during training.
    vocabulary: HashSet<String>,
    /// Tracked alongside the set so snapshots can cross-check it.
    vocab_size: u64,
    categories: BTreeMap<String, CategoryState>,
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("tokenizer", &self.tokenizer.name())
            .field("total_docs", &self.total_docs)
            .field("vocab_size", &self.vocab_size)
            .field("categories", &self.categories.len())
            .finish()
    }
}

impl Default for NaiveBayesClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NaiveBayesClassifier {
    /// Create a new, empty classifier using the default [`PlainTokenizer`].
    pub fn new() -> Self {
        Self::with_tokenizer(Arc::new(PlainTokenizer::new()))
    }

    /// Create a new, empty classifier using the given tokenizer.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        NaiveBayesClassifier {
            tokenizer,
            total_docs: 0,
            vocabulary: HashSet::new(),
            vocab_size: 0,
            categories: BTreeMap::new(),
        }
    }

    /// Register a category with zeroed counters.
    ///
    /// Idempotent: a no-op if the category already exists. `learn` calls
    /// this implicitly, so explicit registration is only needed to make a
    /// category visible before any document has been learned under it.
    pub fn init_category(&mut self, name: &str) {
        self.categories.entry(name.to_string()).or_default();
    }

    /// Learn a labeled training document.
    ///
    /// Registers `category` if needed, then folds the document's token
    /// frequencies into the category's counters and the global vocabulary.
    ///
    /// A text that tokenizes to zero tokens still counts as a document:
    /// the category and total document counters increment, shifting the
    /// category's prior even though no word statistics change.
    pub fn learn(&mut self, text: &str, category: &str) -> Result<()> {
        self.init_category(category);
        let state = self
            .categories
            .get_mut(category)
            .ok_or_else(|| DocsortError::unknown_category(category))?;
        state.doc_count += 1;
        self.total_docs += 1;

        let tokens = self.tokenizer.tokenize(text)?;
        let frequencies = term_frequencies(&tokens);

        for (token, freq) in frequencies {
            if self.vocabulary.insert(token.clone()) {
                self.vocab_size += 1;
            }
            *state.token_counts.entry(token).or_insert(0) += freq;
            state.word_count += freq;
        }

        Ok(())
    }

    /// Smoothed conditional probability estimate P(word | category).
    ///
    /// Returns `(count + K) / (word_count + vocab_size)` where `count` is
    /// the word's cumulative frequency within the category. Strictly
    /// positive even for words the category has never seen.
    ///
    /// # Errors
    ///
    /// Returns [`DocsortError::UnknownCategory`] if `category` was never
    /// registered. Public entry points only pass known categories, so
    /// callers hitting this have a bug.
    pub fn token_probability(&self, word: &str, category: &str) -> Result<f64> {
        let state = self
            .categories
            .get(category)
            .ok_or_else(|| DocsortError::unknown_category(category))?;

        let count = state.token_counts.get(word).copied().unwrap_or(0) as f64;
        Ok((count + SMOOTHING_K) / (state.word_count as f64 + self.vocab_size as f64))
    }

    /// Compute the log-posterior score of every known category for `text`.
    ///
    /// Each score is `log10(prior)` plus, for every distinct query token,
    /// its in-query frequency times `log10(token_probability)`. Scores are
    /// returned in category (lexicographic) order;
    /// [`categorize`](Self::categorize) ranks over exactly this table.
    ///
    /// # Errors
    ///
    /// Returns [`DocsortError::UntrainedModel`] if no document has been
    /// learned yet, since no prior can be computed.
    pub fn scores(&self, text: &str) -> Result<Vec<(String, f64)>> {
        if self.total_docs == 0 || self.categories.is_empty() {
            return Err(DocsortError::UntrainedModel);
        }

        let tokens = self.tokenizer.tokenize(text)?;
        let frequencies = term_frequencies(&tokens);

        let mut scores = Vec::with_capacity(self.categories.len());
        for (name, state) in &self.categories {
            let prior = state.doc_count as f64 / self.total_docs as f64;
            let mut score = prior.log10();

            for (token, freq) in &frequencies {
                let likelihood = self.token_probability(token, name)?;
                score += *freq as f64 * likelihood.log10();
            }

            scores.push((name.clone(), score));
        }

        Ok(scores)
    }

    /// Predict the most probable category for `text`.
    ///
    /// Returns the category with the greatest log-posterior score. Only a
    /// strictly greater score replaces the current best, so ties keep the
    /// lexicographically first category and a NaN score never wins (a
    /// degenerate corpus can produce `-inf + inf` for a category that was
    /// registered but never learned).
    ///
    /// # Errors
    ///
    /// Returns [`DocsortError::UntrainedModel`] if no document has been
    /// learned yet.
    pub fn categorize(&self, text: &str) -> Result<String> {
        let scores = self.scores(text)?;

        let mut best_score = f64::NEG_INFINITY;
        let mut best: Option<&str> = None;
        for (name, score) in &scores {
            // Replace only on strictly greater: NaN fails the comparison
            // and can never be selected.
            if *score > best_score {
                best_score = *score;
                best = Some(name);
            }
        }

        // scores() never returns an empty table for a trained model
        best.map(str::to_string).ok_or(DocsortError::UntrainedModel)
    }

    /// Total number of documents learned across all categories.
    pub fn total_documents(&self) -> u64 {
        self.total_docs
    }

    /// Number of distinct tokens observed during training.
    pub fn vocabulary_size(&self) -> u64 {
        self.vocab_size
    }

    /// Whether `token` has ever been observed during training.
    pub fn contains_token(&self, token: &str) -> bool {
        self.vocabulary.contains(token)
    }

    /// Iterate over the known category names in lexicographic order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Number of documents learned under `category`, if it exists.
    pub fn document_count(&self, category: &str) -> Option<u64> {
        self.categories.get(category).map(|state| state.doc_count)
    }

    /// Sum of token occurrences learned under `category`, if it exists.
    pub fn word_count(&self, category: &str) -> Option<u64> {
        self.categories.get(category).map(|state| state.word_count)
    }

    pub(crate) fn vocabulary(&self) -> &HashSet<String> {
        &self.vocabulary
    }

    pub(crate) fn category_states(&self) -> &BTreeMap<String, CategoryState> {
        &self.categories
    }

    pub(crate) fn from_parts(
        tokenizer: Arc<dyn Tokenizer>,
        total_docs: u64,
        vocabulary: HashSet<String>,
        vocab_size: u64,
        categories: BTreeMap<String, CategoryState>,
    ) -> Self {
        NaiveBayesClassifier {
            tokenizer,
            total_docs,
            vocabulary,
            vocab_size,
            categories,
        }
    }
}
