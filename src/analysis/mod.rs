//! Text analysis for classification.
//!
//! Analysis happens in two stateless steps: a [`Tokenizer`] turns raw text
//! into an ordered sequence of normalized tokens, and
//! [`frequency::term_frequencies`] folds that sequence into a token →
//! occurrence-count table. Both are pure functions of their input; all
//! training state lives in the classifier.

pub mod frequency;
pub mod tokenizer;

pub use frequency::term_frequencies;
pub use tokenizer::{PlainTokenizer, Tokenizer};
