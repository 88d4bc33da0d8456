//! Error types for the docsort library.
//!
//! All fallible operations in docsort return [`Result`], whose error type
//! is the [`DocsortError`] enum defined here.
//!
//! # Examples
//!
//! ```
//! use docsort::error::{DocsortError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DocsortError::invalid_operation("nothing to do"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for docsort operations.
///
/// Uses the `thiserror` crate for the `Error` trait implementation and
/// provides constructor methods for the string-carrying variants.
#[derive(Error, Debug)]
pub enum DocsortError {
    /// I/O errors (model file reads and writes)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, frequency counting)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// `categorize` was called before any document was learned,
    /// so no prior probability can be computed.
    #[error("model has no training documents, cannot categorize")]
    UntrainedModel,

    /// A probability was requested for a category the model has never
    /// seen. Public entry points only route through known categories,
    /// so hitting this indicates a caller bug.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// A serialized model snapshot failed structural validation.
    #[error("invalid model snapshot: {0}")]
    InvalidSnapshot(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with DocsortError.
pub type Result<T> = std::result::Result<T, DocsortError>;

impl DocsortError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DocsortError::Analysis(msg.into())
    }

    /// Create a new unknown-category error.
    pub fn unknown_category<S: Into<String>>(name: S) -> Self {
        DocsortError::UnknownCategory(name.into())
    }

    /// Create a new invalid-snapshot error.
    pub fn invalid_snapshot<S: Into<String>>(msg: S) -> Self {
        DocsortError::InvalidSnapshot(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        DocsortError::InvalidOperation(msg.into())
    }
}
