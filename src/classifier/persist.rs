//! Saving and loading model snapshots as JSON files.
//!
//! Writes go through a temporary file in the destination directory which
//! is atomically persisted over the target, so a crash mid-save never
//! leaves a truncated model file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use tempfile::NamedTempFile;

use crate::analysis::Tokenizer;
use crate::classifier::{ModelSnapshot, NaiveBayesClassifier};
use crate::error::Result;

impl NaiveBayesClassifier {
    /// Save the model's snapshot to `path` as pretty-printed JSON.
    ///
    /// Parent directories are created if missing.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let temp_file = NamedTempFile::new_in(parent)?;
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, &self.to_snapshot())?;
        writer.flush()?;
        drop(writer);
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }

    /// Load a model from a JSON snapshot file, using the default tokenizer.
    ///
    /// # Errors
    ///
    /// I/O and JSON errors propagate; a structurally inconsistent snapshot
    /// yields [`crate::error::DocsortError::InvalidSnapshot`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot: ModelSnapshot = serde_json::from_reader(BufReader::new(file))?;
        Self::from_snapshot(snapshot)
    }

    /// Load a model from a JSON snapshot file with an explicit tokenizer.
    pub fn load_with_tokenizer<P: AsRef<Path>>(
        path: P,
        tokenizer: Arc<dyn Tokenizer>,
    ) -> Result<Self> {
        let file = File::open(path)?;
        let snapshot: ModelSnapshot = serde_json::from_reader(BufReader::new(file))?;
        Self::from_snapshot_with_tokenizer(snapshot, tokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsortError;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.json");

        let mut model = NaiveBayesClassifier::new();
        model.learn("buy cheap pills", "spam").unwrap();
        model.learn("meeting agenda attached", "ham").unwrap();
        model.save(&path).unwrap();

        let restored = NaiveBayesClassifier::load(&path).unwrap();
        assert_eq!(restored.total_documents(), 2);
        assert_eq!(
            restored.categorize("cheap pills").unwrap(),
            model.categorize("cheap pills").unwrap()
        );
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("model.json");

        let mut model = NaiveBayesClassifier::new();
        model.learn("hello world", "greetings").unwrap();
        model.save(&path).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.json");

        let mut model = NaiveBayesClassifier::new();
        model.learn("first pass", "a").unwrap();
        model.save(&path).unwrap();

        model.learn("second pass", "b").unwrap();
        model.save(&path).unwrap();

        let restored = NaiveBayesClassifier::load(&path).unwrap();
        assert_eq!(restored.total_documents(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        match NaiveBayesClassifier::load(&path) {
            Err(DocsortError::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.json");
        fs::write(&path, "{ not json").unwrap();

        match NaiveBayesClassifier::load(&path) {
            Err(DocsortError::Json(_)) => {}
            other => panic!("expected Json error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_inconsistent_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.json");

        let mut model = NaiveBayesClassifier::new();
        model.learn("alpha beta", "letters").unwrap();
        let mut snapshot = model.to_snapshot();
        snapshot.vocab_size = 99;
        fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

        match NaiveBayesClassifier::load(&path) {
            Err(DocsortError::InvalidSnapshot(_)) => {}
            other => panic!("expected InvalidSnapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_negative_counts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("model.json");

        // Counters are unsigned, so a negative count must fail to parse.
        let json = r#"{
            "categories": ["spam"],
            "docCount": {"spam": -1},
            "totalDocs": -1,
            "vocab": [],
            "vocabSize": 0,
            "wordCount": {"spam": 0},
            "wordFreqCount": {"spam": {}}
        }"#;
        fs::write(&path, json).unwrap();

        match NaiveBayesClassifier::load(&path) {
            Err(DocsortError::Json(_)) => {}
            other => panic!("expected Json error, got {other:?}"),
        }
    }
}
