//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{DocsortArgs, OutputFormat};
use crate::error::Result;

/// Result structure for the learn command.
#[derive(Debug, Serialize, Deserialize)]
pub struct LearnResult {
    pub category: String,
    pub total_documents: u64,
    pub vocabulary_size: u64,
}

/// Result structure for the classify command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyResult {
    pub category: String,
    /// Per-category log10-posterior scores, present with --show-scores.
    pub scores: Option<Vec<(String, f64)>>,
}

/// Model statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelStats {
    pub total_documents: u64,
    pub vocabulary_size: u64,
    pub categories: Vec<CategoryStats>,
}

/// Per-category statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryStats {
    pub name: String,
    pub documents: u64,
    pub words: u64,
}

/// Print a serializable result in the requested output format.
pub fn print_result<T: Serialize + HumanDisplay>(result: &T, args: &DocsortArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
        OutputFormat::Human => result.print_human(args.verbosity()),
    }
    Ok(())
}

/// Human-readable rendering of a command result.
pub trait HumanDisplay {
    fn print_human(&self, verbosity: u8);
}

impl HumanDisplay for LearnResult {
    fn print_human(&self, verbosity: u8) {
        if verbosity == 0 {
            return;
        }
        println!("Learned document under '{}'", self.category);
        if verbosity > 1 {
            println!("  total documents: {}", self.total_documents);
            println!("  vocabulary size: {}", self.vocabulary_size);
        }
    }
}

impl HumanDisplay for ClassifyResult {
    fn print_human(&self, verbosity: u8) {
        println!("{}", self.category);
        if let Some(scores) = &self.scores {
            if verbosity > 0 {
                for (name, score) in scores {
                    println!("  {name}: {score:.6}");
                }
            }
        }
    }
}

impl HumanDisplay for ModelStats {
    fn print_human(&self, _verbosity: u8) {
        println!("Total documents: {}", self.total_documents);
        println!("Vocabulary size: {}", self.vocabulary_size);
        println!("Categories ({}):", self.categories.len());
        for category in &self.categories {
            println!(
                "  {} - {} documents, {} words",
                category.name, category.documents, category.words
            );
        }
    }
}
