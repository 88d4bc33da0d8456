//! Command line argument parsing for the docsort CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// docsort - a multinomial Naive Bayes text classifier
#[derive(Parser, Debug, Clone)]
#[command(name = "docsort")]
#[command(about = "A multinomial Naive Bayes text classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct DocsortArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl DocsortArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Learn a labeled document into a model file
    Learn(LearnArgs),

    /// Classify text against a trained model
    Classify(ClassifyArgs),

    /// Show model statistics
    Stats(StatsArgs),
}

/// Arguments for learning a document
#[derive(Parser, Debug, Clone)]
pub struct LearnArgs {
    /// Path to the model file (created if missing)
    #[arg(value_name = "MODEL_PATH")]
    pub model_path: PathBuf,

    /// Category to file the document under
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Document text (mutually exclusive with --file)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the document from a file instead
    #[arg(short = 'F', long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,
}

/// Arguments for classifying text
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Path to the model file
    #[arg(value_name = "MODEL_PATH")]
    pub model_path: PathBuf,

    /// Text to classify (mutually exclusive with --file)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(short = 'F', long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Print the per-category log-posterior scores
    #[arg(short, long)]
    pub show_scores: bool,
}

/// Arguments for showing model statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the model file
    #[arg(value_name = "MODEL_PATH")]
    pub model_path: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
