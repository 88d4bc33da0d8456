//! Command implementations for the docsort CLI.

use std::fs;
use std::path::Path;

use crate::classifier::NaiveBayesClassifier;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{DocsortError, Result};

/// Execute a CLI command.
pub fn execute_command(args: DocsortArgs) -> Result<()> {
    match &args.command {
        Command::Learn(learn_args) => learn(learn_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Stats(stats_args) => show_stats(stats_args.clone(), &args),
    }
}

/// Learn a labeled document into a model file, creating it if missing.
fn learn(args: LearnArgs, cli_args: &DocsortArgs) -> Result<()> {
    let text = read_input(args.text.as_deref(), args.file.as_deref())?;

    let mut model = if args.model_path.exists() {
        if cli_args.verbosity() > 1 {
            println!("Loading model from: {}", args.model_path.display());
        }
        NaiveBayesClassifier::load(&args.model_path)?
    } else {
        if cli_args.verbosity() > 1 {
            println!("Creating new model at: {}", args.model_path.display());
        }
        NaiveBayesClassifier::new()
    };

    model.learn(&text, &args.category)?;
    model.save(&args.model_path)?;

    let result = LearnResult {
        category: args.category,
        total_documents: model.total_documents(),
        vocabulary_size: model.vocabulary_size(),
    };
    print_result(&result, cli_args)
}

/// Classify text against a trained model.
fn classify(args: ClassifyArgs, cli_args: &DocsortArgs) -> Result<()> {
    let text = read_input(args.text.as_deref(), args.file.as_deref())?;
    let model = NaiveBayesClassifier::load(&args.model_path)?;

    let category = model.categorize(&text)?;
    let scores = if args.show_scores {
        Some(model.scores(&text)?)
    } else {
        None
    };

    let result = ClassifyResult { category, scores };
    print_result(&result, cli_args)
}

/// Show statistics of a trained model.
fn show_stats(args: StatsArgs, cli_args: &DocsortArgs) -> Result<()> {
    let model = NaiveBayesClassifier::load(&args.model_path)?;

    let categories = model
        .categories()
        .map(|name| CategoryStats {
            name: name.to_string(),
            documents: model.document_count(name).unwrap_or(0),
            words: model.word_count(name).unwrap_or(0),
        })
        .collect();

    let stats = ModelStats {
        total_documents: model.total_documents(),
        vocabulary_size: model.vocabulary_size(),
        categories,
    };
    print_result(&stats, cli_args)
}

/// Resolve the document text from an inline argument or a file.
fn read_input(text: Option<&str>, file: Option<&Path>) -> Result<String> {
    match (text, file) {
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => Ok(fs::read_to_string(path)?),
        (None, None) => Err(DocsortError::invalid_operation(
            "provide either inline text or --file",
        )),
        // clap rejects this combination before we get here
        (Some(_), Some(_)) => Err(DocsortError::invalid_operation(
            "text and --file are mutually exclusive",
        )),
    }
}
