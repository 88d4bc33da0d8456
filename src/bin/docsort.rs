//! docsort CLI binary.

use clap::Parser;
use docsort::cli::{args::DocsortArgs, commands::execute_command};
use std::process;

fn main() {
    // Parse command line arguments using clap
    let args = DocsortArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
