// src/cli.rs

use anyhow::{Context as _, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use crate::core::counter::count_words;
use crate::core::stopwords::{StopWordSet, load_stop_words};
use crate::utils::print_result;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text to analyse (read from --file when omitted)
    pub text: Option<String>,

    /// Read the text to analyse from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// File containing stop words, one per line
    #[arg(short, long)]
    pub stop_words: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Runs one counting pass over the configured input and prints the result.
///
/// # Errors
///
/// This function may return an error if:
/// * The stop-word or input file cannot be read
/// * Neither a text argument nor an input file was given
pub fn run(args: Args) -> Result<()> {
    let stop_words = match args.stop_words {
        Some(path) => load_stop_words(&path)?,
        None => StopWordSet::new(),
    };

    let file_text = match args.file {
        Some(path) => Some(
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        ),
        None => None,
    };
    let text = file_text.as_deref().or(args.text.as_deref());

    let result = count_words(text, &stop_words)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    Ok(())
}
