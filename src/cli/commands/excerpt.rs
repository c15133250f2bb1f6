//! Excerpt command - show phrases with surrounding context

use super::input::{MatchArgs, TextArgs};
use crate::cli::output::{colors, format_hits_colored, print_json};
use crate::cli::OutputFormat;
use crate::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the excerpt command
#[derive(Args, Debug)]
pub struct ExcerptArgs {
    /// Phrases to search for
    #[arg(required = true)]
    pub phrases: Vec<String>,

    /// Words of context on each side of a match (default from config)
    #[arg(long, short = 'n')]
    pub context_words: Option<usize>,

    #[command(flatten)]
    pub matching: MatchArgs,

    #[command(flatten)]
    pub input: TextArgs,
}

/// Execute the excerpt command
pub fn execute(
    args: ExcerptArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.input.read()?;

    let mut options = services.excerpt_options();
    if let Some(words) = args.context_words {
        options.context_words = words;
    }
    options.matching = args.matching.apply(options.matching);

    let result = services.excerpt(&text, &args.phrases, &options)?;

    match format {
        OutputFormat::Human => {
            if result.hits == 0 {
                eprintln!("{}", colors::dim("No matches; showing the full text"));
            }
            println!("{}", result.excerpt);
            eprintln!("{}", format_hits_colored(result.hits));
        }
        OutputFormat::Json => print_json(&result)?,
    }

    Ok(())
}
