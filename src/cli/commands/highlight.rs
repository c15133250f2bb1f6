//! Highlight command - wrap phrase occurrences in a marker span

use super::input::{MatchArgs, TextArgs};
use crate::cli::output::{format_hits_colored, print_json};
use crate::cli::OutputFormat;
use crate::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the highlight command
#[derive(Args, Debug)]
pub struct HighlightArgs {
    /// Phrases to highlight
    #[arg(required = true)]
    pub phrases: Vec<String>,

    /// CSS class of the marker span (default from config)
    #[arg(long)]
    pub class: Option<String>,

    #[command(flatten)]
    pub matching: MatchArgs,

    #[command(flatten)]
    pub input: TextArgs,
}

/// Execute the highlight command
pub fn execute(
    args: HighlightArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.input.read()?;

    let mut options = services.highlight_options();
    if let Some(class) = args.class {
        options.class_name = class;
    }
    options.matching = args.matching.apply(options.matching);

    let result = services.highlight(&text, &args.phrases, &options)?;

    match format {
        OutputFormat::Human => {
            println!("{}", result.highlighted);
            eprintln!("{}", format_hits_colored(result.hits));
        }
        OutputFormat::Json => print_json(&result)?,
    }

    Ok(())
}
