//! Hits command - count phrase occurrences

use super::input::{MatchArgs, TextArgs};
use crate::cli::output::print_output;
use crate::cli::OutputFormat;
use crate::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the hits command
#[derive(Args, Debug)]
pub struct HitsArgs {
    /// Phrases to count
    #[arg(required = true)]
    pub phrases: Vec<String>,

    #[command(flatten)]
    pub matching: MatchArgs,

    #[command(flatten)]
    pub input: TextArgs,
}

/// Hits response
#[derive(Debug, Serialize)]
pub struct HitsResponse {
    pub phrases: Vec<String>,
    pub hits: usize,
}

/// Execute the hits command
pub fn execute(
    args: HitsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.input.read()?;
    let options = args.matching.apply(services.match_options());

    let hits = services.hits(&text, &args.phrases, &options)?;
    let response = HitsResponse {
        phrases: args.phrases,
        hits,
    };

    print_output(&response, &hits.to_string(), format)?;
    Ok(())
}
