//! Config command - show current configuration

use crate::cli::output::{colors, print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use crate::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show-config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the show-config command
pub fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();
    let xdg = XdgDirs::new();
    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        config,
    };

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!("  config_file: {}", colors::path(&response.config_file));
            println!("  search:");
            println!("    context_words: {}", config.search.context_words);
            println!("    ignore_case: {}", config.search.ignore_case);
            println!("    word_boundary: {}", config.search.word_boundary);
            println!("    highlight_class: {}", config.search.highlight_class);
            println!("  site:");
            println!("    name: {:?}", config.site.name);
            println!("    domain: {:?}", config.site.domain);
            println!("    url_scheme: {}", config.site.url_scheme);
            println!("  pagination:");
            println!("    chunk_size: {}", config.pagination.chunk_size);
            println!("    max_passes: {}", config.pagination.max_passes);
        }
        OutputFormat::Json => print_json(&response)?,
    }

    Ok(())
}
