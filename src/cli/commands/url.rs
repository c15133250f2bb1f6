//! Url command - build an absolute URL on the configured site

use crate::cli::output::print_output;
use crate::cli::OutputFormat;
use crate::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the url command
#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Site-relative path (e.g. "blog/post")
    pub path: String,
}

/// Url response
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub path: String,
    pub url: String,
}

/// Execute the url command
pub fn execute(
    args: UrlArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = services.absolute_url(&args.path)?;
    let response = UrlResponse {
        path: args.path,
        url,
    };

    print_output(&response, &response.url, format)?;
    Ok(())
}
