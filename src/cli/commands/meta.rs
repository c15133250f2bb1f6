//! Meta command - format an Open Graph or Twitter meta tag

use crate::cli::output::print_output;
use crate::cli::OutputFormat;
use crate::core::meta::{OPEN_GRAPH, TWITTER};
use crate::services::Services;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::sync::Arc;

/// Meta property namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Namespace {
    /// twitter:*
    Twitter,
    /// og:*
    Og,
}

impl Namespace {
    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Twitter => TWITTER,
            Namespace::Og => OPEN_GRAPH,
        }
    }
}

/// Arguments for the meta command
#[derive(Args, Debug)]
pub struct MetaArgs {
    /// Property namespace
    #[arg(value_enum)]
    pub namespace: Namespace,

    /// Property key (e.g. "title", "card")
    pub key: String,

    /// Property content
    pub content: String,
}

/// Meta response
#[derive(Debug, Serialize)]
pub struct MetaResponse {
    pub property: String,
    pub content: String,
    pub markup: String,
}

/// Execute the meta command
pub fn execute(
    args: MetaArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let prefix = args.namespace.prefix();
    let markup = services.meta(prefix, &args.key, &args.content);
    let response = MetaResponse {
        property: format!("{prefix}:{}", args.key),
        content: args.content,
        markup,
    };

    print_output(&response, &response.markup, format)?;
    Ok(())
}
