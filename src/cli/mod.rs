//! CLI adapter for kewl
//!
//! Command-line access to the search helpers, the URL and meta
//! builders and the template engine. This module sits beside
//! `template/`: both depend on `core/`.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |    (helpers)     |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |   template/      +----->|      cli/        |
//! | (tags, filters)  |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// kewl - search excerpts, highlighting and page helpers
///
/// Excerpt and highlight search phrases in text read from a file or
/// stdin, build absolute URLs and meta tags, or render templates that
/// use the search tags.
#[derive(Parser, Debug)]
#[command(name = "kewl")]
#[command(version)]
#[command(about = "Search excerpts, highlighting and page helpers", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Config file (overrides KEWL_CONFIG and the XDG config file)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show each phrase with a window of context words
    Excerpt(commands::ExcerptArgs),

    /// Wrap phrase occurrences in a marker span
    Highlight(commands::HighlightArgs),

    /// Count phrase occurrences
    Hits(commands::HitsArgs),

    /// Build an absolute URL on the configured site
    Url(commands::UrlArgs),

    /// Format an Open Graph or Twitter meta tag
    Meta(commands::MetaArgs),

    /// Render a template using the search tags and filters
    Render(commands::RenderArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  kewl completions bash > ~/.local/share/bash-completion/completions/kewl
    ///   zsh:   kewl completions zsh > ~/.zfunc/_kewl
    ///   fish:  kewl completions fish > ~/.config/fish/completions/kewl.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load()?,
    };
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::Excerpt(args) => commands::excerpt::execute(args, &services, cli.format),
        Commands::Highlight(args) => commands::highlight::execute(args, &services, cli.format),
        Commands::Hits(args) => commands::hits::execute(args, &services, cli.format),
        Commands::Url(args) => commands::url::execute(args, &services, cli.format),
        Commands::Meta(args) => commands::meta::execute(args, &services, cli.format),
        Commands::Render(args) => commands::render::execute(args, &services, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
