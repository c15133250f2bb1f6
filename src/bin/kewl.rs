//! kewl CLI - search excerpts, highlighting and page helpers
//!
//! # Examples
//!
//! ```bash
//! # Excerpt a document around two phrases
//! kewl excerpt fox dog --file article.txt
//!
//! # Highlight with a custom class, reading stdin
//! echo "Rust is fun" | kewl highlight rust --class hl
//!
//! # Render a template
//! kewl render page.html --context '{"q": "fox", "body": "..."}'
//!
//! # Show configuration
//! kewl show-config --format json
//! ```

use clap::Parser;
use kewl::cli::output::print_error;
use kewl::cli::{run, Cli};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "kewl=debug" } else { "kewl=warn" };
    let json = std::env::var("KEWL_LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    // stdout carries command output, logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| {
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .compact()
        }))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    tracing::debug!("kewl {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
