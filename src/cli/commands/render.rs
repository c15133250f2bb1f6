//! Render command - render a template with the search tags

use crate::cli::output::print_json;
use crate::cli::OutputFormat;
use crate::services::Services;
use crate::template::Context;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Template file ("-" reads stdin)
    pub template: PathBuf,

    /// Context variables as a JSON object
    #[arg(long, conflicts_with = "context_file")]
    pub context: Option<String>,

    /// Read context variables from a JSON file
    #[arg(long, value_name = "FILE")]
    pub context_file: Option<PathBuf>,
}

/// Render response
#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub output: String,
    /// Context after rendering, including values stored with `as name`
    pub context: Value,
}

fn read_template(path: &Path) -> io::Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(path)
    }
}

/// Execute the render command
pub fn execute(
    args: RenderArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = read_template(&args.template)?;

    let vars: Value = match (&args.context, &args.context_file) {
        (Some(json), _) => serde_json::from_str(json)?,
        (None, Some(path)) => serde_json::from_str(&fs::read_to_string(path)?)?,
        (None, None) => Value::Null,
    };
    let mut ctx = Context::from_value(vars)?;

    let output = services.render(&source, &mut ctx)?;

    match format {
        OutputFormat::Human => print!("{output}"),
        OutputFormat::Json => print_json(&RenderResponse {
            output,
            context: ctx.into_value(),
        })?,
    }

    Ok(())
}
