//! Tests for CLI output formatting helpers

use kewl::cli::output::{colors, format_hits, print_output};
use kewl::cli::OutputFormat;
use serde_json::json;

#[test]
fn test_format_hits_plural() {
    assert_eq!(format_hits(0), "0 hits");
    assert_eq!(format_hits(1), "1 hit");
    assert_eq!(format_hits(2), "2 hits");
}

#[test]
fn test_colors_keep_text() {
    colored::control::set_override(false);
    assert_eq!(colors::number("5").to_string(), "5");
    assert_eq!(colors::label("Configuration:").to_string(), "Configuration:");
    colored::control::unset_override();
}

#[test]
fn test_print_output_both_formats() {
    let data = json!({"hits": 2});
    assert!(print_output(&data, "2", OutputFormat::Human).is_ok());
    assert!(print_output(&data, "2", OutputFormat::Json).is_ok());
}
