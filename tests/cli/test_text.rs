//! Tests for the excerpt, highlight and hits commands

use crate::cli::test_helpers::{inline, no_flags, temp_file};
use crate::common::{create_test_services, PANGRAM};
use kewl::cli::commands::input::{MatchArgs, TextArgs};
use kewl::cli::commands::{excerpt, highlight, hits};
use kewl::cli::OutputFormat;

#[test]
fn test_excerpt_human_and_json() {
    let services = create_test_services();

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = excerpt::ExcerptArgs {
            phrases: vec!["fox".to_string()],
            context_words: Some(1),
            matching: no_flags(),
            input: inline(PANGRAM),
        };
        let result = excerpt::execute(args, &services, format);
        assert!(result.is_ok(), "excerpt should succeed: {:?}", result.err());
    }
}

#[test]
fn test_excerpt_from_file() {
    let services = create_test_services();
    let (_dir, path) = temp_file("body.txt", PANGRAM);

    let args = excerpt::ExcerptArgs {
        phrases: vec!["dog".to_string()],
        context_words: None,
        matching: no_flags(),
        input: TextArgs {
            text: None,
            file: Some(path),
        },
    };
    assert!(excerpt::execute(args, &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_excerpt_missing_file_fails() {
    let services = create_test_services();
    let args = excerpt::ExcerptArgs {
        phrases: vec!["dog".to_string()],
        context_words: None,
        matching: no_flags(),
        input: TextArgs {
            text: None,
            file: Some("/nonexistent/body.txt".into()),
        },
    };
    assert!(excerpt::execute(args, &services, OutputFormat::Human).is_err());
}

#[test]
fn test_highlight_with_class_and_flags() {
    let services = create_test_services();
    let args = highlight::HighlightArgs {
        phrases: vec!["Fox".to_string()],
        class: Some("hit".to_string()),
        matching: MatchArgs {
            case_sensitive: true,
            ..Default::default()
        },
        input: inline(PANGRAM),
    };

    let result = highlight::execute(args, &services, OutputFormat::Json);
    assert!(result.is_ok(), "highlight should succeed: {:?}", result.err());
}

#[test]
fn test_hits_command() {
    let services = create_test_services();
    let args = hits::HitsArgs {
        phrases: vec!["cat".to_string()],
        matching: MatchArgs {
            word_boundary: true,
            ..Default::default()
        },
        input: inline("cat catalog"),
    };

    assert!(hits::execute(args, &services, OutputFormat::Human).is_ok());
}
