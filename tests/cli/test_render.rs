//! Tests for the render command

use crate::cli::test_helpers::temp_file;
use crate::common::create_test_services;
use kewl::cli::commands::render::{execute, RenderArgs};
use kewl::cli::OutputFormat;

#[test]
fn test_render_with_inline_context() {
    let services = create_test_services();
    let (_dir, template) = temp_file(
        "page.html",
        "{% searchexcerpt q 1 as r %}{{ body }}{% endsearchexcerpt %}{{ r.excerpt }}",
    );

    let args = RenderArgs {
        template,
        context: Some(r#"{"q": "fox", "body": "The quick brown fox jumps"}"#.to_string()),
        context_file: None,
    };
    let result = execute(args, &services, OutputFormat::Json);
    assert!(result.is_ok(), "render should succeed: {:?}", result.err());
}

#[test]
fn test_render_with_context_file() {
    let services = create_test_services();
    let (_tdir, template) = temp_file("page.html", "{{ body|hits:q }}");
    let (_cdir, context) = temp_file("ctx.json", r#"{"q": "a", "body": "a a"}"#);

    let args = RenderArgs {
        template,
        context: None,
        context_file: Some(context),
    };
    assert!(execute(args, &services, OutputFormat::Human).is_ok());
}

#[test]
fn test_render_syntax_error() {
    let services = create_test_services();
    let (_dir, template) = temp_file("bad.html", "{% hits %}x{% endhits %}");

    let args = RenderArgs {
        template,
        context: None,
        context_file: None,
    };
    let err = execute(args, &services, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("expected usage"));
}

#[test]
fn test_render_rejects_non_object_context() {
    let services = create_test_services();
    let (_dir, template) = temp_file("page.html", "x");

    let args = RenderArgs {
        template,
        context: Some("[1, 2]".to_string()),
        context_file: None,
    };
    assert!(execute(args, &services, OutputFormat::Human).is_err());
}
