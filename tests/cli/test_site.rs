//! Tests for the url and meta commands

use crate::common::create_test_services;
use kewl::cli::commands::meta::{self, MetaArgs, Namespace};
use kewl::cli::commands::url::{self, UrlArgs};
use kewl::cli::OutputFormat;
use kewl::core::config::Config;
use kewl::services::Services;
use std::sync::Arc;

#[test]
fn test_url_command() {
    let services = create_test_services();
    let args = UrlArgs {
        path: "blog/post".to_string(),
    };
    assert!(url::execute(args, &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_url_without_domain_fails() {
    let services = Arc::new(Services::new(Config::default()));
    let args = UrlArgs {
        path: "/a".to_string(),
    };

    let err = url::execute(args, &services, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("domain"));
}

#[test]
fn test_meta_command() {
    let services = create_test_services();
    for namespace in [Namespace::Twitter, Namespace::Og] {
        let args = MetaArgs {
            namespace,
            key: "title".to_string(),
            content: "Foxes".to_string(),
        };
        assert!(meta::execute(args, &services, OutputFormat::Human).is_ok());
    }
}

#[test]
fn test_namespace_prefix() {
    assert_eq!(Namespace::Twitter.prefix(), "twitter");
    assert_eq!(Namespace::Og.prefix(), "og");
}
