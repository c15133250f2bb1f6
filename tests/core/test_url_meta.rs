// Integration tests for the URL builder and meta tags

use kewl::core::config::SiteConfig;
use kewl::core::error::KewlError;
use kewl::core::meta::{meta_open_graph, meta_twitter};
use kewl::core::url::build_absolute_url;

fn site(domain: &str) -> SiteConfig {
    SiteConfig {
        domain: domain.to_string(),
        ..Default::default()
    }
}

#[test]
fn test_url_scenario() {
    assert_eq!(
        build_absolute_url(&site("example.com"), "/a").unwrap(),
        "https://example.com/a/"
    );
}

#[test]
fn test_url_exactly_one_trailing_slash() {
    for path in ["a", "/a", "a/", "/a//"] {
        assert_eq!(
            build_absolute_url(&site("example.com"), path).unwrap(),
            "https://example.com/a/",
            "path {path:?}"
        );
    }
}

#[test]
fn test_url_root_and_scheme() {
    let mut site = site("example.com:8000/");
    site.url_scheme = "http".to_string();

    assert_eq!(build_absolute_url(&site, "").unwrap(), "http://example.com:8000/");
    assert_eq!(build_absolute_url(&site, "/").unwrap(), "http://example.com:8000/");
}

#[test]
fn test_url_without_domain() {
    let err = build_absolute_url(&site(""), "/a").unwrap_err();
    assert!(matches!(err, KewlError::SiteNotConfigured));
}

#[test]
fn test_meta_tags() {
    assert_eq!(
        meta_twitter("card", "summary_large_image"),
        r#"<meta property="twitter:card" content="summary_large_image" />"#
    );
    assert_eq!(
        meta_open_graph("url", "https://example.com/a/?x=1&y=2"),
        r#"<meta property="og:url" content="https://example.com/a/?x=1&amp;y=2" />"#
    );
}
