// Test helper functions

use kewl::core::config::Config;
use kewl::services::Services;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

#[allow(dead_code)]
static MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<span class="[^"]*">(.*?)</span>"#).unwrap());

/// Create test services from default config with a site domain set
#[allow(dead_code)]
pub fn create_test_services() -> Arc<Services> {
    let mut config = Config::default();
    config.site.domain = "example.com".to_string();
    Arc::new(Services::new(config))
}

/// Remove highlight marker spans, keeping their contents
#[allow(dead_code)]
pub fn strip_markers(highlighted: &str) -> String {
    MARKER.replace_all(highlighted, "$1").into_owned()
}

/// Whitespace-separated words, ignoring ellipses
#[allow(dead_code)]
pub fn word_count(excerpt: &str) -> usize {
    excerpt
        .split_whitespace()
        .map(|w| w.trim_matches('.'))
        .filter(|w| !w.is_empty())
        .count()
}
