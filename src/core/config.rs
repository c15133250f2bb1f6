//! Configuration management for kewl.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.
//! Every search helper takes its defaults from [`SearchConfig`]
//! explicitly; nothing is read from global state at call time.

use crate::core::error::{KewlError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Defaults for searchexcerpt, highlight and hits
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Words of context kept on each side of a match
    #[serde(default = "default_context_words")]
    pub context_words: usize,

    /// Match phrases case-insensitively
    #[serde(default = "default_ignore_case")]
    pub ignore_case: bool,

    /// Only match whole words
    #[serde(default)]
    pub word_boundary: bool,

    /// CSS class of the span wrapped around highlighted matches
    #[serde(default = "default_highlight_class")]
    pub highlight_class: String,
}

/// Site identity used to build absolute URLs
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Human-readable site name
    #[serde(default)]
    pub name: String,

    /// Domain (optionally with port), e.g. "example.com"
    #[serde(default)]
    pub domain: String,

    /// URL scheme of the current environment
    #[serde(default = "default_url_scheme")]
    pub url_scheme: String,
}

/// Pagination cursor configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PaginationConfig {
    /// Elements fetched per page
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Full passes attempted before the cursor gives up on reaching
    /// the final element
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,
}

// Default value functions
fn default_context_words() -> usize {
    10
}

fn default_ignore_case() -> bool {
    true
}

fn default_highlight_class() -> String {
    "match".to_string()
}

fn default_url_scheme() -> String {
    "https".to_string()
}

fn default_chunk_size() -> usize {
    23323
}

fn default_max_passes() -> usize {
    3
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            context_words: default_context_words(),
            ignore_case: default_ignore_case(),
            word_boundary: false,
            highlight_class: default_highlight_class(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            domain: String::new(),
            url_scheme: default_url_scheme(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            max_passes: default_max_passes(),
        }
    }
}

/// Parse a boolean flag the way env vars and template arguments spell them
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| KewlError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        xdg.log_paths();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. KEWL_CONFIG env var
    /// 2. XDG config file (~/.config/kewl/config.toml)
    /// 3. ./kewl.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("KEWL_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("kewl.toml").exists() {
                Self::from_file("kewl.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Load an explicit config file, then apply env overrides
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::from_file(path)?;
        config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Search configuration
        if let Ok(words) = env::var("KEWL_SEARCH_CONTEXT_WORDS") {
            if let Ok(w) = words.parse() {
                self.search.context_words = w;
            }
        }
        if let Ok(ignore_case) = env::var("KEWL_SEARCH_IGNORE_CASE") {
            if let Some(flag) = parse_flag(&ignore_case) {
                self.search.ignore_case = flag;
            }
        }
        if let Ok(word_boundary) = env::var("KEWL_SEARCH_WORD_BOUNDARY") {
            if let Some(flag) = parse_flag(&word_boundary) {
                self.search.word_boundary = flag;
            }
        }
        if let Ok(class) = env::var("KEWL_SEARCH_HIGHLIGHT_CLASS") {
            self.search.highlight_class = class;
        }

        // Site configuration
        if let Ok(name) = env::var("KEWL_SITE_NAME") {
            self.site.name = name;
        }
        if let Ok(domain) = env::var("KEWL_SITE_DOMAIN") {
            self.site.domain = domain;
        }
        if let Ok(scheme) = env::var("KEWL_URL_SCHEME") {
            self.site.url_scheme = scheme;
        }

        // Pagination configuration
        if let Ok(chunk_size) = env::var("KEWL_PAGINATION_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.pagination.chunk_size = size;
            }
        }
        if let Ok(max_passes) = env::var("KEWL_PAGINATION_MAX_PASSES") {
            if let Ok(passes) = max_passes.parse() {
                self.pagination.max_passes = passes;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let class = &self.search.highlight_class;
        if class.trim().is_empty() {
            return Err(KewlError::ConfigError(
                "Highlight class must be non-empty".to_string(),
            ));
        }
        if class.contains(['"', '<', '>']) {
            return Err(KewlError::ConfigError(format!(
                "Highlight class contains markup characters: {class:?}"
            )));
        }

        let scheme = &self.site.url_scheme;
        if scheme.is_empty()
            || !scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
        {
            return Err(KewlError::ConfigError(format!(
                "Invalid URL scheme: {scheme:?}"
            )));
        }

        if self.pagination.chunk_size == 0 {
            return Err(KewlError::ConfigError(
                "Pagination chunk size must be non-zero".to_string(),
            ));
        }

        if self.pagination.max_passes == 0 {
            return Err(KewlError::ConfigError(
                "Pagination max passes must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Context words: {}", self.search.context_words);
        tracing::info!("  Ignore case: {}", self.search.ignore_case);
        tracing::info!("  Word boundary: {}", self.search.word_boundary);
        tracing::info!("  Highlight class: {}", self.search.highlight_class);
        tracing::info!("  Site domain: {:?}", self.site.domain);
        tracing::info!("  URL scheme: {}", self.site.url_scheme);
        tracing::info!("  Pagination chunk size: {}", self.pagination.chunk_size);
        tracing::info!("  Pagination max passes: {}", self.pagination.max_passes);
    }
}
