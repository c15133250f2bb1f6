//! Unified service container for kewl
//!
//! Binds the helpers to one loaded [`Config`] so adapters (the CLI, or
//! an embedding application) do not thread options through every call.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::meta::meta_head;
use crate::core::search::{self, ExcerptOptions, HighlightOptions, MatchOptions};
use crate::core::types::{ExcerptResult, HighlightResult};
use crate::core::url::build_absolute_url;
use crate::template::{Context, Engine};
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Application configuration
    pub config: Arc<Config>,

    /// Template engine with the built-in tags and filters
    pub engine: Arc<Engine>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Self {
        let engine = Arc::new(Engine::new(config.clone()));
        Self {
            config: Arc::new(config),
            engine,
        }
    }

    /// Configured excerpt options
    pub fn excerpt_options(&self) -> ExcerptOptions {
        ExcerptOptions::from(&self.config.search)
    }

    /// Configured highlight options
    pub fn highlight_options(&self) -> HighlightOptions {
        HighlightOptions::from(&self.config.search)
    }

    /// Configured match options
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions::from(&self.config.search)
    }

    pub fn excerpt<S: AsRef<str>>(
        &self,
        text: &str,
        phrases: &[S],
        options: &ExcerptOptions,
    ) -> Result<ExcerptResult> {
        search::searchexcerpt(text, phrases, options)
    }

    pub fn highlight<S: AsRef<str>>(
        &self,
        text: &str,
        phrases: &[S],
        options: &HighlightOptions,
    ) -> Result<HighlightResult> {
        search::highlight(text, phrases, options)
    }

    pub fn hits<S: AsRef<str>>(
        &self,
        text: &str,
        phrases: &[S],
        options: &MatchOptions,
    ) -> Result<usize> {
        search::hits(text, phrases, options)
    }

    /// Absolute URL on the configured site
    pub fn absolute_url(&self, path: &str) -> Result<String> {
        build_absolute_url(&self.config.site, path)
    }

    pub fn meta(&self, namespace: &str, key: &str, content: &str) -> String {
        meta_head(namespace, key, content)
    }

    /// Render template source against `ctx`
    pub fn render(&self, source: &str, ctx: &mut Context) -> Result<String> {
        self.engine.render_str(source, ctx)
    }
}
