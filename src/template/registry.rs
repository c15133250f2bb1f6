//! Registry of template tags and filters

use super::filters::{FilterHandler, HighlightFilter, HitsFilter, SearchExcerptFilter};
use super::tags::{HighlightTag, HitsTag, MetaTag, SearchExcerptTag, TagHandler};
use std::collections::HashMap;
use std::sync::Arc;

/// Dispatch table from tag and filter names to their handlers
///
/// Templates only see what has been registered here; there is no
/// implicit library loading.
#[derive(Clone)]
pub struct Registry {
    tags: HashMap<String, Arc<dyn TagHandler>>,
    filters: HashMap<String, Arc<dyn FilterHandler>>,
}

impl Registry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
            filters: HashMap::new(),
        }
    }

    /// Registry with every built-in tag and filter
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register_tag(Arc::new(SearchExcerptTag));
        registry.register_tag(Arc::new(HighlightTag));
        registry.register_tag(Arc::new(HitsTag));
        registry.register_tag(Arc::new(MetaTag::twitter()));
        registry.register_tag(Arc::new(MetaTag::open_graph()));

        registry.register_filter(Arc::new(SearchExcerptFilter));
        registry.register_filter(Arc::new(HighlightFilter));
        registry.register_filter(Arc::new(HitsFilter));

        registry
    }

    /// Register a tag handler, replacing any tag of the same name
    pub fn register_tag(&mut self, handler: Arc<dyn TagHandler>) {
        let name = handler.name().to_string();
        self.tags.insert(name, handler);
    }

    /// Register a filter handler, replacing any filter of the same name
    pub fn register_filter(&mut self, handler: Arc<dyn FilterHandler>) {
        let name = handler.name().to_string();
        self.filters.insert(name, handler);
    }

    pub fn tag(&self, name: &str) -> Option<&Arc<dyn TagHandler>> {
        self.tags.get(name)
    }

    pub fn filter(&self, name: &str) -> Option<&Arc<dyn FilterHandler>> {
        self.filters.get(name)
    }

    /// Sorted tag names
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tags.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Sorted filter names
    pub fn filter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.filters.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
