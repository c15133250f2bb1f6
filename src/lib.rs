//! kewl - Search and page helpers for server-rendered sites
//!
//! Text helpers for showing search results: excerpts that keep a few
//! words of context around each matched phrase, highlighting that
//! leaves hyperlink targets intact, and hit counts. Alongside them sit
//! a key-cursored iterator for walking large collections, an absolute
//! URL builder and Open Graph/Twitter meta tag formatters.
//!
//! # Architecture
//!
//! - **core**: The helpers themselves (framework-independent)
//!   - config, error, types, xdg
//!   - search (matcher, excerpt, highlight, hits)
//!   - pagination, url, meta
//!
//! - **template**: Tag/filter adapter (depends on core)
//!   - registry, engine
//!
//! - **services**: Config-bound container used by adapters
//!
//! - **cli**: Command-line adapter (depends on core, template)

// Core helpers (framework-independent)
pub mod core;

// Template tags and filters
pub mod template;

// Config-bound service container
pub mod services;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{KewlError, Result};
pub use crate::core::types::*;
pub use crate::services::Services;
