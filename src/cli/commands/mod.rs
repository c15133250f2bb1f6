//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod excerpt;
pub mod highlight;
pub mod hits;
pub mod input;
pub mod meta;
pub mod render;
pub mod url;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use excerpt::ExcerptArgs;
pub use highlight::HighlightArgs;
pub use hits::HitsArgs;
pub use meta::MetaArgs;
pub use render::RenderArgs;
pub use url::UrlArgs;
