//! Core helpers (framework-independent)
//!
//! Everything here is a plain function over strings, config values or
//! a page source. The template layer and the CLI are thin adapters.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Result and segment structures
//! - **xdg**: XDG directory handling
//! - **search**: Phrase matching, excerpts, highlighting and hit counts
//! - **pagination**: Key-cursored iteration over large collections
//! - **url**: Absolute URL builder
//! - **meta**: Open Graph / Twitter meta tags

pub mod config;
pub mod error;
pub mod meta;
pub mod pagination;
pub mod search;
pub mod types;
pub mod url;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{KewlError, Result};
