//! Template surface for the search helpers
//!
//! Exposes `searchexcerpt`, `highlight` and `hits` as block tags and
//! filters, and the Twitter/Open Graph meta tags, through an explicit
//! [`Registry`] that the [`Engine`] dispatches on.
//!
//! # Architecture
//!
//! - **lexer**: Tokenizer and tag argument splitting
//! - **context**: Variables visible to a template
//! - **args**: Literal and variable arguments
//! - **tags**: Tag handlers
//! - **filters**: Filter handlers
//! - **registry**: Name to handler dispatch table
//! - **engine**: Compile and render

pub mod args;
pub mod context;
pub mod engine;
pub mod filters;
pub mod lexer;
pub mod registry;
pub mod tags;

pub use context::Context;
pub use engine::{Engine, Template};
pub use filters::FilterHandler;
pub use registry::Registry;
pub use tags::{Rendered, TagCall, TagHandler};
