//! Rendering helpers for pre-computed search results.
//!
//! Nothing here executes a search query. Given a body of text and
//! the phrases a user searched for, these helpers:
//!
//! - **matcher**: compile phrases into one indexed alternation
//! - **excerpt**: cut the text down to the context around each phrase
//! - **highlight**: wrap occurrences in a styled marker span
//! - **hits**: count occurrences

mod excerpt;
mod highlight;
mod hits;
mod matcher;

pub use excerpt::{excerpt_with, searchexcerpt, ExcerptOptions, ELLIPSIS};
pub use highlight::{highlight, highlight_with, HighlightOptions, LINK_LOOKBACK_CHARS};
pub use hits::hits;
pub use matcher::{MatchOptions, PhraseMatcher};
