//! Count phrase occurrences.

use super::matcher::{MatchOptions, PhraseMatcher};
use crate::core::error::Result;

/// Number of non-overlapping phrase occurrences in `text`.
///
/// # Examples
///
/// ```
/// use kewl::core::search::{hits, MatchOptions};
///
/// let strict = MatchOptions { ignore_case: true, word_boundary: true };
/// assert_eq!(hits("catalog", &["cat"], &strict).unwrap(), 0);
/// ```
pub fn hits<S: AsRef<str>>(text: &str, phrases: &[S], options: &MatchOptions) -> Result<usize> {
    let matcher = PhraseMatcher::new(phrases, *options)?;
    Ok(matcher.count(text))
}
