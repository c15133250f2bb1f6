//! Wrap phrase occurrences in a styled marker span.
//!
//! Matches that sit inside a hyperlink target (`<a ... href="...fox`)
//! are left alone so the markup is not broken. The check only looks
//! at the [`LINK_LOOKBACK_CHARS`] characters before the match, and is
//! skipped entirely in word-boundary mode.

use super::matcher::{MatchOptions, PhraseMatcher};
use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::types::HighlightResult;
use regex::{Regex, RegexBuilder};
use std::fmt::Write;

/// How far back from a match to look for an open `<a href="`
pub const LINK_LOOKBACK_CHARS: usize = 100;

/// Options for [`highlight`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightOptions {
    pub matching: MatchOptions,
    /// CSS class of the marker span
    pub class_name: String,
}

impl From<&SearchConfig> for HighlightOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            matching: MatchOptions::from(config),
            class_name: config.highlight_class.clone(),
        }
    }
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

/// Wrap every phrase occurrence in `<span class="...">`.
///
/// # Examples
///
/// ```
/// use kewl::core::search::{highlight, HighlightOptions};
///
/// let result = highlight("Rust is fun", &["rust"], &HighlightOptions::default()).unwrap();
/// assert_eq!(result.highlighted, r#"<span class="match">Rust</span> is fun"#);
/// assert_eq!(result.hits, 1);
/// ```
pub fn highlight<S: AsRef<str>>(
    text: &str,
    phrases: &[S],
    options: &HighlightOptions,
) -> Result<HighlightResult> {
    let matcher = PhraseMatcher::new(phrases, options.matching)?;
    highlight_with(&matcher, text, &options.class_name)
}

/// Highlight with an already compiled matcher
pub fn highlight_with(
    matcher: &PhraseMatcher,
    text: &str,
    class_name: &str,
) -> Result<HighlightResult> {
    let link_target = if matcher.options().word_boundary || matcher.is_empty() {
        None
    } else {
        Some(link_target_regex(matcher)?)
    };

    let mut highlighted = String::with_capacity(text.len());
    let mut hits = 0;
    let mut last = 0;

    for m in matcher.find_iter(text) {
        highlighted.push_str(&text[last..m.start]);
        let matched = &text[m.start..m.end];

        let in_link = link_target.as_ref().is_some_and(|re| {
            let from = lookback_start(text, m.start);
            re.is_match(&text[from..m.end])
        });

        if in_link {
            highlighted.push_str(matched);
        } else {
            hits += 1;
            // Writing to a String cannot fail
            let _ = write!(highlighted, r#"<span class="{class_name}">{matched}</span>"#);
        }
        last = m.end;
    }
    highlighted.push_str(&text[last..]);

    tracing::debug!(hits, "Highlighted phrases");

    Ok(HighlightResult {
        original: text.to_string(),
        highlighted,
        hits,
    })
}

/// Matches an unterminated `<a ... href="...` that ends in a phrase
fn link_target_regex(matcher: &PhraseMatcher) -> Result<Regex> {
    let pattern = format!(r#"<a[^>]+?href="[^>]*?{}$"#, matcher.alternation());
    Ok(RegexBuilder::new(&pattern)
        .case_insensitive(matcher.options().ignore_case)
        .build()?)
}

/// Byte offset `LINK_LOOKBACK_CHARS` characters before `end` (or 0)
fn lookback_start(text: &str, end: usize) -> usize {
    text[..end]
        .char_indices()
        .rev()
        .nth(LINK_LOOKBACK_CHARS - 1)
        .map_or(0, |(i, _)| i)
}
