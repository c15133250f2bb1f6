//! Search excerpts: keep only the words around each phrase.
//!
//! The text is split into alternating unmatched/matched segments,
//! each segment into whitespace-delimited words. The first
//! occurrence of every distinct phrase anchors a window; everything
//! else between two anchors is merged back into one run of words
//! and trimmed to `context_words` on the side(s) facing an anchor.
//!
//! Word lists keep the empty tokens produced at segment edges, so
//! text glued to a match (`fox` in `foxes`) is re-joined without a
//! space and the kept window is `context_words` real words.

use super::matcher::{MatchOptions, PhraseMatcher};
use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::types::{ExcerptResult, SegmentKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Marker that replaces omitted words
pub const ELLIPSIS: &str = "...";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Options for [`searchexcerpt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExcerptOptions {
    /// Words of context kept on each side of an anchor
    pub context_words: usize,
    pub matching: MatchOptions,
}

impl From<&SearchConfig> for ExcerptOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            context_words: config.context_words,
            matching: MatchOptions::from(config),
        }
    }
}

impl Default for ExcerptOptions {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

/// Truncate `text` so each phrase is shown with its surrounding context.
///
/// When nothing matches, the excerpt is the original text and `hits`
/// is zero.
///
/// # Examples
///
/// ```
/// use kewl::core::search::{searchexcerpt, ExcerptOptions};
///
/// let options = ExcerptOptions { context_words: 1, ..Default::default() };
/// let result = searchexcerpt(
///     "The quick brown fox jumps over the lazy dog",
///     &["fox"],
///     &options,
/// ).unwrap();
/// assert_eq!(result.excerpt, "...brown fox jumps...");
/// assert_eq!(result.hits, 1);
/// ```
pub fn searchexcerpt<S: AsRef<str>>(
    text: &str,
    phrases: &[S],
    options: &ExcerptOptions,
) -> Result<ExcerptResult> {
    let matcher = PhraseMatcher::new(phrases, options.matching)?;
    Ok(excerpt_with(&matcher, text, options.context_words))
}

/// Build an excerpt with an already compiled matcher
pub fn excerpt_with(matcher: &PhraseMatcher, text: &str, context_words: usize) -> ExcerptResult {
    let segments = matcher.split(text);
    let hits = segments.iter().filter(|s| s.is_match()).count();

    if hits == 0 {
        return ExcerptResult {
            original: text.to_string(),
            excerpt: text.to_string(),
            hits: 0,
        };
    }

    let words: Vec<Vec<&str>> = segments
        .iter()
        .map(|segment| WHITESPACE.split(segment.text).collect())
        .collect();

    let mut seen = HashSet::new();
    let anchors: Vec<usize> = segments
        .iter()
        .enumerate()
        .filter_map(|(i, segment)| match segment.kind {
            SegmentKind::Matched { phrase } if seen.insert(phrase) => Some(i),
            _ => None,
        })
        .collect();

    // runs[even] = merged unmatched words, runs[odd] = anchor words
    let mut runs: Vec<Vec<String>> = Vec::with_capacity(anchors.len() * 2 + 1);
    let mut start = 0;
    for &anchor in &anchors {
        runs.push(merge(&words[start..anchor]));
        runs.push(words[anchor].iter().map(|w| w.to_string()).collect());
        start = anchor + 1;
    }
    runs.push(merge(&words[start..]));

    let last = runs.len() - 1;
    let mut excerpt = String::with_capacity(text.len().min(1024));
    for (i, run) in runs.iter().enumerate() {
        let piece = if i % 2 == 1 {
            run.join(" ")
        } else if i == last {
            keep_leading(run, context_words)
        } else if i == 0 {
            keep_trailing(run, context_words)
        } else {
            keep_both(run, context_words)
        };
        excerpt.push_str(&piece);
    }

    tracing::debug!(hits, anchors = anchors.len(), "Built search excerpt");

    ExcerptResult {
        original: text.to_string(),
        excerpt,
        hits,
    }
}

/// Concatenate word lists, gluing the last word of one list to the
/// first word of the next (they were adjacent in the source text).
fn merge(lists: &[Vec<&str>]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();

    for words in lists {
        let mut rest = words.as_slice();
        if let Some(tail) = merged.last_mut() {
            if let Some((first, others)) = rest.split_first() {
                tail.push_str(first);
                rest = others;
            }
        }
        merged.extend(rest.iter().map(|w| w.to_string()));
    }

    merged
}

// The `+ 1` below accounts for the empty edge token next to the anchor.
// Saturating so `usize::MAX` context keeps the whole run.

fn keep_leading(run: &[String], context_words: usize) -> String {
    let keep = context_words.saturating_add(1);
    if run.len() > keep {
        format!("{}{ELLIPSIS}", run[..keep].join(" "))
    } else {
        run.join(" ")
    }
}

fn keep_trailing(run: &[String], context_words: usize) -> String {
    let keep = context_words.saturating_add(1);
    if run.len() > keep {
        format!("{ELLIPSIS}{}", run[run.len() - keep..].join(" "))
    } else {
        run.join(" ")
    }
}

fn keep_both(run: &[String], context_words: usize) -> String {
    let keep = context_words.saturating_add(1);
    if run.len() > keep.saturating_mul(2) {
        format!(
            "{} {ELLIPSIS} {}",
            run[..keep].join(" "),
            run[run.len() - keep..].join(" ")
        )
    } else {
        run.join(" ")
    }
}
