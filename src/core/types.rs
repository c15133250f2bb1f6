//! Core data types for kewl.
//!
//! Result values returned by the search helpers. None of them
//! outlive the call that produced them; they are plain values that
//! serialize into the shape templates store under `as name`.

use serde::{Deserialize, Serialize};

/// Whether a segment of source text matched a search phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Unmatched,
    /// Matched the phrase at this index of the phrase list
    Matched { phrase: usize },
}

/// A slice of the source text, in original left-to-right order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSegment<'a> {
    pub text: &'a str,
    pub kind: SegmentKind,
}

impl<'a> TextSegment<'a> {
    pub fn unmatched(text: &'a str) -> Self {
        Self {
            text,
            kind: SegmentKind::Unmatched,
        }
    }

    pub fn matched(text: &'a str, phrase: usize) -> Self {
        Self {
            text,
            kind: SegmentKind::Matched { phrase },
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self.kind, SegmentKind::Matched { .. })
    }
}

/// A phrase occurrence located in a text (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    pub start: usize,
    pub end: usize,
    /// Index into the phrase list that produced this match
    pub phrase: usize,
}

/// Output of `searchexcerpt`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptResult {
    /// The text that was searched
    pub original: String,

    /// Text truncated to the context around each phrase
    pub excerpt: String,

    /// Number of phrase occurrences in the original text
    pub hits: usize,
}

/// Output of `highlight`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightResult {
    /// The text that was searched
    pub original: String,

    /// Text with every eligible match wrapped in a marker span
    pub highlighted: String,

    /// Number of wrapped matches
    pub hits: usize,
}
