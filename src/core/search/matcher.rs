//! Phrase matching shared by excerpt, highlight and hits.
//!
//! All phrases are escaped and compiled into a single alternation
//! in which every alternative is its own capture group. The group
//! that fired tells us which phrase produced a match, so no second
//! round of matching is needed to attribute it.

use crate::core::config::SearchConfig;
use crate::core::error::Result;
use crate::core::types::{PhraseMatch, TextSegment};
use regex::{Regex, RegexBuilder};

/// Per-call matching options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    pub ignore_case: bool,
    pub word_boundary: bool,
}

impl From<&SearchConfig> for MatchOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            ignore_case: config.ignore_case,
            word_boundary: config.word_boundary,
        }
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

/// Compiled phrase alternation
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    phrases: Vec<String>,
    /// Phrase index for each capture group, in group order
    group_phrases: Vec<usize>,
    /// `(?:a|b|...)` over the escaped phrases, no boundaries or groups
    alternation: String,
    regex: Option<Regex>,
    options: MatchOptions,
}

impl PhraseMatcher {
    /// Compile a matcher. Empty phrases are skipped; a matcher with no
    /// usable phrase never matches anything.
    pub fn new<S: AsRef<str>>(phrases: &[S], options: MatchOptions) -> Result<Self> {
        let phrases: Vec<String> = phrases.iter().map(|p| p.as_ref().to_string()).collect();

        let mut group_phrases = Vec::new();
        let mut escaped = Vec::new();
        for (index, phrase) in phrases.iter().enumerate() {
            if phrase.is_empty() {
                continue;
            }
            group_phrases.push(index);
            escaped.push(regex::escape(phrase));
        }

        if escaped.is_empty() {
            return Ok(Self {
                phrases,
                group_phrases,
                alternation: String::new(),
                regex: None,
                options,
            });
        }

        let groups = escaped
            .iter()
            .map(|e| format!("({e})"))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = if options.word_boundary {
            format!(r"\b(?:{groups})\b")
        } else {
            groups
        };

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(options.ignore_case)
            .build()?;

        tracing::debug!(
            phrases = group_phrases.len(),
            ignore_case = options.ignore_case,
            word_boundary = options.word_boundary,
            "Compiled phrase matcher"
        );

        Ok(Self {
            phrases,
            group_phrases,
            alternation: format!("(?:{})", escaped.join("|")),
            regex: Some(regex),
            options,
        })
    }

    /// Phrases as supplied, including any skipped empty ones
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// True when there is no usable phrase
    pub fn is_empty(&self) -> bool {
        self.regex.is_none()
    }

    /// Non-capturing alternation of the escaped phrases
    pub(crate) fn alternation(&self) -> &str {
        &self.alternation
    }

    /// All non-overlapping matches, left to right
    pub fn find_iter(&self, text: &str) -> Vec<PhraseMatch> {
        let Some(regex) = &self.regex else {
            return Vec::new();
        };

        regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let group = caps.iter().skip(1).position(|g| g.is_some())?;
                Some(PhraseMatch {
                    start: whole.start(),
                    end: whole.end(),
                    phrase: self.group_phrases[group],
                })
            })
            .collect()
    }

    /// Number of non-overlapping matches
    pub fn count(&self, text: &str) -> usize {
        self.regex
            .as_ref()
            .map_or(0, |regex| regex.find_iter(text).count())
    }

    /// Split text into alternating unmatched/matched segments.
    ///
    /// The result always starts and ends with an unmatched segment
    /// (possibly empty), so matched segments sit at odd indices.
    pub fn split<'a>(&self, text: &'a str) -> Vec<TextSegment<'a>> {
        let mut segments = Vec::new();
        let mut last = 0;

        for m in self.find_iter(text) {
            segments.push(TextSegment::unmatched(&text[last..m.start]));
            segments.push(TextSegment::matched(&text[m.start..m.end], m.phrase));
            last = m.end;
        }
        segments.push(TextSegment::unmatched(&text[last..]));

        segments
    }
}
