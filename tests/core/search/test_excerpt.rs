// Integration tests for search excerpts

use crate::common::{word_count, ARTICLE, PANGRAM};
use kewl::core::search::{searchexcerpt, ExcerptOptions, MatchOptions};

fn options(context_words: usize) -> ExcerptOptions {
    ExcerptOptions {
        context_words,
        matching: MatchOptions::default(),
    }
}

#[test]
fn test_pangram_scenario() {
    let result = searchexcerpt(PANGRAM, &["fox"], &options(1)).unwrap();
    assert_eq!(result.excerpt, "...brown fox jumps...");
    assert_eq!(result.hits, 1);
    assert_eq!(result.original, PANGRAM);
}

#[test]
fn test_no_occurrence_returns_input() {
    for text in [PANGRAM, ARTICLE, "", "   "] {
        let result = searchexcerpt(text, &["zebra", "okapi"], &options(3)).unwrap();
        assert_eq!(result.excerpt, text);
        assert_eq!(result.hits, 0);
    }
}

#[test]
fn test_excerpt_word_count_is_bounded() {
    let phrase_sets: [&[&str]; 4] = [&["fox"], &["fox", "earth"], &["the red fox"], &["a"]];

    for phrases in phrase_sets {
        let max_phrase_words = phrases
            .iter()
            .map(|p| p.split_whitespace().count())
            .max()
            .unwrap_or(0);

        for context_words in 0..5 {
            let result = searchexcerpt(ARTICLE, phrases, &options(context_words)).unwrap();
            let bound =
                (result.hits + 1) * 2 * context_words + result.hits * max_phrase_words;
            assert!(
                word_count(&result.excerpt) <= bound,
                "{phrases:?} with {context_words} words: {:?} exceeds {bound}",
                result.excerpt
            );
        }
    }
}

#[test]
fn test_every_phrase_appears_in_excerpt() {
    let result = searchexcerpt(ARTICLE, &["skulk", "northern"], &options(2)).unwrap();
    assert!(result.excerpt.contains("skulk"));
    assert!(result.excerpt.contains("northern"));
    assert_eq!(result.hits, 2);
}

#[test]
fn test_hits_count_repeats_but_only_first_anchors() {
    let text = "fox one two three four five six seven eight fox";
    let result = searchexcerpt(text, &["fox"], &options(1)).unwrap();
    assert_eq!(result.hits, 2);
    assert_eq!(result.excerpt, "fox one...");
}

#[test]
fn test_overlapping_phrases_prefer_declaration_order() {
    let text = "x y z brown fox a b c";
    let result = searchexcerpt(text, &["brown fox", "fox"], &options(1)).unwrap();
    assert_eq!(result.hits, 1);
    assert_eq!(result.excerpt, "...z brown fox a...");
}

#[test]
fn test_word_boundary_excerpt() {
    let text = "one two firefox three four fox five six";
    let mut opts = options(1);
    opts.matching.word_boundary = true;

    let result = searchexcerpt(text, &["fox"], &opts).unwrap();
    assert_eq!(result.hits, 1);
    assert_eq!(result.excerpt, "...four fox five...");
}

#[test]
fn test_unicode_text() {
    let text = "Der schnelle braune Fuchs springt über den faulen Hund";
    let result = searchexcerpt(text, &["fuchs"], &options(1)).unwrap();
    assert_eq!(result.excerpt, "...braune Fuchs springt...");
}
