// Integration tests for hit counting

use crate::common::{ARTICLE, PANGRAM};
use kewl::core::search::{hits, MatchOptions};

fn opts(ignore_case: bool, word_boundary: bool) -> MatchOptions {
    MatchOptions {
        ignore_case,
        word_boundary,
    }
}

#[test]
fn test_case_insensitive() {
    assert_eq!(hits("Hello", &["hello"], &opts(true, false)).unwrap(), 1);
    assert_eq!(hits("Hello", &["hello"], &opts(false, false)).unwrap(), 0);
}

#[test]
fn test_word_boundary() {
    assert_eq!(hits("catalog", &["cat"], &opts(true, true)).unwrap(), 0);
    assert_eq!(hits("catalog", &["cat"], &opts(true, false)).unwrap(), 1);
}

#[test]
fn test_no_occurrence_is_zero() {
    assert_eq!(hits(PANGRAM, &["zebra"], &MatchOptions::default()).unwrap(), 0);
    assert_eq!(hits("", &["fox"], &MatchOptions::default()).unwrap(), 0);

    let none: [&str; 0] = [];
    assert_eq!(hits(PANGRAM, &none, &MatchOptions::default()).unwrap(), 0);
}

#[test]
fn test_regex_metacharacters_are_literal() {
    let text = "costs $5.00 (approx.) or 5x00";
    assert_eq!(hits(text, &["$5.00"], &MatchOptions::default()).unwrap(), 1);
    assert_eq!(hits(text, &["(approx.)"], &MatchOptions::default()).unwrap(), 1);
    assert_eq!(hits(text, &[".*"], &MatchOptions::default()).unwrap(), 0);
}

#[test]
fn test_multiple_phrases() {
    assert_eq!(
        hits(ARTICLE, &["fox", "earth"], &opts(true, true)).unwrap(),
        5
    );
}
