//! Template tokenizer.
//!
//! Splits template source into text, `{{ variable }}` and
//! `{% block %}` tokens. `{# comments #}` are dropped.

use crate::core::error::{KewlError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\{%\s*(?P<block>.*?)\s*%\}|\{\{\s*(?P<var>.*?)\s*\}\}|\{#.*?#\}").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Text(String),
    Variable(String),
    Block(String),
}

/// Tokenize template source
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in TAG_PATTERN.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if whole.start() > last {
            tokens.push(Token::Text(source[last..whole.start()].to_string()));
        }
        if let Some(block) = caps.name("block") {
            tokens.push(Token::Block(block.as_str().to_string()));
        } else if let Some(var) = caps.name("var") {
            tokens.push(Token::Variable(var.as_str().to_string()));
        }
        last = whole.end();
    }

    if last < source.len() {
        tokens.push(Token::Text(source[last..].to_string()));
    }

    tokens
}

/// Split tag contents on whitespace, keeping quoted strings
/// (quotes included) together.
pub fn split_contents(contents: &str) -> Result<Vec<String>> {
    let mut bits = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in contents.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => {
                current.push(c);
                quote = Some(c);
            }
            None if c.is_whitespace() => {
                if !current.is_empty() {
                    bits.push(std::mem::take(&mut current));
                }
            }
            None => current.push(c),
        }
    }

    if let Some(q) = quote {
        return Err(KewlError::TemplateSyntax(format!(
            "Unterminated {q} quote in: {contents}"
        )));
    }
    if !current.is_empty() {
        bits.push(current);
    }

    Ok(bits)
}

/// Split `s` on `sep` wherever it is not inside quotes
pub fn split_unquoted(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == sep => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            None => {}
        }
    }
    parts.push(&s[start..]);

    parts
}
