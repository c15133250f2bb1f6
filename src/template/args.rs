//! Tag and filter arguments.
//!
//! An argument is either a literal (quoted string, integer, `True`,
//! `False`, `None`) or a dotted variable path resolved against the
//! [`Context`] at render time. Missing variables resolve to `null`,
//! which the search tags treat as "use the configured default".

use super::context::Context;
use crate::core::config::parse_flag;
use crate::core::error::{KewlError, Result};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Literal(Value),
    Variable(String),
}

impl Arg {
    /// Parse one bit of a tag or filter expression
    pub fn parse(bit: &str) -> Result<Self> {
        let bit = bit.trim();

        if let Some(inner) = unquote(bit) {
            return Ok(Arg::Literal(Value::String(inner.to_string())));
        }

        match bit {
            "True" => return Ok(Arg::Literal(Value::Bool(true))),
            "False" => return Ok(Arg::Literal(Value::Bool(false))),
            "None" => return Ok(Arg::Literal(Value::Null)),
            _ => {}
        }

        if let Ok(n) = bit.parse::<i64>() {
            return Ok(Arg::Literal(Value::from(n)));
        }
        if let Ok(n) = bit.parse::<u64>() {
            return Ok(Arg::Literal(Value::from(n)));
        }

        let digits = bit.strip_prefix('-').unwrap_or(bit);
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(KewlError::TemplateSyntax(format!(
                "Integer literal out of range: {bit:?}"
            )));
        }

        // A variable name cannot start with a digit
        let valid_path = !bit.starts_with(|c: char| c.is_ascii_digit())
            && bit
                .split('.')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_alphanumeric() || c == '_'));
        if !valid_path {
            return Err(KewlError::TemplateSyntax(format!(
                "Could not parse argument: {bit:?}"
            )));
        }

        Ok(Arg::Variable(bit.to_string()))
    }

    pub fn resolve(&self, ctx: &Context) -> Value {
        match self {
            Arg::Literal(value) => value.clone(),
            Arg::Variable(path) => ctx.get(path).cloned().unwrap_or(Value::Null),
        }
    }
}

fn unquote(bit: &str) -> Option<&str> {
    let first = bit.chars().next()?;
    if (first == '"' || first == '\'') && bit.len() >= 2 && bit.ends_with(first) {
        Some(&bit[1..bit.len() - 1])
    } else {
        None
    }
}

/// Render a value as template output
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// Phrases from a string (one phrase) or a list
pub fn to_phrases(value: &Value) -> Result<Vec<String>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                Value::Number(n) => Ok(n.to_string()),
                other => Err(KewlError::InvalidArgument(format!(
                    "Search phrase must be a string, got {other}"
                ))),
            })
            .collect(),
        other => Err(KewlError::InvalidArgument(format!(
            "Search terms must be a string or a list of strings, got {other}"
        ))),
    }
}

/// Optional boolean flag; `null` means "not given"
pub fn to_flag(value: &Value, name: &str) -> Result<Option<bool>> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        Value::Number(n) => Ok(Some(n.as_f64().is_some_and(|f| f != 0.0))),
        Value::String(s) => parse_flag(s).map(Some).ok_or_else(|| {
            KewlError::InvalidArgument(format!("{name} must be a boolean, got {s:?}"))
        }),
        other => Err(KewlError::InvalidArgument(format!(
            "{name} must be a boolean, got {other}"
        ))),
    }
}

/// Optional non-negative count; `null` means "not given"
pub fn to_count(value: &Value, name: &str) -> Result<Option<usize>> {
    let invalid = || KewlError::InvalidArgument(format!("{name} must be a non-negative integer, got {value}"));
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(invalid),
        Value::String(s) => s.trim().parse::<usize>().map(Some).map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}
