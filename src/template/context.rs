//! Template rendering context.
//!
//! Variables are JSON values so contexts can be built from serde
//! types or loaded straight from a JSON document.

use crate::core::error::{KewlError, Result};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    vars: Map<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from a JSON object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(vars) => Ok(Self { vars }),
            Value::Null => Ok(Self::default()),
            other => Err(KewlError::InvalidArgument(format!(
                "Template context must be a JSON object, got {other}"
            ))),
        }
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Look up a dotted path such as `page.title` or `results.0.hits`
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.vars.get(parts.next()?)?;

        for part in parts {
            current = match current {
                Value::Object(map) => map.get(part)?,
                Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.vars)
    }
}
