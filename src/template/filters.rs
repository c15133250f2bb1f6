//! Template filters: `{{ body|highlight:terms }}`.
//!
//! Filters take the configured defaults for everything except the
//! search terms.

use super::args::{to_phrases, to_text};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::{highlight, hits, searchexcerpt, ExcerptOptions, HighlightOptions, MatchOptions};
use serde_json::Value;

/// Trait implemented by every template filter
pub trait FilterHandler: Send + Sync {
    /// Filter name (e.g., "highlight")
    fn name(&self) -> &str;

    /// Whether `name:arg` is mandatory
    fn requires_arg(&self) -> bool {
        true
    }

    /// Apply the filter to `value`
    fn apply(&self, value: &Value, arg: Option<&Value>, config: &Config) -> Result<Value>;
}

fn phrases(arg: Option<&Value>) -> Result<Vec<String>> {
    to_phrases(arg.unwrap_or(&Value::Null))
}

/// `|searchexcerpt:terms`
pub struct SearchExcerptFilter;

impl FilterHandler for SearchExcerptFilter {
    fn name(&self) -> &str {
        "searchexcerpt"
    }

    fn apply(&self, value: &Value, arg: Option<&Value>, config: &Config) -> Result<Value> {
        let options = ExcerptOptions::from(&config.search);
        let result = searchexcerpt(&to_text(value), &phrases(arg)?, &options)?;
        Ok(Value::String(result.excerpt))
    }
}

/// `|highlight:terms`
pub struct HighlightFilter;

impl FilterHandler for HighlightFilter {
    fn name(&self) -> &str {
        "highlight"
    }

    fn apply(&self, value: &Value, arg: Option<&Value>, config: &Config) -> Result<Value> {
        let options = HighlightOptions::from(&config.search);
        let result = highlight(&to_text(value), &phrases(arg)?, &options)?;
        Ok(Value::String(result.highlighted))
    }
}

/// `|hits:terms`
pub struct HitsFilter;

impl FilterHandler for HitsFilter {
    fn name(&self) -> &str {
        "hits"
    }

    fn apply(&self, value: &Value, arg: Option<&Value>, config: &Config) -> Result<Value> {
        let options = MatchOptions::from(&config.search);
        let count = hits(&to_text(value), &phrases(arg)?, &options)?;
        Ok(Value::from(count))
    }
}
